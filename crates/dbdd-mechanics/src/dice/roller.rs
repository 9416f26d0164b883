//! Sources of dice faces.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::D6_SIDES;
use super::pool::DicePool;
use super::roll::RollResult;

/// Something that can roll a dice pool.
pub trait DiceRoller {
    /// Roll every die in `pool`.
    fn roll_pool(&mut self, pool: DicePool) -> RollResult;
}

/// Rolls dice from a random number generator.
#[derive(Debug, Clone)]
pub struct RandomRoller<R = StdRng> {
    rng: R,
}

impl RandomRoller<StdRng> {
    /// A roller with a fixed seed, for reproducible rolls.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// A roller seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl<R: Rng> RandomRoller<R> {
    /// Wrap an existing RNG.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> DiceRoller for RandomRoller<R> {
    fn roll_pool(&mut self, pool: DicePool) -> RollResult {
        pool.roll(&mut self.rng)
    }
}

/// Replays a fixed sequence of faces, cycling when exhausted.
///
/// Faces are clamped to 1-6. An empty script rolls every die as a 1.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRoller {
    faces: Vec<u32>,
    cursor: usize,
}

impl ScriptedRoller {
    /// Create a roller that yields `faces` in order.
    pub fn new(faces: impl IntoIterator<Item = u32>) -> Self {
        Self {
            faces: faces
                .into_iter()
                .map(|f| f.clamp(1, D6_SIDES))
                .collect(),
            cursor: 0,
        }
    }

    /// Create a roller whose next roll of `count` dice sums to `total`.
    ///
    /// Returns `None` when `total` cannot be shown by `count` d6.
    pub fn for_total(count: u32, total: u32) -> Option<Self> {
        let pool = DicePool::d6(count);
        if total < pool.min_total() || total > pool.max_total() {
            return None;
        }
        if count == 0 {
            return Some(Self::default());
        }
        let base = total / count;
        let extra = total % count;
        Some(Self::new((0..count).map(|i| base + u32::from(i < extra))))
    }

    fn next_face(&mut self) -> u32 {
        if self.faces.is_empty() {
            return 1;
        }
        let face = self.faces[self.cursor % self.faces.len()];
        self.cursor += 1;
        face
    }
}

impl DiceRoller for ScriptedRoller {
    fn roll_pool(&mut self, pool: DicePool) -> RollResult {
        RollResult::new((0..pool.count()).map(|_| self.next_face()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_rollers_agree() {
        let mut a = RandomRoller::seeded(3);
        let mut b = RandomRoller::seeded(3);
        assert_eq!(
            a.roll_pool(DicePool::d6(6)),
            b.roll_pool(DicePool::d6(6))
        );
    }

    #[test]
    fn scripted_faces_in_order() {
        let mut roller = ScriptedRoller::new([6, 1, 4]);
        let result = roller.roll_pool(DicePool::d6(2));
        assert_eq!(result.dice(), &[6, 1]);
        let result = roller.roll_pool(DicePool::d6(2));
        assert_eq!(result.dice(), &[4, 6]);
    }

    #[test]
    fn scripted_faces_clamped() {
        let mut roller = ScriptedRoller::new([0, 9]);
        assert_eq!(roller.roll_pool(DicePool::d6(2)).dice(), &[1, 6]);
    }

    #[test]
    fn empty_script_rolls_ones() {
        let mut roller = ScriptedRoller::default();
        assert_eq!(roller.roll_pool(DicePool::d6(3)).total(), 3);
    }

    #[test]
    fn for_total_hits_target() {
        for (count, total) in [(2, 7), (4, 14), (4, 11), (6, 25), (6, 6), (6, 36)] {
            let mut roller = ScriptedRoller::for_total(count, total).unwrap();
            let result = roller.roll_pool(DicePool::d6(count));
            assert_eq!(result.total(), total);
            assert!(result.dice().iter().all(|d| (1..=6).contains(d)));
        }
    }

    #[test]
    fn for_total_rejects_impossible() {
        assert!(ScriptedRoller::for_total(2, 1).is_none());
        assert!(ScriptedRoller::for_total(2, 13).is_none());
        assert!(ScriptedRoller::for_total(0, 0).is_some());
    }
}
