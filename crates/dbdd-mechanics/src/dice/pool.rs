//! Dice pool construction and rolling.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::D6_SIDES;
use super::roll::RollResult;

/// A number of d6 rolled together.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DicePool {
    count: u32,
}

impl DicePool {
    /// Create a pool of `count` six-sided dice.
    pub fn d6(count: u32) -> Self {
        Self { count }
    }

    /// Returns how many dice are in the pool.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Returns true if the pool has no dice.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Lowest possible total for this pool.
    pub fn min_total(&self) -> u32 {
        self.count
    }

    /// Highest possible total for this pool.
    pub fn max_total(&self) -> u32 {
        self.count * D6_SIDES
    }

    /// Roll all dice in the pool using the given RNG.
    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> RollResult {
        let dice = (0..self.count)
            .map(|_| rng.random_range(1..=D6_SIDES))
            .collect();
        RollResult::new(dice)
    }
}

impl std::fmt::Display for DicePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d{D6_SIDES}", self.count)
    }
}
