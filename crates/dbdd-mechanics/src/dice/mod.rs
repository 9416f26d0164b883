//! Six-sided dice pools and rolling.
//!
//! Every check in DBD&D rolls a pool of d6 and sums it. Rolling goes
//! through the [`DiceRoller`] trait so callers can swap the entropy source
//! for a seeded or scripted one.

pub mod pool;
pub mod roll;
pub mod roller;

pub use pool::DicePool;
pub use roll::RollResult;
pub use roller::{DiceRoller, RandomRoller, ScriptedRoller};

use rand::Rng;

/// Number of faces on every die in a pool.
pub const D6_SIDES: u32 = 6;

/// Roll `pool_size` six-sided dice from the thread-local RNG and return the sum.
///
/// A pool of zero dice always totals 0.
pub fn roll(pool_size: u32) -> u32 {
    roll_with(pool_size, &mut rand::rng())
}

/// Roll `pool_size` six-sided dice from the given RNG and return the sum.
pub fn roll_with<R: Rng + ?Sized>(pool_size: u32, rng: &mut R) -> u32 {
    DicePool::d6(pool_size).roll(rng).total()
}
