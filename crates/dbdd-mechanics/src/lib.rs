//! Dice and outcome mechanics for the DBD&D character sheet.
//!
//! Provides d6 pool rolling, the roll-outcome table, and the roll
//! orchestration that turns a trait rating and an advantage/disadvantage
//! modifier into a recorded result.

pub mod dice;
pub mod error;
pub mod outcome;
pub mod roll;
pub mod tracker;

pub use dice::{DicePool, DiceRoller, RandomRoller, RollResult, ScriptedRoller};
pub use error::{MechError, MechResult};
pub use outcome::{Outcome, OutcomeBands, interpret, try_interpret};
pub use roll::{RollModifier, RollRecord, is_available, perform_roll, pool_size};
pub use tracker::RollTracker;
