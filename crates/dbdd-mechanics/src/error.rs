//! Error types for the mechanics engine.

use crate::roll::RollModifier;

/// Errors that can occur during mechanics operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MechError {
    /// A trait rating lies outside the 0-4 scale.
    #[error("rating {0} is out of range (expected 0-4)")]
    RatingOutOfRange(u8),

    /// The modifier pushes the effective rating outside the rollable range.
    #[error("{modifier} roll is not available at rating {rating}")]
    RollUnavailable {
        /// Base trait rating.
        rating: u8,
        /// Requested modifier.
        modifier: RollModifier,
    },

    /// The outcome table has no entry for this pool size.
    #[error("no outcome table for {0}d6")]
    UnsupportedPool(u32),

    /// A modifier string could not be parsed.
    #[error("invalid modifier: {0}")]
    InvalidModifier(String),
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
