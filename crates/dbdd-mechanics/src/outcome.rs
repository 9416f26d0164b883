//! The roll-outcome table.
//!
//! A total is judged by its distance from the pool's pivot, the expected
//! value of the roll (3.5 per die). Hitting the pivot exactly is a critical
//! success. Landing within `pool / 2` of it on either side succeeds at a
//! cost. Anything further away fails, and the side it misses on decides
//! whether the failure brings a complication (`no-and`) or a silver lining
//! (`no-but`).
//!
//! | pool | critical | success    | failure (low) | failure (high) |
//! |------|----------|------------|---------------|----------------|
//! | 2d6  | 7        | 6, 8       | < 6           | > 8            |
//! | 4d6  | 14       | 12-13, 15-16 | < 12        | > 16           |
//! | 6d6  | 21       | 18-20, 22-24 | < 18        | > 24           |

use serde::{Deserialize, Serialize};

use crate::error::{MechError, MechResult};

/// Pool sizes the outcome table covers.
pub const SUPPORTED_POOLS: [u32; 3] = [2, 4, 6];

/// The categorical result of a roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The total hit the pivot exactly.
    CriticalSuccess,
    /// The total landed next to the pivot.
    SuccessAtCost,
    /// The total fell short of the success band.
    FailureAnd,
    /// The total overshot the success band.
    FailureBut,
    /// The pool size has no table.
    Unknown,
}

impl Outcome {
    /// The full display label, e.g. `Success | Disadvantage on Save | yes-but`.
    pub fn label(self) -> &'static str {
        match self {
            Self::CriticalSuccess => "Critical Success | No Save | yes-and",
            Self::SuccessAtCost => "Success | Disadvantage on Save | yes-but",
            Self::FailureAnd => "Failure | Regular Save | no-and",
            Self::FailureBut => "Failure | Regular Save | no-but",
            Self::Unknown => "unknown",
        }
    }

    /// The pass/fail tier.
    pub fn tier(self) -> Option<&'static str> {
        match self {
            Self::CriticalSuccess => Some("Critical Success"),
            Self::SuccessAtCost => Some("Success"),
            Self::FailureAnd | Self::FailureBut => Some("Failure"),
            Self::Unknown => None,
        }
    }

    /// The saving throw consequence.
    pub fn save(self) -> Option<&'static str> {
        match self {
            Self::CriticalSuccess => Some("No Save"),
            Self::SuccessAtCost => Some("Disadvantage on Save"),
            Self::FailureAnd | Self::FailureBut => Some("Regular Save"),
            Self::Unknown => None,
        }
    }

    /// The narrative qualifier (`yes-and`, `yes-but`, `no-and`, `no-but`).
    pub fn qualifier(self) -> Option<&'static str> {
        match self {
            Self::CriticalSuccess => Some("yes-and"),
            Self::SuccessAtCost => Some("yes-but"),
            Self::FailureAnd => Some("no-and"),
            Self::FailureBut => Some("no-but"),
            Self::Unknown => None,
        }
    }

    /// Whether the roll succeeded.
    pub fn is_success(self) -> bool {
        matches!(self, Self::CriticalSuccess | Self::SuccessAtCost)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Thresholds for one pool size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutcomeBands {
    pivot: u32,
    width: u32,
}

impl OutcomeBands {
    /// Bands for `pool` dice, or `None` if the table does not cover it.
    pub fn for_pool(pool: u32) -> Option<Self> {
        if !SUPPORTED_POOLS.contains(&pool) {
            return None;
        }
        Some(Self {
            pivot: pool * 7 / 2,
            width: pool / 2,
        })
    }

    /// The critical total.
    pub fn pivot(&self) -> u32 {
        self.pivot
    }

    /// How many totals on each side of the pivot still succeed.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Classify a total against these bands.
    pub fn classify(&self, total: u32) -> Outcome {
        let low = self.pivot.saturating_sub(self.width);
        let high = self.pivot + self.width;
        match total {
            t if t == self.pivot => Outcome::CriticalSuccess,
            t if (low..=high).contains(&t) => Outcome::SuccessAtCost,
            t if t < low => Outcome::FailureAnd,
            _ => Outcome::FailureBut,
        }
    }
}

/// Classify `total` rolled on `pool` dice. Unsupported pools yield [`Outcome::Unknown`].
pub fn interpret(pool: u32, total: u32) -> Outcome {
    OutcomeBands::for_pool(pool)
        .map(|bands| bands.classify(total))
        .unwrap_or(Outcome::Unknown)
}

/// Like [`interpret`], but reject unsupported pools instead of answering `Unknown`.
pub fn try_interpret(pool: u32, total: u32) -> MechResult<Outcome> {
    OutcomeBands::for_pool(pool)
        .map(|bands| bands.classify(total))
        .ok_or(MechError::UnsupportedPool(pool))
}
