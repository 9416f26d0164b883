//! Turning a trait rating into a resolved roll.
//!
//! A trait rated `r` rolls `2r` dice. Advantage rolls as if the rating were
//! one higher, disadvantage as if it were one lower. Only effective ratings
//! 1-3 are rollable, which keeps every pool inside the outcome table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::dice::{DicePool, DiceRoller};
use crate::error::{MechError, MechResult};
use crate::outcome::{Outcome, interpret};
use crate::tracker::RollTracker;

/// Highest rating a trait can hold.
pub const MAX_RATING: u8 = 4;

/// Effective ratings that can be rolled.
pub const ROLLABLE_RATINGS: std::ops::RangeInclusive<u8> = 1..=3;

/// Dice per point of effective rating.
pub const DICE_PER_RATING: u32 = 2;

/// Circumstances shifting a roll's effective rating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RollModifier {
    /// One rating lower.
    Disadvantage,
    /// No shift.
    #[default]
    Normal,
    /// One rating higher.
    Advantage,
}

impl RollModifier {
    /// All modifiers, in button order.
    pub const ALL: [Self; 3] = [Self::Normal, Self::Advantage, Self::Disadvantage];

    /// Rating shift applied by this modifier.
    pub fn shift(self) -> i8 {
        match self {
            Self::Disadvantage => -1,
            Self::Normal => 0,
            Self::Advantage => 1,
        }
    }

    /// Parse a modifier like "adv", "dis", "normal".
    pub fn from_str_tag(s: &str) -> MechResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "" | "normal" | "plain" => Ok(Self::Normal),
            "adv" | "advantage" | "+" => Ok(Self::Advantage),
            "dis" | "disadvantage" | "-" => Ok(Self::Disadvantage),
            other => Err(MechError::InvalidModifier(other.to_string())),
        }
    }

    /// Short button label.
    pub fn short(self) -> &'static str {
        match self {
            Self::Disadvantage => "DIS",
            Self::Normal => "ROLL",
            Self::Advantage => "ADV",
        }
    }
}

impl std::fmt::Display for RollModifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Disadvantage => write!(f, "disadvantage"),
            Self::Normal => write!(f, "normal"),
            Self::Advantage => write!(f, "advantage"),
        }
    }
}

/// The rating a roll is made at after applying `modifier`.
///
/// Fails when the base rating is off the 0-4 scale or the result would
/// leave the rollable range.
pub fn effective_rating(rating: u8, modifier: RollModifier) -> MechResult<u8> {
    if rating > MAX_RATING {
        return Err(MechError::RatingOutOfRange(rating));
    }
    let shifted = i16::from(rating) + i16::from(modifier.shift());
    u8::try_from(shifted)
        .ok()
        .filter(|r| ROLLABLE_RATINGS.contains(r))
        .ok_or(MechError::RollUnavailable { rating, modifier })
}

/// Number of dice rolled for `rating` with `modifier`.
pub fn pool_size(rating: u8, modifier: RollModifier) -> MechResult<u32> {
    effective_rating(rating, modifier).map(|r| u32::from(r) * DICE_PER_RATING)
}

/// Whether a roll with `modifier` is allowed at `rating`.
pub fn is_available(rating: u8, modifier: RollModifier) -> bool {
    effective_rating(rating, modifier).is_ok()
}

/// A completed roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollRecord {
    /// Position of this roll in the roll counter, starting at 1.
    pub sequence: u64,
    /// Name of the trait that was rolled.
    pub trait_name: String,
    /// Modifier the roll was made with.
    pub modifier: RollModifier,
    /// Number of dice rolled.
    pub pool_size: u32,
    /// Individual die faces.
    pub dice: Vec<u32>,
    /// Sum of the dice.
    pub total: u32,
    /// How the total was judged.
    pub outcome: Outcome,
    /// When the roll was made.
    pub rolled_at: DateTime<Utc>,
}

impl RollRecord {
    /// The outcome label.
    pub fn label(&self) -> &'static str {
        self.outcome.label()
    }
}

impl std::fmt::Display for RollRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Roll #{} | {} | {} = {} \u{2192} {}",
            self.sequence,
            self.trait_name,
            DicePool::d6(self.pool_size),
            self.total,
            self.outcome
        )
    }
}

/// Roll `trait_name` at `rating` with `modifier`, recording the result in `tracker`.
///
/// The roll is rejected before any dice are thrown if the modifier is not
/// available at this rating; the counter only moves for rolls that happen.
pub fn perform_roll<D: DiceRoller + ?Sized>(
    tracker: &mut RollTracker,
    roller: &mut D,
    trait_name: &str,
    rating: u8,
    modifier: RollModifier,
) -> MechResult<RollRecord> {
    let pool_size = match pool_size(rating, modifier) {
        Ok(n) => n,
        Err(e) => {
            tracing::debug!(trait_name, rating, %modifier, "roll rejected: {e}");
            return Err(e);
        }
    };

    let result = roller.roll_pool(DicePool::d6(pool_size));
    let total = result.total();
    let outcome = interpret(pool_size, total);

    let record = tracker.record(|sequence| RollRecord {
        sequence,
        trait_name: trait_name.to_string(),
        modifier,
        pool_size,
        dice: result.into_dice(),
        total,
        outcome,
        rolled_at: Utc::now(),
    });

    tracing::debug!(
        sequence = record.sequence,
        trait_name,
        pool_size,
        total,
        outcome = outcome.label(),
        "roll performed"
    );

    Ok(record)
}
