//! Dice roll results.

use serde::{Deserialize, Serialize};

/// The faces showing after a pool was rolled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollResult {
    dice: Vec<u32>,
}

impl RollResult {
    /// Wrap individual die faces.
    pub fn new(dice: Vec<u32>) -> Self {
        Self { dice }
    }

    /// Individual die faces in roll order.
    pub fn dice(&self) -> &[u32] {
        &self.dice
    }

    /// Sum of all die values.
    pub fn total(&self) -> u32 {
        self.dice.iter().sum()
    }

    /// Number of dice in the result.
    pub fn count(&self) -> usize {
        self.dice.len()
    }

    /// Consume the result, returning the faces.
    pub fn into_dice(self) -> Vec<u32> {
        self.dice
    }
}

impl std::fmt::Display for RollResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.dice.iter().map(|d| d.to_string()).collect();
        write!(f, "[{}] = {}", values.join(", "), self.total())
    }
}
