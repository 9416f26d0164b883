//! The roll counter and the most recent roll.

use serde::{Deserialize, Serialize};

use crate::roll::RollRecord;

/// Counts rolls and keeps the latest one.
///
/// The counter only ever grows; a new record replaces the previous one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollTracker {
    count: u64,
    latest: Option<RollRecord>,
}

impl RollTracker {
    /// A tracker with no rolls.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rolls made so far.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// The most recent roll, if any.
    pub fn latest(&self) -> Option<&RollRecord> {
        self.latest.as_ref()
    }

    /// Advance the counter and store the record built for the new sequence number.
    pub fn record(&mut self, build: impl FnOnce(u64) -> RollRecord) -> RollRecord {
        self.count += 1;
        let record = build(self.count);
        self.latest = Some(record.clone());
        record
    }
}
