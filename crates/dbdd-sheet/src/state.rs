//! Shared sheet state.
//!
//! `SheetState` owns the sheet, the roll counter and the latest roll behind
//! one mutex. Clones share the same state, so several sessions can roll on
//! one character; a roll bumps the counter and replaces the latest record
//! in a single critical section.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use dbdd_mechanics::{DiceRoller, RollModifier, RollRecord, RollTracker, perform_roll};

use crate::error::SheetResult;
use crate::sheet::{CharacterSheet, MetaField, TextField, Trait};
use crate::store::SavedSheet;

/// Shown in place of the latest roll before anything was rolled.
pub const NO_ROLLS_YET: &str = "No rolls yet.";

#[derive(Debug, Default)]
struct StateInner {
    sheet: CharacterSheet,
    rolls: RollTracker,
}

/// A handle to shared sheet state.
#[derive(Debug, Clone, Default)]
pub struct SheetState {
    inner: Arc<Mutex<StateInner>>,
}

impl SheetState {
    /// Wrap a sheet with no roll history.
    pub fn new(sheet: CharacterSheet) -> Self {
        Self::from_saved(SavedSheet {
            sheet,
            rolls: RollTracker::new(),
        })
    }

    /// Restore state from a saved sheet.
    pub fn from_saved(saved: SavedSheet) -> Self {
        Self {
            inner: Arc::new(Mutex::new(StateInner {
                sheet: saved.sheet,
                rolls: saved.rolls,
            })),
        }
    }

    /// Snapshot the state for saving.
    pub fn to_saved(&self) -> SavedSheet {
        let inner = self.lock();
        SavedSheet {
            sheet: inner.sheet.clone(),
            rolls: inner.rolls.clone(),
        }
    }

    // Every update leaves the state consistent, so poisoning is ignored.
    fn lock(&self) -> MutexGuard<'_, StateInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Copy of the current sheet.
    pub fn sheet(&self) -> CharacterSheet {
        self.lock().sheet.clone()
    }

    /// Current rating of `t`.
    pub fn rating(&self, t: Trait) -> u8 {
        self.lock().sheet.rating(t)
    }

    /// Set the rating of `t`.
    pub fn set_rating(&self, t: Trait, rating: u8) -> SheetResult<()> {
        self.lock().sheet.set_rating(t, rating)
    }

    /// Replace a metadata field.
    pub fn set_meta(&self, field: MetaField, value: impl Into<String>) {
        self.lock().sheet.set_meta(field, value);
    }

    /// Replace a text field.
    pub fn set_text(&self, field: TextField, value: impl Into<String>) {
        self.lock().sheet.set_text(field, value);
    }

    /// Number of rolls made so far.
    pub fn roll_count(&self) -> u64 {
        self.lock().rolls.count()
    }

    /// The most recent roll.
    pub fn latest_roll(&self) -> Option<RollRecord> {
        self.lock().rolls.latest().cloned()
    }

    /// The most recent roll formatted for display.
    pub fn latest_roll_line(&self) -> String {
        self.latest_roll()
            .map(|r| r.to_string())
            .unwrap_or_else(|| NO_ROLLS_YET.to_string())
    }

    /// Roll `t` at its current rating with `modifier`.
    pub fn roll<D: DiceRoller + ?Sized>(
        &self,
        t: Trait,
        modifier: RollModifier,
        roller: &mut D,
    ) -> SheetResult<RollRecord> {
        let mut guard = self.lock();
        let inner = &mut *guard;
        let rating = inner.sheet.rating(t);
        let record = perform_roll(&mut inner.rolls, roller, t.name(), rating, modifier)?;
        Ok(record)
    }
}
