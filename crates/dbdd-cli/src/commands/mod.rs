pub mod edit;
pub mod init;
pub mod interpret;
pub mod play;
pub mod roll;
pub mod sheet;

use std::path::Path;

use colored::{ColoredString, Colorize};

use dbdd_mechanics::{Outcome, RollRecord};
use dbdd_sheet::{SheetState, store};

/// Hold the sheet's file lock until the guard drops.
fn lock_sheet(path: &Path) -> Result<store::SheetLock, String> {
    store::lock(path).map_err(|e| e.to_string())
}

/// Load the sheet at `path` into shared state. A missing file is a blank sheet.
fn load_state(path: &Path) -> Result<SheetState, String> {
    let saved = store::load(path).map_err(|e| e.to_string())?;
    Ok(SheetState::from_saved(saved))
}

/// Write shared state back to `path`.
fn save_state(path: &Path, state: &SheetState) -> Result<(), String> {
    store::save(path, &state.to_saved()).map_err(|e| e.to_string())
}

/// Format a roll record with the outcome colored by tier.
fn format_record(record: &RollRecord) -> String {
    let line = record.to_string();
    match line.rsplit_once(record.label()) {
        Some((head, _)) => format!("{head}{}", colorize_outcome(record.outcome)),
        None => line,
    }
}

fn colorize_outcome(outcome: Outcome) -> ColoredString {
    let label = outcome.label();
    match outcome {
        Outcome::CriticalSuccess => label.green().bold(),
        Outcome::SuccessAtCost => label.green(),
        Outcome::FailureBut => label.yellow(),
        Outcome::FailureAnd => label.red(),
        Outcome::Unknown => label.dimmed(),
    }
}
