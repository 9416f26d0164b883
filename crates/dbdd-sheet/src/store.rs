//! Saving and loading sheets as JSON.
//!
//! Writes go to a temporary file that is renamed over the sheet, so readers
//! never see a half-written file. Processes that load, change and save a
//! sheet hold a [`SheetLock`] across the whole sequence.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use dbdd_mechanics::RollTracker;

use crate::error::{SheetError, SheetResult};
use crate::sheet::CharacterSheet;

/// Everything persisted between sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedSheet {
    /// The character sheet.
    pub sheet: CharacterSheet,
    /// Roll counter and latest roll.
    #[serde(default)]
    pub rolls: RollTracker,
}

/// Exclusive advisory lock on a sheet file. Released on drop.
#[derive(Debug)]
pub struct SheetLock {
    _file: File,
}

/// Sidecar file locked on behalf of `path`.
pub fn lock_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".lock");
    PathBuf::from(name)
}

/// Block until this process holds the lock for the sheet at `path`.
pub fn lock(path: &Path) -> SheetResult<SheetLock> {
    let lock_file = lock_path(path);
    let io_err = |source| SheetError::Io {
        path: lock_file.clone(),
        source,
    };
    ensure_parent(path)?;
    let file = OpenOptions::new()
        .create(true)
        .truncate(false)
        .write(true)
        .open(&lock_file)
        .map_err(io_err)?;
    FileExt::lock_exclusive(&file).map_err(io_err)?;
    tracing::debug!(path = %lock_file.display(), "sheet locked");
    Ok(SheetLock { _file: file })
}

/// Load a sheet file. A missing file yields a blank sheet.
///
/// Ratings above 4 are rejected even though they parse.
pub fn load(path: &Path) -> SheetResult<SavedSheet> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no sheet file, starting blank");
        return Ok(SavedSheet::default());
    }
    let content = fs::read_to_string(path).map_err(|source| SheetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let saved: SavedSheet = serde_json::from_str(&content).map_err(|source| SheetError::Format {
        path: path.to_path_buf(),
        source,
    })?;
    saved.sheet.validate()?;
    tracing::debug!(path = %path.display(), "sheet loaded");
    Ok(saved)
}

/// Write a sheet file, creating parent directories as needed.
pub fn save(path: &Path, saved: &SavedSheet) -> SheetResult<()> {
    let io_err = |source| SheetError::Io {
        path: path.to_path_buf(),
        source,
    };
    let dir = ensure_parent(path)?;
    let json = serde_json::to_string_pretty(saved).map_err(|source| SheetError::Format {
        path: path.to_path_buf(),
        source,
    })?;
    let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
    tmp.write_all(json.as_bytes()).map_err(io_err)?;
    tmp.persist(path).map_err(|e| io_err(e.error))?;
    tracing::debug!(path = %path.display(), "sheet saved");
    Ok(())
}

/// Create the directory holding `path` and return it.
fn ensure_parent(path: &Path) -> SheetResult<&Path> {
    match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => {
            fs::create_dir_all(parent).map_err(|source| SheetError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
            Ok(parent)
        }
        None => Ok(Path::new(".")),
    }
}
