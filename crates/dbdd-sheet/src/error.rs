//! Error types for the character sheet.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for sheet operations.
pub type SheetResult<T> = Result<T, SheetError>;

/// Errors that can occur while editing, rolling on, or storing a sheet.
#[derive(Debug, Error)]
pub enum SheetError {
    /// No trait with this name exists.
    #[error("unknown trait: {0}")]
    UnknownTrait(String),

    /// No metadata or text field with this name exists.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// A command could not be understood.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// A command was missing arguments or had malformed ones.
    #[error("usage: {0}")]
    Usage(String),

    /// The sheet file could not be read or written.
    #[error("{}: {source}", path.display())]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The sheet file is not valid JSON for a sheet.
    #[error("{}: invalid sheet file: {source}", path.display())]
    Format {
        /// File that failed.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// Mechanics error.
    #[error("{0}")]
    Mech(#[from] dbdd_mechanics::MechError),
}
