//! Configuration for a sheet session.

use std::path::PathBuf;

use dbdd_mechanics::RandomRoller;

/// Default sheet file name.
pub const DEFAULT_SHEET_PATH: &str = "character.json";

/// Configuration for a sheet session.
#[derive(Debug, Clone)]
pub struct SheetConfig {
    /// Where the sheet is stored.
    pub path: PathBuf,
    /// RNG seed for reproducible rolls. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_SHEET_PATH),
            seed: None,
        }
    }
}

impl SheetConfig {
    /// Set the sheet file path.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Build the dice roller this configuration describes.
    pub fn roller(&self) -> RandomRoller {
        match self.seed {
            Some(seed) => RandomRoller::seeded(seed),
            None => RandomRoller::from_entropy(),
        }
    }
}
