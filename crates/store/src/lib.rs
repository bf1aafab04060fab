//! File-backed highscore.
//!
//! The file holds a single decimal integer as plain text. A missing,
//! unreadable, or malformed file reads as 0; only writing can fail.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use termtris_core::HighscoreStore;
pub use termtris_types as types;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHighscore {
    path: PathBuf,
}

impl FileHighscore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileHighscore {
    fn default() -> Self {
        Self::new(types::HIGHSCORE_FILE)
    }
}

impl HighscoreStore for FileHighscore {
    fn load(&self) -> u32 {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) => {
                debug!(
                    path = %self.path.display(),
                    error = %e,
                    "no highscore file, starting at 0"
                );
                return 0;
            }
        };

        match text.trim().parse::<u32>() {
            Ok(value) => value,
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "malformed highscore file, starting at 0"
                );
                0
            }
        }
    }

    fn save(&mut self, value: u32) -> Result<()> {
        fs::write(&self.path, value.to_string())
            .with_context(|| format!("failed to write highscore to {}", self.path.display()))
    }
}
