//! loopy configuration.
//!
//! Loaded from `~/.loopy/config.toml`. Every key is optional; a missing
//! file means all defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// loopy configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Directory holding the journal `.log` files.
    /// Defaults to the game's save directory under the home directory.
    pub journal_dir: Option<PathBuf>,

    /// `SQLite` database file. Defaults to `~/.loopy/loopy.db`.
    pub database: Option<PathBuf>,

    /// Start every journal file with no current system.
    pub reset_cursor_per_file: bool,
}

impl Config {
    /// Load config from `~/.loopy/config.toml`, or defaults if it is absent.
    pub fn load() -> Result<Self, String> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load config from `path`, or defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let contents = match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(format!("failed to read {}: {e}", path.display())),
        };

        toml::from_str(&contents).map_err(|e| format!("invalid config at {}: {e}", path.display()))
    }

    /// The config file path: `~/.loopy/config.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".loopy").join("config.toml"))
    }

    /// The configured journal directory, or the game's default location.
    pub fn journal_dir(&self) -> Option<PathBuf> {
        self.journal_dir.clone().or_else(|| {
            dirs::home_dir().map(|h| {
                h.join("Saved Games")
                    .join("Frontier Developments")
                    .join("Elite Dangerous")
            })
        })
    }

    /// The configured database path, or `~/.loopy/loopy.db`.
    pub fn database(&self) -> Option<PathBuf> {
        self.database
            .clone()
            .or_else(|| dirs::home_dir().map(|h| h.join(".loopy").join("loopy.db")))
    }
}
