//! Path resolution for study-timer configuration.
//!
//! Everything lives in `~/.study-timer/`:
//! - `config.yaml` - Main configuration file

use std::path::PathBuf;

use crate::error::StudyError;

/// Paths to study-timer configuration files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.study-timer/`
    pub root: PathBuf,
    /// Config file: `~/.study-timer/config.yaml`
    pub config_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, StudyError> {
        let home = std::env::var("HOME").map_err(|_| {
            StudyError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".study-timer")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            root,
        }
    }
}
