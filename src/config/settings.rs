//! Configuration settings for study-timer.
//!
//! Settings are loaded from `~/.study-timer/config.yaml`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::Paths;
use crate::error::StudyError;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Session length settings.
    pub session: SessionConfig,
    /// Break reminder settings.
    pub breaks: BreakConfig,
    /// Audio cue settings.
    pub audio: AudioConfig,
}

/// Session length settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SessionConfig {
    /// Shortest session the prompt accepts, in minutes.
    #[serde(default = "default_min_session_minutes")]
    pub min_session_minutes: u32,
}

/// Break reminder settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BreakConfig {
    /// Shortest wait between reminders, in seconds.
    #[serde(default = "default_min_wait_secs")]
    pub min_wait_secs: u64,
    /// Longest wait between reminders, in seconds.
    #[serde(default = "default_max_wait_secs")]
    pub max_wait_secs: u64,
}

/// Audio cue settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AudioConfig {
    /// Ring the terminal bell when no sound file is configured.
    #[serde(default = "default_true")]
    pub bell: bool,
    /// External player command, e.g. `afplay` or `paplay`.
    #[serde(default)]
    pub player: Option<String>,
    /// Sound played for break reminders.
    #[serde(default)]
    pub break_sound: Option<PathBuf>,
    /// Sound played when a session completes.
    #[serde(default)]
    pub complete_sound: Option<PathBuf>,
}

// Default value functions for serde
const fn default_min_session_minutes() -> u32 {
    5
}

const fn default_min_wait_secs() -> u64 {
    360
}

const fn default_max_wait_secs() -> u64 {
    900
}

const fn default_true() -> bool {
    true
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            min_session_minutes: default_min_session_minutes(),
        }
    }
}

impl Default for BreakConfig {
    fn default() -> Self {
        Self {
            min_wait_secs: default_min_wait_secs(),
            max_wait_secs: default_max_wait_secs(),
        }
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            bell: default_true(),
            player: None,
            break_sound: None,
            complete_sound: None,
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self, StudyError> {
        let paths = Paths::new()?;
        Self::load_from_path(&paths.config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed, or
    /// if the loaded values fail validation.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, StudyError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            StudyError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        let config: Self = serde_yaml::from_str(&contents).map_err(|e| {
            StudyError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Check that the settings describe a usable timer.
    ///
    /// # Errors
    ///
    /// Returns `StudyError::Config` naming the first invalid setting.
    pub fn validate(&self) -> Result<(), StudyError> {
        if self.session.min_session_minutes == 0 {
            return Err(StudyError::Config(
                "session.min_session_minutes must be at least 1".to_string(),
            ));
        }
        if self.breaks.min_wait_secs == 0 {
            return Err(StudyError::Config(
                "breaks.min_wait_secs must be at least 1".to_string(),
            ));
        }
        if self.breaks.min_wait_secs > self.breaks.max_wait_secs {
            return Err(StudyError::Config(format!(
                "breaks.min_wait_secs ({}) is greater than breaks.max_wait_secs ({})",
                self.breaks.min_wait_secs, self.breaks.max_wait_secs
            )));
        }
        Ok(())
    }
}
