//! Configuration management for study-timer.
//!
//! This module handles loading configuration from `~/.study-timer/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{AudioConfig, BreakConfig, Config, SessionConfig};
