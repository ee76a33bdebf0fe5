//! study-timer - A study-session timer with randomized break reminders
//!
//! A session counts down a chosen number of minutes while showing the elapsed
//! time, and reminds the user to take short breaks at random intervals.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod timer;

pub use cli::Cli;
pub use error::StudyError;
pub use timer::{SessionCoordinator, SessionSettings};
