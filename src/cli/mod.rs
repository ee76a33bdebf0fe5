//! Command-line surface: arguments and the session-length prompt.

pub mod args;
pub mod prompt;

pub use args::Cli;
pub use prompt::{is_valid_number, parse_study_length, InputError, TerminalInput, PROMPT};
