//! Core abstractions shared across study-timer modules.
//!
//! The timer core only talks to the outside world through these traits.

pub mod traits;

pub use traits::{InputProvider, OutputSink};
