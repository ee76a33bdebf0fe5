//! Output for study-timer.
//!
//! This module provides the terminal implementation of
//! [`OutputSink`](crate::core::OutputSink) and the audio cues it plays.

mod audio;
mod terminal;

pub use audio::AudioCue;
pub use terminal::TerminalSink;
