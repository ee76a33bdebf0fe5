//! Terminal output sink.
//!
//! Progress is drawn on a single line that is cleared and redrawn each tick.
//! Messages clear that line and print on their own, so the next tick starts a
//! fresh progress line underneath.

use std::cell::RefCell;
use std::io::{self, Write};

use colored::Colorize;
use crossterm::cursor::MoveToColumn;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use crossterm::QueueableCommand;
use tracing::warn;

use super::audio::AudioCue;
use crate::core::OutputSink;
use crate::timer::{NotificationEvent, BREAK_MESSAGE, COMPLETE_MESSAGE};

/// Writes session output to a terminal and plays audio cues.
pub struct TerminalSink<W: Write> {
    out: RefCell<W>,
    audio: AudioCue,
}

impl TerminalSink<io::Stdout> {
    /// Create a sink on standard output.
    #[must_use]
    pub fn stdout(audio: AudioCue) -> Self {
        Self::new(io::stdout(), audio)
    }
}

impl<W: Write> TerminalSink<W> {
    /// Create a sink on any writer.
    pub const fn new(out: W, audio: AudioCue) -> Self {
        Self {
            out: RefCell::new(out),
            audio,
        }
    }

    /// Consume the sink and return the writer.
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    fn write_line(&self, text: &str, newline: bool) -> io::Result<()> {
        let mut out = self.out.borrow_mut();
        out.queue(MoveToColumn(0))?
            .queue(Clear(ClearType::CurrentLine))?
            .queue(Print(text))?;
        if newline {
            out.queue(Print("\n"))?;
        }
        out.flush()
    }

    fn play(&self, event: NotificationEvent) {
        self.audio.play(event, &mut *self.out.borrow_mut());
    }
}

impl<W: Write> OutputSink for TerminalSink<W> {
    fn display(&self, text: &str) {
        if let Err(e) = self.write_line(text, false) {
            warn!(error = %e, "failed to draw progress");
        }
    }

    fn message(&self, text: &str) {
        let styled = match text {
            BREAK_MESSAGE => text.yellow().bold().to_string(),
            COMPLETE_MESSAGE => text.green().bold().to_string(),
            _ => text.to_string(),
        };
        if let Err(e) = self.write_line(&styled, true) {
            warn!(error = %e, "failed to print message");
        }
    }

    fn notify_break(&self) {
        self.play(NotificationEvent::Break);
    }

    fn notify_complete(&self) {
        self.play(NotificationEvent::Complete);
    }
}
