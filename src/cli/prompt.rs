//! Interactive session-length prompt.
//!
//! Invalid answers, including lines that are not UTF-8, are reported and the
//! question is asked again; only I/O failures and a closed input stream end
//! the prompt.

use std::io::{BufRead, Write};

use colored::Colorize;
use thiserror::Error;
use tracing::debug;

use crate::core::InputProvider;
use crate::error::StudyError;

/// The question asked before every session.
pub const PROMPT: &str = "How long is your study session in minutes?";

/// Why an answer was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Not made up of ASCII digits, or too large to represent.
    #[error("Please enter a valid number")]
    NotANumber,
    /// Below the configured minimum.
    #[error("Time must be at least {min} minutes")]
    TooShort {
        /// The minimum session length in minutes.
        min: u32,
    },
}

/// Check that the input is a non-empty run of ASCII digits.
#[must_use]
pub fn is_valid_number(input: &str) -> bool {
    !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit())
}

/// Parse and validate a session length in minutes.
///
/// Surrounding whitespace is ignored; signs, decimals and units are not
/// accepted.
///
/// # Errors
///
/// Returns `InputError::NotANumber` for anything but digits and
/// `InputError::TooShort` for values below `min_minutes`.
pub fn parse_study_length(input: &str, min_minutes: u32) -> Result<u32, InputError> {
    let input = input.trim();
    if !is_valid_number(input) {
        return Err(InputError::NotANumber);
    }

    let minutes: u32 = input.parse().map_err(|_| InputError::NotANumber)?;
    if minutes < min_minutes {
        return Err(InputError::TooShort { min: min_minutes });
    }

    Ok(minutes)
}

/// Asks for session lengths on a line-oriented terminal.
pub struct TerminalInput<R, W> {
    reader: R,
    writer: W,
    min_minutes: u32,
}

impl<R: BufRead, W: Write> TerminalInput<R, W> {
    /// Create a prompt reading from `reader` and writing to `writer`.
    pub const fn new(reader: R, writer: W, min_minutes: u32) -> Self {
        Self {
            reader,
            writer,
            min_minutes,
        }
    }

    /// Consume the prompt and return the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> InputProvider for TerminalInput<R, W> {
    fn get_study_length(&mut self) -> Result<u32, StudyError> {
        loop {
            writeln!(self.writer, "{PROMPT}")?;
            self.writer.flush()?;

            let mut raw = Vec::new();
            if self.reader.read_until(b'\n', &mut raw)? == 0 {
                return Err(StudyError::InputClosed);
            }

            // Undecodable bytes are just another wrong answer
            let answer = String::from_utf8(raw)
                .map_err(|_| InputError::NotANumber)
                .and_then(|line| parse_study_length(&line, self.min_minutes));

            match answer {
                Ok(minutes) => return Ok(minutes),
                Err(e) => {
                    debug!(error = %e, "rejected study length");
                    writeln!(self.writer, "{}", e.to_string().yellow())?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompt(input: &str, min: u32) -> (Result<u32, StudyError>, String) {
        let mut terminal = TerminalInput::new(Cursor::new(input.to_string()), Vec::new(), min);
        let result = terminal.get_study_length();
        let written = String::from_utf8(terminal.into_writer()).unwrap();
        (result, written)
    }

    #[test]
    fn test_is_valid_number_with_valid_number() {
        assert!(is_valid_number("12345"));
    }

    #[test]
    fn test_is_valid_number_with_invalid_number() {
        assert!(!is_valid_number("abcde"));
    }

    #[test]
    fn test_is_valid_number_with_empty_string() {
        assert!(!is_valid_number(""));
    }

    #[test]
    fn test_is_valid_number_with_negative_number() {
        assert!(!is_valid_number("-123"));
    }

    #[test]
    fn test_is_valid_number_rejects_mixed_input() {
        assert!(!is_valid_number("12.5"));
        assert!(!is_valid_number("25m"));
        assert!(!is_valid_number("+25"));
    }

    #[test]
    fn test_parse_study_length() {
        assert_eq!(parse_study_length("12345", 5), Ok(12345));
        assert_eq!(parse_study_length("25\n", 5), Ok(25));
        assert_eq!(parse_study_length("5", 5), Ok(5));
        assert_eq!(parse_study_length("abcde", 5), Err(InputError::NotANumber));
        assert_eq!(parse_study_length("", 5), Err(InputError::NotANumber));
        assert_eq!(parse_study_length("-123", 5), Err(InputError::NotANumber));
        assert_eq!(parse_study_length("4", 5), Err(InputError::TooShort { min: 5 }));
        assert_eq!(parse_study_length("10", 15), Err(InputError::TooShort { min: 15 }));
    }

    #[test]
    fn test_parse_study_length_overflow() {
        assert_eq!(
            parse_study_length("99999999999999999999", 5),
            Err(InputError::NotANumber)
        );
    }

    #[test]
    fn test_prompt_accepts_first_valid_answer() {
        let (result, written) = prompt("30\n", 5);
        assert_eq!(result.unwrap(), 30);
        assert_eq!(written, format!("{PROMPT}\n"));
    }

    #[test]
    fn test_prompt_reprompts_until_valid() {
        let (result, written) = prompt("abcde\n\n-123\n3\n12\n", 5);

        assert_eq!(result.unwrap(), 12);
        assert_eq!(written.matches(PROMPT).count(), 5);
        assert_eq!(written.matches("Please enter a valid number").count(), 3);
        assert_eq!(written.matches("Time must be at least 5 minutes").count(), 1);
    }

    #[test]
    fn test_prompt_reprompts_on_invalid_utf8() {
        let input = Cursor::new(b"\xff\xfe\n25\n".to_vec());
        let mut terminal = TerminalInput::new(input, Vec::new(), 5);
        let result = terminal.get_study_length();
        let written = String::from_utf8(terminal.into_writer()).unwrap();

        assert_eq!(result.unwrap(), 25);
        assert_eq!(written.matches(PROMPT).count(), 2);
        assert_eq!(written.matches("Please enter a valid number").count(), 1);
    }

    #[test]
    fn test_prompt_closed_input() {
        let (result, written) = prompt("abc\n", 5);
        assert!(matches!(result, Err(StudyError::InputClosed)));
        assert_eq!(written.matches(PROMPT).count(), 2);
    }

    #[test]
    fn test_prompt_answers_in_sequence() {
        let mut terminal = TerminalInput::new(Cursor::new("25\n45\n"), Vec::new(), 5);
        assert_eq!(terminal.get_study_length().unwrap(), 25);
        assert_eq!(terminal.get_study_length().unwrap(), 45);
        assert!(matches!(
            terminal.get_study_length(),
            Err(StudyError::InputClosed)
        ));
    }
}
