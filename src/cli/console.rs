//! Console input and output for the interactive menu
//!
//! Input is consumed one whitespace-delimited token at a time, so several
//! answers may be typed on a single line.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use crate::error::{PhonebookError, PhonebookResult};
use crate::models::is_valid_phone_number;

/// Token-oriented console over any reader and writer
pub struct Console<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console reading from `input` and writing to `output`
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    /// Consume the console, returning the writer
    pub fn into_output(self) -> W {
        self.output
    }

    /// Write a line of text
    pub fn say(&mut self, text: &str) -> PhonebookResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Write text without a line break and flush it
    pub fn show(&mut self, text: &str) -> PhonebookResult<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    /// Read the next token, or `None` at end of input
    pub fn next_token(&mut self) -> PhonebookResult<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            // Bytes that are not UTF-8 become replacement characters, so a
            // garbled answer reads as an unknown token rather than an error
            let mut line = Vec::new();
            if self.input.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }

            self.pending.extend(
                String::from_utf8_lossy(&line)
                    .split_whitespace()
                    .map(str::to_string),
            );
        }
    }

    /// Show a prompt and read one token
    ///
    /// Running out of input is reported as [`PhonebookError::InputClosed`].
    pub fn prompt(&mut self, text: &str) -> PhonebookResult<String> {
        self.show(text)?;
        self.next_token()?.ok_or(PhonebookError::InputClosed)
    }

    /// Show a prompt and read a numeric choice
    ///
    /// A token that is not a number yields `None`.
    pub fn prompt_choice(&mut self, text: &str) -> PhonebookResult<Option<u32>> {
        let token = self.prompt(text)?;
        Ok(token.parse().ok())
    }

    /// Prompt for a phone number, warning if it looks malformed
    ///
    /// The number is returned either way.
    pub fn prompt_phone_number(&mut self, text: &str, warn: bool) -> PhonebookResult<String> {
        let number = self.prompt(text)?;
        if warn && !is_valid_phone_number(&number) {
            self.say("\nWarning: Invalid Phone Number Detected!")?;
        }
        Ok(number)
    }
}
