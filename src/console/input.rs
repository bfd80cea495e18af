//! Prompting and input re-prompting
//!
//! Reads whole lines from any buffered source so that the session can be
//! driven by stdin or by a script in tests. End of input is reported as
//! `Ok(None)` from every prompt, never as a retry.

use crate::io::record_format::{parse_amount, strip_line_ending};
use rust_decimal::Decimal;
use std::io::{self, BufRead, Write};

/// Message shown when a numeric prompt gets something else
pub const INVALID_NUMBER: &str = "Invalid input! Please enter a number.";

/// Line-oriented prompter over an input and an output stream
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Output stream, for printing results
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Give back the output stream
    pub fn into_output(self) -> W {
        self.output
    }

    /// Read one line as raw bytes; invalid UTF-8 becomes U+FFFD
    fn read_raw_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(strip_line_ending(&line).to_string()))
    }

    /// Print a prompt and read one whole line verbatim
    pub fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        self.read_raw_line()
    }

    /// Prompt until the first token of a line parses
    ///
    /// Blank lines are skipped without repeating the prompt. Anything after
    /// the first token is ignored.
    fn read_parsed<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> io::Result<Option<T>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        loop {
            let Some(line) = self.read_raw_line()? else {
                return Ok(None);
            };

            let Some(token) = line.split_whitespace().next() else {
                continue;
            };

            if let Some(value) = parse(token) {
                return Ok(Some(value));
            }

            writeln!(self.output, "{}", INVALID_NUMBER)?;
            write!(self.output, "{}", prompt)?;
            self.output.flush()?;
        }
    }

    /// Prompt for a whole number
    pub fn read_integer(&mut self, prompt: &str) -> io::Result<Option<i64>> {
        self.read_parsed(prompt, |token| token.parse::<i64>().ok())
    }

    /// Prompt for a decimal amount
    pub fn read_amount(&mut self, prompt: &str) -> io::Result<Option<Decimal>> {
        self.read_parsed(prompt, parse_amount)
    }
}
