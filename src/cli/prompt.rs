//! Line-oriented prompting
//!
//! `Prompter` wraps any reader/writer pair so the interactive sessions can be
//! driven by stdin/stdout in the binary and by byte buffers in tests.

use std::fmt::Display;
use std::io::{BufRead, Write};

use chrono::NaiveDate;

use crate::error::{TallyError, TallyResult};
use crate::models::{parse_date, Money};

pub const INVALID_AMOUNT: &str = "Invalid input. Please enter a numeric value for the amount.";
pub const INVALID_DATE: &str = "Invalid date format. Please use YYYY-MM-DD.";

/// Parse an amount, rounding to the cent
pub fn parse_amount(s: &str) -> TallyResult<Money> {
    Money::parse(s).map_err(|e| TallyError::validation(e.to_string()))
}

/// Parse a non-negative whole number of months
pub fn parse_months(s: &str) -> TallyResult<u32> {
    s.trim()
        .parse()
        .map_err(|_| TallyError::validation(format!("Invalid number of months: {}", s.trim())))
}

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the prompter, returning the writer
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print a line
    pub fn say(&mut self, text: impl Display) -> TallyResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Print `prompt` and read one trimmed line
    ///
    /// Returns [`TallyError::InputClosed`] at end of input.
    pub fn ask(&mut self, prompt: &str) -> TallyResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Err(TallyError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Ask until `parse` accepts the answer, printing `retry` after each rejection
    pub fn ask_until<T, F>(&mut self, prompt: &str, retry: &str, parse: F) -> TallyResult<T>
    where
        F: Fn(&str) -> TallyResult<T>,
    {
        loop {
            let answer = self.ask(prompt)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(e) if e.is_validation() => self.say(retry)?,
                Err(e) => return Err(e),
            }
        }
    }

    /// Like [`ask_until`](Self::ask_until), but a blank answer means "keep" (`None`)
    pub fn ask_optional<T, F>(
        &mut self,
        prompt: &str,
        retry: &str,
        parse: F,
    ) -> TallyResult<Option<T>>
    where
        F: Fn(&str) -> TallyResult<T>,
    {
        self.ask_until(prompt, retry, |answer| {
            if answer.is_empty() {
                Ok(None)
            } else {
                parse(answer).map(Some)
            }
        })
    }

    pub fn ask_amount(&mut self, prompt: &str) -> TallyResult<Money> {
        self.ask_until(prompt, INVALID_AMOUNT, parse_amount)
    }

    pub fn ask_date(&mut self, prompt: &str) -> TallyResult<NaiveDate> {
        self.ask_until(prompt, INVALID_DATE, parse_date)
    }
}
