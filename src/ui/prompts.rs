//! ui::prompts
//!
//! Line-oriented console prompts.
//!
//! # Design
//!
//! [`Console`] wraps any `BufRead` input and `Write` output so sessions can
//! be driven by a real terminal or by scripted input in tests. Every line
//! read is trimmed. End of input is reported as [`PromptError::Closed`] so
//! callers stop instead of re-prompting forever.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use thiserror::Error;

use super::output::Verbosity;

/// Message shown when required input is blank.
pub const EMPTY_INPUT: &str = "Input cannot be empty. Please try again.";

/// Errors from prompts.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("input closed")]
    Closed,

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Console input and output for one session.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
    verbosity: Verbosity,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Console over the process stdin and stdout.
    pub fn stdio(verbosity: Verbosity) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), verbosity)
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, verbosity: Verbosity) -> Self {
        Self {
            input,
            output,
            verbosity,
        }
    }

    /// Output verbosity this console was created with.
    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// Consume the console, returning its output.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print a line.
    pub fn say(&mut self, message: impl Display) -> Result<(), PromptError> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    /// Print a line unless in quiet mode.
    ///
    /// Used for menus and section headers.
    pub fn banner(&mut self, message: impl Display) -> Result<(), PromptError> {
        if self.verbosity != Verbosity::Quiet {
            self.say(message)?;
        }
        Ok(())
    }

    /// Show `prompt` and read one trimmed line.
    ///
    /// Blank lines are returned as empty strings.
    pub fn ask(&mut self, prompt: &str) -> Result<String, PromptError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::Closed);
        }
        Ok(line.trim().to_string())
    }

    /// Ask until `parse` accepts the input.
    ///
    /// On rejection the message returned by `parse` is printed and the
    /// prompt is shown again.
    pub fn ask_until<T, F>(&mut self, prompt: &str, mut parse: F) -> Result<T, PromptError>
    where
        F: FnMut(&str) -> Result<T, String>,
    {
        loop {
            let answer = self.ask(prompt)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(message) => self.say(message)?,
            }
        }
    }

    /// Ask until a non-empty line is entered.
    pub fn ask_non_empty(&mut self, prompt: &str) -> Result<String, PromptError> {
        self.ask_until(prompt, |answer| {
            if answer.is_empty() {
                Err(EMPTY_INPUT.to_string())
            } else {
                Ok(answer.to_string())
            }
        })
    }
}
