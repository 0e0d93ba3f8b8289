//! Flag, argument and path prompts.
//!
//! Every prompt yields a [`PromptOutcome`], so an intentionally empty answer
//! is never confused with the user backing out.

use crate::config::types::{Result, RunnerError};
use std::io::{BufRead, Write};

/// Answer to a prompt
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PromptOutcome<T> {
    Value(T),
    Cancelled,
}

impl<T> PromptOutcome<T> {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, PromptOutcome::Cancelled)
    }

    pub fn value(self) -> Option<T> {
        match self {
            PromptOutcome::Value(value) => Some(value),
            PromptOutcome::Cancelled => None,
        }
    }
}

/// Interactive input used by the workflow
pub trait Prompter {
    fn prompt_flags(&mut self, default_flags: &str) -> Result<PromptOutcome<String>>;
    fn prompt_run_args(&mut self, default_args: &str) -> Result<PromptOutcome<String>>;
    fn prompt_path(&mut self) -> Result<PromptOutcome<String>>;
}

/// Entry that confirms an empty answer instead of the default
pub const EMPTY_ANSWER: &str = "-";

/// Line-oriented prompter over any reader/writer pair.
///
/// Enter keeps the default, `-` confirms an empty value, end of input cancels.
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, label: &str, default: &str) -> Result<PromptOutcome<String>> {
        if default.is_empty() {
            write!(self.output, "{}: ", label)?;
        } else {
            write!(self.output, "{} [{}]: ", label, default)?;
        }
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| RunnerError::Prompt(format!("Failed to read answer: {}", e)))?;
        if read == 0 {
            writeln!(self.output)?;
            return Ok(PromptOutcome::Cancelled);
        }

        let answer = line.trim();
        let value = if answer.is_empty() {
            default.to_string()
        } else if answer == EMPTY_ANSWER {
            String::new()
        } else {
            answer.to_string()
        };
        Ok(PromptOutcome::Value(value))
    }
}

impl LinePrompter<std::io::StdinLock<'static>, std::io::Stderr> {
    /// Prompts on stderr, answers from stdin
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stderr())
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn prompt_flags(&mut self, default_flags: &str) -> Result<PromptOutcome<String>> {
        self.ask("Compiler flags", default_flags)
    }

    fn prompt_run_args(&mut self, default_args: &str) -> Result<PromptOutcome<String>> {
        self.ask("Run arguments", default_args)
    }

    fn prompt_path(&mut self) -> Result<PromptOutcome<String>> {
        self.ask("Compiler not found, path to compiler", "")
    }
}
