//! Line-oriented input used by human players

use crate::error::{HangmanError, Result};
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Source of one line of human input per question
pub trait Prompt {
    /// Show `message` and return the reply with surrounding whitespace removed
    ///
    /// # Errors
    /// Fails when input can no longer be read.
    fn prompt_line(&mut self, message: &str) -> Result<String>;

    /// Show `message` without waiting for a reply
    ///
    /// # Errors
    /// Fails when output can no longer be written.
    fn say(&mut self, message: &str) -> Result<()>;
}

/// Prompts on stdout and reads answers from stdin
#[derive(Debug, Default)]
pub struct StdinPrompt;

impl Prompt for StdinPrompt {
    fn prompt_line(&mut self, message: &str) -> Result<String> {
        println!("{message}");
        io::stdout().flush()?;

        let mut input = String::new();
        let read = io::stdin().lock().read_line(&mut input)?;
        if read == 0 {
            return Err(HangmanError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed",
            )));
        }

        Ok(input.trim().to_string())
    }

    fn say(&mut self, message: &str) -> Result<()> {
        println!("{message}");
        io::stdout().flush()?;
        Ok(())
    }
}

/// Replays canned answers in order and records every message shown
///
/// Running out of answers behaves like a closed terminal.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    asked: Vec<String>,
    said: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
            said: Vec::new(),
        }
    }

    /// Every message shown so far
    #[must_use]
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    /// Messages shown without asking for a reply
    #[must_use]
    pub fn said(&self) -> &[String] {
        &self.said
    }

    /// Answers not yet consumed
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompt for ScriptedPrompt {
    fn prompt_line(&mut self, message: &str) -> Result<String> {
        self.asked.push(message.to_string());
        self.answers
            .pop_front()
            .map(|answer| answer.trim().to_string())
            .ok_or_else(|| {
                HangmanError::Io(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "script exhausted",
                ))
            })
    }

    fn say(&mut self, message: &str) -> Result<()> {
        self.said.push(message.to_string());
        Ok(())
    }
}
