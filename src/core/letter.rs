//! A single guessable letter

use crate::error::{HangmanError, Result};
use std::fmt;

/// One ASCII lowercase letter, `a` through `z`
///
/// The board placeholder `_` can never be a `Letter`, so a revealed slot
/// is always distinguishable from a hidden one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

/// Every valid letter in alphabetical order
pub const ALPHABET: [Letter; 26] = {
    let mut letters = [Letter(b'a'); 26];
    let mut i = 0;
    while i < 26 {
        letters[i] = Letter(b'a' + i as u8);
        i += 1;
    }
    letters
};

impl Letter {
    /// Create a letter from a character, folding uppercase to lowercase
    ///
    /// # Errors
    /// Returns `HangmanError::InvalidInput` for anything outside `a-z`/`A-Z`.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::Letter;
    ///
    /// assert_eq!(Letter::new('Q').unwrap().as_char(), 'q');
    /// assert!(Letter::new('_').is_err());
    /// ```
    pub fn new(ch: char) -> Result<Self> {
        if ch.is_ascii_alphabetic() {
            Ok(Self(ch.to_ascii_lowercase() as u8))
        } else {
            Err(HangmanError::InvalidInput(format!(
                "'{ch}' is not a letter a-z"
            )))
        }
    }

    /// Build from a byte already known to be lowercase ASCII
    #[inline]
    pub(crate) const fn from_lowercase_byte(byte: u8) -> Self {
        debug_assert!(byte.is_ascii_lowercase());
        Self(byte)
    }

    /// Parse a line of text holding exactly one letter
    ///
    /// # Errors
    /// Returns `HangmanError::InvalidInput` when the trimmed text is not a
    /// single letter.
    pub fn parse(text: &str) -> Result<Self> {
        let mut chars = text.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Self::new(ch),
            _ => Err(HangmanError::InvalidInput(format!(
                "expected a single letter, got \"{}\"",
                text.trim()
            ))),
        }
    }

    #[inline]
    #[must_use]
    pub const fn as_byte(self) -> u8 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// Zero-based position in the alphabet
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - b'a') as usize
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
