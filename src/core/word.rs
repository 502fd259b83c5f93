//! Dictionary word representation
//!
//! A Word stores a lowercase word along with letter position indices, so
//! occurrence counts and referee answers are simple lookups.

use super::Letter;
use crate::error::{HangmanError, Result};
use rustc_hash::FxHashMap;
use std::fmt;

/// A non-empty lowercase ASCII word with letter position tracking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    letter_positions: FxHashMap<Letter, Vec<usize>>,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Uppercase input is normalized to lowercase.
    ///
    /// # Errors
    /// Returns `HangmanError::InvalidInput` if the text is empty or contains
    /// anything other than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::Word;
    ///
    /// let word = Word::new("Banana").unwrap();
    /// assert_eq!(word.text(), "banana");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("ice cream").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text: String = text.into().to_ascii_lowercase();

        if text.is_empty() {
            return Err(HangmanError::InvalidInput("word is empty".to_string()));
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(HangmanError::InvalidInput(format!(
                "\"{text}\" must contain only letters a-z"
            )));
        }

        let mut letter_positions: FxHashMap<Letter, Vec<usize>> = FxHashMap::default();
        for (i, byte) in text.bytes().enumerate() {
            letter_positions
                .entry(Letter::from_lowercase_byte(byte))
                .or_default()
                .push(i);
        }

        Ok(Self {
            text,
            letter_positions,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; kept for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Letter at a zero-based position, if it exists
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> Option<Letter> {
        self.text
            .as_bytes()
            .get(position)
            .map(|&b| Letter::from_lowercase_byte(b))
    }

    /// Iterate the letters in order
    pub fn letters(&self) -> impl Iterator<Item = Letter> + '_ {
        self.text.bytes().map(Letter::from_lowercase_byte)
    }

    /// All positions where a letter appears, ascending
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    pub fn positions_of(&self, letter: Letter) -> &[usize] {
        self.letter_positions
            .get(&letter)
            .map_or(&[], Vec::as_slice)
    }

    /// How many times a letter occurs
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: Letter) -> usize {
        self.positions_of(letter).len()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
