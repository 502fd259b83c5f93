//! The public board the controller shows after every turn

use super::Letter;
use crate::error::{HangmanError, Result};
use std::fmt;

/// Placeholder printed for a hidden slot
///
/// Never a valid `Letter`, so it cannot be confused with a revealed one.
pub const WILDCARD: char = '_';

/// Revealed letters of the secret word, in order
///
/// The length is fixed at construction and a revealed slot is never hidden
/// again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    slots: Vec<Option<Letter>>,
}

impl Board {
    /// A fully hidden board for a secret of `len` letters
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            slots: vec![None; len],
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slot contents, `None` where still hidden
    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[Option<Letter>] {
        &self.slots
    }

    /// Write `letter` into each of `indices`
    ///
    /// Rewriting a slot with the same letter is a no-op, so applying the
    /// same response twice leaves the board unchanged.
    ///
    /// # Errors
    /// Returns `HangmanError::IndexOutOfRange` if any index is past the end;
    /// the board is left untouched in that case.
    pub fn reveal(&mut self, letter: Letter, indices: &[usize]) -> Result<()> {
        if let Some(&index) = indices.iter().find(|&&i| i >= self.slots.len()) {
            return Err(HangmanError::IndexOutOfRange {
                index,
                len: self.slots.len(),
            });
        }
        for &i in indices {
            self.slots[i] = Some(letter);
        }
        Ok(())
    }

    /// True once no hidden slot remains
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Whether `letter` is showing anywhere on the board
    #[must_use]
    pub fn contains(&self, letter: Letter) -> bool {
        self.slots.contains(&Some(letter))
    }

    /// Number of hidden slots
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_none()).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            write!(f, "{}", slot.map_or(WILDCARD, Letter::as_char))?;
        }
        Ok(())
    }
}
