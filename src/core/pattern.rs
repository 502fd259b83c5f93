//! The guesser's working reconstruction of the secret word
//!
//! A pattern has the same shape as the board but belongs to the guesser
//! alone. Revealed slots pin a letter to a position; hidden slots match
//! anything.

use super::{Letter, WILDCARD, Word};
use crate::error::{HangmanError, Result};
use std::fmt;

/// Positional hypothesis of the secret word
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Pattern {
    slots: Vec<Option<Letter>>,
}

impl Pattern {
    /// All-wildcard pattern of the given length
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

    /// Letter pinned at a position, `None` for a wildcard or out of range
    #[inline]
    #[must_use]
    pub fn get(&self, position: usize) -> Option<Letter> {
        self.slots.get(position).copied().flatten()
    }

    /// Pin `letter` at each index
    ///
    /// # Errors
    /// Returns `HangmanError::IndexOutOfRange` if any index is past the end;
    /// nothing is written in that case.
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

    /// Whether `word` agrees with every pinned position
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::{Letter, Pattern, Word};
    ///
    /// let mut pattern = Pattern::new(3);
    /// pattern.reveal(Letter::new('a').unwrap(), &[1]).unwrap();
    ///
    /// assert!(pattern.matches(&Word::new("cat").unwrap()));
    /// assert!(!pattern.matches(&Word::new("cot").unwrap()));
    /// assert!(!pattern.matches(&Word::new("cart").unwrap()));
    /// ```
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        word.len() == self.slots.len()
            && self
                .slots
                .iter()
                .zip(word.letters())
                .all(|(slot, letter)| slot.is_none_or(|pinned| pinned == letter))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            write!(f, "{}", slot.map_or(WILDCARD, Letter::as_char))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(ch: char) -> Letter {
        Letter::new(ch).unwrap()
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn wildcard_pattern_matches_any_word_of_same_length() {
        let pattern = Pattern::new(3);
        assert!(pattern.matches(&word("cat")));
        assert!(pattern.matches(&word("dog")));
        assert!(!pattern.matches(&word("cats")));
        assert!(!pattern.matches(&word("at")));
    }

    #[test]
    fn revealed_positions_must_agree() {
        let mut pattern = Pattern::new(4);
        pattern.reveal(letter('o'), &[1, 2]).unwrap();

        assert!(pattern.matches(&word("book")));
        assert!(pattern.matches(&word("food")));
        assert!(!pattern.matches(&word("bark")));
        assert_eq!(pattern.to_string(), "_oo_");
    }

    #[test]
    fn reveal_leaves_other_positions_alone() {
        let mut pattern = Pattern::new(5);
        pattern.reveal(letter('e'), &[4]).unwrap();
        pattern.reveal(letter('s'), &[0]).unwrap();

        assert_eq!(pattern.get(0), Some(letter('s')));
        assert_eq!(pattern.get(4), Some(letter('e')));
        for i in 1..4 {
            assert_eq!(pattern.get(i), None);
        }
    }

    #[test]
    fn reveal_out_of_range_fails() {
        let mut pattern = Pattern::new(2);
        assert!(pattern.reveal(letter('a'), &[2]).is_err());
        assert_eq!(pattern, Pattern::new(2));
    }
}
