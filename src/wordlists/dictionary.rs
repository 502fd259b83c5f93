//! Ordered, non-empty word collection shared by both roles

use crate::core::Word;
use crate::error::{HangmanError, Result};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Read-only sequence of dictionary words, never empty
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
}

impl Dictionary {
    /// Wrap an already-validated list
    ///
    /// # Errors
    /// Returns `HangmanError::EmptyDictionary` if `words` is empty.
    pub fn new(words: Vec<Word>) -> Result<Self> {
        if words.is_empty() {
            return Err(HangmanError::EmptyDictionary);
        }
        Ok(Self { words })
    }

    /// Build from raw strings, skipping entries that are not plain words
    ///
    /// # Errors
    /// Returns `HangmanError::EmptyDictionary` if nothing usable remains.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::from_strs(&["cat", "dog", "two words"]).unwrap();
    /// assert_eq!(dictionary.len(), 2);
    /// ```
    pub fn from_strs(entries: &[&str]) -> Result<Self> {
        let words = entries
            .iter()
            .filter_map(|&entry| match Word::new(entry) {
                Ok(word) => Some(word),
                Err(err) => {
                    log::warn!("skipping dictionary entry {entry:?}: {err}");
                    None
                }
            })
            .collect();
        Self::new(words)
    }

    /// The dictionary compiled into the binary
    ///
    /// # Panics
    /// Only if the embedded list is empty, which the build script and tests rule out.
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_strs(super::DEFAULT_WORDS).expect("embedded dictionary is not empty")
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false once constructed
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words with exactly `len` letters, in dictionary order
    pub fn of_length(&self, len: usize) -> impl Iterator<Item = &Word> {
        self.words.iter().filter(move |w| w.len() == len)
    }

    /// Whether the exact word is present
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.words.iter().any(|w| w.text() == text)
    }

    /// Pick a uniformly random word
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        // Non-empty by construction
        self.words.choose(rng).unwrap_or(&self.words[0])
    }
}
