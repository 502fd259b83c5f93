//! Evidence the guesser accumulates from referee responses

use crate::core::{Letter, Word};
use rustc_hash::FxHashMap;

/// Exact occurrence count of each guessed letter in the secret
///
/// Lookups for letters never guessed return 0 rather than failing; only
/// recorded letters constrain candidates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterCounts {
    counts: FxHashMap<Letter, usize>,
}

impl LetterCounts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count recorded for `letter`, or 0 if it has not been guessed
    #[inline]
    #[must_use]
    pub fn get(&self, letter: Letter) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Whether a count has been recorded for `letter`
    #[inline]
    #[must_use]
    pub fn is_known(&self, letter: Letter) -> bool {
        self.counts.contains_key(&letter)
    }

    /// Record the count for a letter
    ///
    /// A letter's count is fixed once recorded; later calls are ignored and
    /// return `false`.
    pub fn record(&mut self, letter: Letter, count: usize) -> bool {
        if let Some(&existing) = self.counts.get(&letter) {
            if existing != count {
                log::warn!("ignoring count {count} for '{letter}', already recorded as {existing}");
            }
            return false;
        }
        self.counts.insert(letter, count);
        true
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// True if `word` has exactly the recorded count of every recorded letter
    #[must_use]
    pub fn satisfied_by(&self, word: &Word) -> bool {
        self.counts
            .iter()
            .all(|(&letter, &count)| word.count_of(letter) == count)
    }

    pub fn clear(&mut self) {
        self.counts.clear();
    }
}

/// Letters already guessed, in guess order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessHistory {
    letters: Vec<Letter>,
}

impl GuessHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, letter: Letter) -> bool {
        self.letters.contains(&letter)
    }

    /// Append a letter; returns `false` and leaves the history alone if it
    /// was already guessed
    pub fn push(&mut self, letter: Letter) -> bool {
        if self.contains(letter) {
            return false;
        }
        self.letters.push(letter);
        true
    }

    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn clear(&mut self) {
        self.letters.clear();
    }
}
