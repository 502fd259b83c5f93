//! Letter frequency aggregation over a candidate set

use crate::core::{ALPHABET, Letter, Word};

/// Total occurrences of each letter across a set of words
///
/// A word containing a letter twice contributes two, so these are letter
/// totals rather than counts of distinct words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterFrequencies {
    totals: [usize; 26],
}

impl LetterFrequencies {
    /// Tally every letter of every word
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::{Letter, Word};
    /// use hangman_solver::solver::LetterFrequencies;
    ///
    /// let words = [Word::new("tee").unwrap(), Word::new("ten").unwrap()];
    /// let freq = LetterFrequencies::tally(&words);
    ///
    /// assert_eq!(freq.total(Letter::new('e').unwrap()), 3);
    /// assert_eq!(freq.total(Letter::new('t').unwrap()), 2);
    /// ```
    pub fn tally<'w, I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'w Word>,
    {
        let mut totals = [0usize; 26];
        for word in words {
            for letter in word.letters() {
                totals[letter.index()] += 1;
            }
        }
        Self { totals }
    }

    #[inline]
    #[must_use]
    pub const fn total(&self, letter: Letter) -> usize {
        self.totals[letter.index()]
    }

    /// True when no letters were tallied
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.totals.iter().all(|&t| t == 0)
    }

    /// Letters with a non-zero total, most frequent first
    ///
    /// Equal totals are ordered alphabetically.
    #[must_use]
    pub fn ranked(&self) -> Vec<(Letter, usize)> {
        let mut ranked: Vec<(Letter, usize)> = ALPHABET
            .iter()
            .map(|&l| (l, self.total(l)))
            .filter(|&(_, total)| total > 0)
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        ranked
    }

    /// Most frequent letter for which `excluded` is false
    ///
    /// Letters with a zero total are never chosen. Ties go to the
    /// alphabetically smallest letter.
    pub fn best_excluding<F>(&self, mut excluded: F) -> Option<Letter>
    where
        F: FnMut(Letter) -> bool,
    {
        let mut best: Option<(Letter, usize)> = None;
        for &letter in &ALPHABET {
            let total = self.total(letter);
            if total == 0 || excluded(letter) {
                continue;
            }
            // Strictly greater keeps the earliest letter on ties
            if best.is_none_or(|(_, best_total)| total > best_total) {
                best = Some((letter, total));
            }
        }
        best.map(|(letter, _)| letter)
    }
}
