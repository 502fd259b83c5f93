//! Candidate inference for the computer guesser

use super::{GuessHistory, LetterCounts, LetterFrequencies};
use crate::core::{Board, Letter, Pattern, Word};
use crate::error::{HangmanError, Result};
use crate::wordlists::Dictionary;

/// Guesser-side model of the secret word
///
/// Owns the pattern, the letter counts and the guess history. Candidates
/// are recomputed from the dictionary on every guess rather than stored.
pub struct InferenceEngine<'a> {
    dictionary: &'a Dictionary,
    pattern: Option<Pattern>,
    letter_counts: LetterCounts,
    history: GuessHistory,
    last_guess_matched: bool,
}

impl<'a> InferenceEngine<'a> {
    /// Create an engine over a dictionary; call
    /// [`register_secret_length`](Self::register_secret_length) before guessing
    #[must_use]
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self {
            dictionary,
            pattern: None,
            letter_counts: LetterCounts::new(),
            history: GuessHistory::new(),
            last_guess_matched: false,
        }
    }

    /// Start a new game against a secret of `len` letters
    ///
    /// Resets the pattern to all wildcards and forgets all earlier evidence.
    ///
    /// # Errors
    /// Returns `HangmanError::InvalidLength` when `len` is 0.
    pub fn register_secret_length(&mut self, len: usize) -> Result<()> {
        if len == 0 {
            return Err(HangmanError::InvalidLength(len));
        }
        self.pattern = Some(Pattern::new(len));
        self.letter_counts.clear();
        self.history.clear();
        self.last_guess_matched = false;
        log::debug!(
            "registered secret length {len}, {} dictionary words of that length",
            self.dictionary.of_length(len).count()
        );
        Ok(())
    }

    /// Dictionary words consistent with every observation so far
    ///
    /// A word qualifies when it has the pattern's length, agrees with every
    /// revealed position and has exactly the recorded count of every guessed
    /// letter. The result may be empty.
    ///
    /// # Errors
    /// Returns `HangmanError::NotRegistered` before a length is registered.
    pub fn compute_candidates(&self) -> Result<Vec<&'a Word>> {
        let pattern = self.pattern.as_ref().ok_or(HangmanError::NotRegistered)?;

        Ok(self
            .dictionary
            .of_length(pattern.len())
            .filter(|word| self.letter_counts.satisfied_by(word) && pattern.matches(word))
            .collect())
    }

    /// Pick the next letter to guess and record it in the history
    ///
    /// The choice is the letter with the highest total occurrence across
    /// all candidates that has not been guessed and is not showing on the
    /// board, ties going to the alphabetically smallest letter.
    ///
    /// # Errors
    /// - `HangmanError::NotRegistered` before a length is registered
    /// - `HangmanError::EmptyCandidateSet` when no dictionary word fits
    /// - `HangmanError::AlphabetExhausted` when every candidate letter has
    ///   already been tried
    pub fn choose_guess(&mut self, board: &Board) -> Result<Letter> {
        let candidates = self.compute_candidates()?;
        if candidates.is_empty() {
            return Err(HangmanError::EmptyCandidateSet {
                pattern: self.pattern_string(),
            });
        }

        let frequencies = LetterFrequencies::tally(candidates.iter().copied());
        let letter = frequencies
            .best_excluding(|l| self.history.contains(l) || board.contains(l))
            .ok_or(HangmanError::AlphabetExhausted)?;

        log::debug!(
            "{} candidates for {}, guessing '{letter}' ({} occurrences)",
            candidates.len(),
            self.pattern_string(),
            frequencies.total(letter)
        );

        self.history.push(letter);
        Ok(letter)
    }

    /// Fold a referee response into the model
    ///
    /// Records `indices.len()` as the exact count of `letter` and pins the
    /// letter at each index of the pattern. Repeating an earlier response
    /// exactly changes nothing.
    ///
    /// # Errors
    /// - `HangmanError::NotRegistered` before a length is registered
    /// - `HangmanError::IndexOutOfRange` for a position past the end
    /// - `HangmanError::ConflictingResponse` when `letter` was already
    ///   answered with different positions; the model is left untouched
    pub fn handle_response(&mut self, letter: Letter, indices: &[usize]) -> Result<()> {
        let pattern = self.pattern.as_mut().ok_or(HangmanError::NotRegistered)?;

        if self.letter_counts.is_known(letter) {
            let consistent = self.letter_counts.get(letter) == indices.len()
                && indices.iter().all(|&i| pattern.get(i) == Some(letter));
            if !consistent {
                return Err(HangmanError::ConflictingResponse {
                    letter: letter.as_char(),
                    indices: indices.to_vec(),
                });
            }
        }

        pattern.reveal(letter, indices)?;
        self.letter_counts.record(letter, indices.len());
        self.last_guess_matched = !indices.is_empty();
        Ok(())
    }

    /// Whether the most recent response revealed at least one position
    #[must_use]
    pub const fn last_guess_matched(&self) -> bool {
        self.last_guess_matched
    }

    #[must_use]
    pub const fn pattern(&self) -> Option<&Pattern> {
        self.pattern.as_ref()
    }

    #[must_use]
    pub const fn letter_counts(&self) -> &LetterCounts {
        &self.letter_counts
    }

    #[must_use]
    pub const fn history(&self) -> &GuessHistory {
        &self.history
    }

    /// Aggregate letter totals over the current candidates
    ///
    /// # Errors
    /// Returns `HangmanError::NotRegistered` before a length is registered.
    pub fn candidate_frequencies(&self) -> Result<LetterFrequencies> {
        let candidates = self.compute_candidates()?;
        Ok(LetterFrequencies::tally(candidates.iter().copied()))
    }

    /// Count of candidates, 0 before registration
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.compute_candidates().map_or(0, |c| c.len())
    }

    fn pattern_string(&self) -> String {
        self.pattern
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn letter(ch: char) -> Letter {
        Letter::new(ch).unwrap()
    }

    fn dictionary(words: &[&str]) -> Dictionary {
        Dictionary::from_strs(words).unwrap()
    }

    fn texts<'w>(words: &[&'w Word]) -> Vec<&'w str> {
        words.iter().map(|&w| w.text()).collect()
    }

    /// Feed the engine the true response for `guess` against `secret`
    fn respond(engine: &mut InferenceEngine<'_>, secret: &Word, guess: Letter) {
        engine
            .handle_response(guess, secret.positions_of(guess))
            .unwrap();
    }

    #[test]
    fn unregistered_engine_refuses_to_guess() {
        let dict = dictionary(&["cat"]);
        let mut engine = InferenceEngine::new(&dict);
        assert!(matches!(
            engine.compute_candidates(),
            Err(HangmanError::NotRegistered)
        ));
        assert!(matches!(
            engine.choose_guess(&Board::new(3)),
            Err(HangmanError::NotRegistered)
        ));
    }

    #[test]
    fn zero_length_rejected() {
        let dict = dictionary(&["cat"]);
        let mut engine = InferenceEngine::new(&dict);
        assert!(matches!(
            engine.register_secret_length(0),
            Err(HangmanError::InvalidLength(0))
        ));
    }

    #[test]
    fn fresh_candidates_are_all_words_of_length() {
        let dict = dictionary(&["cat", "horse", "dog", "cow", "ox"]);
        let mut engine = InferenceEngine::new(&dict);
        engine.register_secret_length(3).unwrap();

        let candidates = engine.compute_candidates().unwrap();
        assert_eq!(texts(&candidates), ["cat", "dog", "cow"]);
    }

    #[test]
    fn counts_filter_exactly() {
        let dict = dictionary(&["cat", "caa", "act", "dog"]);
        let mut engine = InferenceEngine::new(&dict);
        engine.register_secret_length(3).unwrap();
        engine.handle_response(letter('a'), &[1]).unwrap();

        // "caa" has two a's, "act" has a at 0
        let candidates = engine.compute_candidates().unwrap();
        assert_eq!(texts(&candidates), ["cat"]);
    }

    #[test]
    fn miss_removes_words_containing_letter() {
        let dict = dictionary(&["cat", "dog", "cow"]);
        let mut engine = InferenceEngine::new(&dict);
        engine.register_secret_length(3).unwrap();
        engine.handle_response(letter('o'), &[]).unwrap();

        assert!(!engine.last_guess_matched());
        assert_eq!(texts(&engine.compute_candidates().unwrap()), ["cat"]);
    }

    #[test]
    fn handle_response_pins_pattern_and_sets_flag() {
        let dict = dictionary(&["banana"]);
        let mut engine = InferenceEngine::new(&dict);
        engine.register_secret_length(6).unwrap();
        engine.handle_response(letter('a'), &[1, 3, 5]).unwrap();

        assert!(engine.last_guess_matched());
        assert_eq!(engine.letter_counts().get(letter('a')), 3);
        assert_eq!(engine.pattern().unwrap().to_string(), "_a_a_a");
    }

    #[test]
    fn candidate_frequencies_follow_the_evidence() {
        let dict = dictionary(&["see", "bee", "tea"]);
        let mut engine = InferenceEngine::new(&dict);
        engine.register_secret_length(3).unwrap();
        assert_eq!(engine.candidate_frequencies().unwrap().total(letter('e')), 5);

        engine.handle_response(letter('e'), &[1, 2]).unwrap();
        let ranked = engine.candidate_frequencies().unwrap().ranked();
        assert_eq!(ranked, [(letter('e'), 4), (letter('b'), 1), (letter('s'), 1)]);
    }

    #[test]
    fn conflicting_repeat_response_is_rejected() {
        let dict = dictionary(&["letter"]);
        let mut engine = InferenceEngine::new(&dict);
        engine.register_secret_length(6).unwrap();
        engine.handle_response(letter('t'), &[2, 3]).unwrap();

        // Same answer again is accepted
        engine.handle_response(letter('t'), &[3, 2]).unwrap();

        for indices in [&[2, 3, 4][..], &[2, 4], &[]] {
            let err = engine.handle_response(letter('t'), indices).unwrap_err();
            assert!(matches!(err, HangmanError::ConflictingResponse { letter: 't', .. }));
        }
        assert_eq!(engine.pattern().unwrap().to_string(), "__tt__");
        assert_eq!(engine.letter_counts().get(letter('t')), 2);
    }

    #[test]
    fn choose_guess_picks_most_frequent_letter() {
        let dict = dictionary(&["see", "bee", "tea"]);
        let mut engine = InferenceEngine::new(&dict);
        engine.register_secret_length(3).unwrap();

        let guess = engine.choose_guess(&Board::new(3)).unwrap();
        assert_eq!(guess, letter('e'));
        assert!(engine.history().contains(letter('e')));
    }

    #[test]
    fn choose_guess_skips_guessed_and_revealed() {
        let dict = dictionary(&["see", "bee"]);
        let mut engine = InferenceEngine::new(&dict);
        engine.register_secret_length(3).unwrap();

        assert_eq!(engine.choose_guess(&Board::new(3)).unwrap(), letter('e'));
        engine.handle_response(letter('e'), &[1, 2]).unwrap();

        let mut board = Board::new(3);
        board.reveal(letter('e'), &[1, 2]).unwrap();

        // b and s tie at one occurrence each
        assert_eq!(engine.choose_guess(&board).unwrap(), letter('b'));
    }

    #[test]
    fn empty_candidate_set_is_an_error_not_a_panic() {
        let dict = dictionary(&["cat", "dog"]);
        let mut engine = InferenceEngine::new(&dict);
        engine.register_secret_length(3).unwrap();
        engine.handle_response(letter('z'), &[0]).unwrap();

        let err = engine.choose_guess(&Board::new(3)).unwrap_err();
        assert!(matches!(err, HangmanError::EmptyCandidateSet { .. }));
    }

    #[test]
    fn no_words_of_length_is_empty_candidate_set() {
        let dict = dictionary(&["cat", "dog"]);
        let mut engine = InferenceEngine::new(&dict);
        engine.register_secret_length(9).unwrap();

        assert!(engine.compute_candidates().unwrap().is_empty());
        assert!(matches!(
            engine.choose_guess(&Board::new(9)),
            Err(HangmanError::EmptyCandidateSet { .. })
        ));
    }

    #[test]
    fn exhausted_letters_reported() {
        let dict = dictionary(&["aa"]);
        let mut engine = InferenceEngine::new(&dict);
        engine.register_secret_length(2).unwrap();

        assert_eq!(engine.choose_guess(&Board::new(2)).unwrap(), letter('a'));
        assert!(matches!(
            engine.choose_guess(&Board::new(2)),
            Err(HangmanError::AlphabetExhausted)
        ));
    }

    #[test]
    fn register_resets_state() {
        let dict = dictionary(&["cat", "dog"]);
        let mut engine = InferenceEngine::new(&dict);
        engine.register_secret_length(3).unwrap();
        engine.choose_guess(&Board::new(3)).unwrap();
        engine.handle_response(letter('a'), &[1]).unwrap();

        engine.register_secret_length(3).unwrap();
        assert!(engine.history().is_empty());
        assert!(engine.letter_counts().is_empty());
        assert!(!engine.last_guess_matched());
        assert_eq!(engine.candidate_count(), 2);
    }

    #[test]
    fn cat_scenario_narrows_to_truth() {
        let dict = Dictionary::embedded();
        let secret = Word::new("cat").unwrap();
        let mut engine = InferenceEngine::new(&dict);
        engine.register_secret_length(3).unwrap();

        for ch in ['a', 'c', 't'] {
            respond(&mut engine, &secret, letter(ch));
        }

        let candidates = engine.compute_candidates().unwrap();
        assert_eq!(texts(&candidates), ["cat"]);
    }

    const WORDS: &[&str] = &[
        "cat", "dog", "cow", "bee", "see", "tea", "banana", "bandana", "letter", "better",
        "butter", "apple", "ample", "maple", "zebra", "zero", "zone", "noon", "moon", "book",
    ];

    proptest! {
        #[test]
        fn candidates_never_drop_the_secret(
            secret_idx in 0..WORDS.len(),
            guesses in proptest::collection::vec(0usize..26, 0..12),
        ) {
            let dict = dictionary(WORDS);
            let secret = &dict.words()[secret_idx];
            let mut engine = InferenceEngine::new(&dict);
            engine.register_secret_length(secret.len()).unwrap();

            for idx in guesses {
                let guess = crate::core::ALPHABET[idx];
                if engine.letter_counts().is_known(guess) {
                    continue;
                }
                respond(&mut engine, secret, guess);
            }

            let candidates = engine.compute_candidates().unwrap();
            prop_assert!(candidates.iter().any(|w| *w == secret));
        }

        #[test]
        fn chosen_letters_never_repeat(secret_idx in 0..WORDS.len()) {
            let dict = dictionary(WORDS);
            let secret = &dict.words()[secret_idx];
            let mut engine = InferenceEngine::new(&dict);
            engine.register_secret_length(secret.len()).unwrap();
            let mut board = Board::new(secret.len());
            let mut seen = Vec::new();

            while !board.is_complete() {
                let guess = engine.choose_guess(&board).unwrap();
                prop_assert!(!seen.contains(&guess));
                seen.push(guess);
                let indices = secret.positions_of(guess);
                engine.handle_response(guess, indices).unwrap();
                board.reveal(guess, indices).unwrap();
            }
        }

        #[test]
        fn response_touches_only_given_positions(
            len in 1usize..8,
            first in 0usize..26,
            second in 0usize..26,
            mask in proptest::collection::vec(any::<bool>(), 8),
        ) {
            let dict = dictionary(&["a"]);
            let mut engine = InferenceEngine::new(&dict);
            engine.register_secret_length(len).unwrap();

            prop_assume!(first != second);
            let a = crate::core::ALPHABET[first];
            engine.handle_response(a, &[0]).unwrap();
            let before = engine.pattern().unwrap().clone();

            let b = crate::core::ALPHABET[second];
            let indices: Vec<usize> = (0..len).filter(|&i| mask[i]).collect();
            engine.handle_response(b, &indices).unwrap();
            let after = engine.pattern().unwrap();

            for i in 0..len {
                if indices.contains(&i) {
                    prop_assert_eq!(after.get(i), Some(b));
                } else {
                    prop_assert_eq!(after.get(i), before.get(i));
                }
            }
        }
    }
}
