//! Word solving command
//!
//! Plays the computer guesser against a computer referee holding a known
//! word and records the path to the answer.

use crate::core::{Board, Letter};
use crate::error::Result;
use crate::game::{Game, GameState};
use crate::player::ComputerPlayer;
use crate::wordlists::Dictionary;

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

impl SolveResult {
    /// Guesses that revealed nothing
    #[must_use]
    pub fn misses(&self) -> usize {
        self.guesses.iter().filter(|s| s.indices.is_empty()).count()
    }
}

/// A single guess step in the solution
pub struct GuessStep {
    pub letter: Letter,
    pub indices: Vec<usize>,
    pub board: Board,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Most frequent letters among the candidates before the guess
    pub top_letters: Vec<(Letter, usize)>,
    pub remaining_chances: usize,
}

/// Letters listed per step in `top_letters`
pub const TOP_LETTERS: usize = 5;

/// Solve a specific word with the computer guesser
///
/// # Errors
///
/// Returns an error if:
/// - The target is not a plain lowercase word
/// - The guesser runs out of candidates, which happens when the target is
///   not in the dictionary
pub fn solve_word(target: &str, dictionary: &Dictionary) -> Result<SolveResult> {
    let referee = ComputerPlayer::new(dictionary).with_secret(target)?;
    let mut game = Game::new(ComputerPlayer::new(dictionary), referee);
    game.setup()?;

    let mut guesses = Vec::new();
    while game.state() == GameState::Playing {
        let engine = game.guesser().engine();
        let candidates_before = engine.candidate_count();
        let mut top_letters = engine.candidate_frequencies()?.ranked();
        top_letters.truncate(TOP_LETTERS);

        let report = game.take_turn()?;
        let candidates_after = game.guesser().engine().candidate_count();

        guesses.push(GuessStep {
            letter: report.letter,
            indices: report.indices,
            board: report.board,
            candidates_before,
            candidates_after,
            top_letters,
            remaining_chances: report.remaining_chances,
        });
    }

    Ok(SolveResult {
        success: game.state() == GameState::Won,
        guesses,
        target: target.to_ascii_lowercase(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HangmanError;
    use crate::game::CHANCES;

    #[test]
    fn solve_word_succeeds() {
        let dictionary = Dictionary::embedded();
        let result = solve_word("kettle", &dictionary).unwrap();

        assert!(result.success);
        assert_eq!(result.guesses.last().unwrap().board.to_string(), "kettle");
    }

    #[test]
    fn solve_records_history() {
        let dictionary = Dictionary::embedded();
        let result = solve_word("letter", &dictionary).unwrap();

        assert!(!result.guesses.is_empty());
        for step in &result.guesses {
            assert!(step.candidates_after <= step.candidates_before);
            assert!(step.candidates_after >= 1);
        }
    }

    #[test]
    fn first_guess_is_top_ranked_letter() {
        let dictionary = Dictionary::embedded();
        let result = solve_word("kettle", &dictionary).unwrap();

        let first = &result.guesses[0];
        assert_eq!(first.top_letters[0].0, first.letter);
        assert!(first.top_letters.len() <= TOP_LETTERS);
        assert!(first.top_letters.windows(2).all(|w| w[0].1 >= w[1].1));
        assert_eq!(first.board.hidden_count() + first.indices.len(), 6);
        assert_eq!(result.guesses.last().unwrap().board.hidden_count(), 0);
    }

    #[test]
    fn solve_chances_track_misses() {
        let dictionary = Dictionary::embedded();
        let result = solve_word("dog", &dictionary).unwrap();

        let last = result.guesses.last().unwrap();
        assert_eq!(last.remaining_chances, CHANCES - result.misses());
    }

    #[test]
    fn solve_invalid_target_returns_error() {
        let dictionary = Dictionary::embedded();
        assert!(matches!(
            solve_word("no way", &dictionary),
            Err(HangmanError::InvalidInput(_))
        ));
    }

    #[test]
    fn solve_unknown_word_runs_out_of_candidates() {
        let dictionary = Dictionary::from_strs(&["cat", "cot"]).unwrap();
        assert!(matches!(
            solve_word("dog", &dictionary),
            Err(HangmanError::EmptyCandidateSet { .. })
        ));
    }
}
