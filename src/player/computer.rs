//! The computer player: dictionary-sampling referee and inference-driven guesser

use super::{Guesser, Referee};
use crate::core::{Board, Letter, Word};
use crate::error::{HangmanError, Result};
use crate::solver::InferenceEngine;
use crate::wordlists::Dictionary;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Computer-controlled player for either role
///
/// As referee it samples a fresh secret from the dictionary for every game,
/// unless it was given a fixed one. As guesser it delegates to an
/// [`InferenceEngine`].
pub struct ComputerPlayer<'a> {
    dictionary: &'a Dictionary,
    engine: InferenceEngine<'a>,
    fixed: Option<Word>,
    secret: Option<Word>,
    rng: StdRng,
}

impl<'a> ComputerPlayer<'a> {
    /// Create a player whose referee sampling is seeded from the OS
    #[must_use]
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self::with_rng(dictionary, StdRng::from_os_rng())
    }

    /// Create a player with reproducible referee sampling
    #[must_use]
    pub fn with_seed(dictionary: &'a Dictionary, seed: u64) -> Self {
        Self::with_rng(dictionary, StdRng::seed_from_u64(seed))
    }

    fn with_rng(dictionary: &'a Dictionary, rng: StdRng) -> Self {
        Self {
            dictionary,
            engine: InferenceEngine::new(dictionary),
            fixed: None,
            secret: None,
            rng,
        }
    }

    /// Referee with an externally supplied secret instead of a random one
    ///
    /// The same word is used for every game. It does not have to be in the
    /// dictionary, though a computer guesser will then run out of candidates.
    ///
    /// # Errors
    /// Returns `HangmanError::InvalidInput` for text that is not a word.
    pub fn with_secret(mut self, secret: &str) -> Result<Self> {
        self.fixed = Some(Word::new(secret)?);
        Ok(self)
    }

    /// The guesser-side engine, for inspecting candidates
    #[must_use]
    pub const fn engine(&self) -> &InferenceEngine<'a> {
        &self.engine
    }
}

impl Referee for ComputerPlayer<'_> {
    fn pick_secret_word(&mut self) -> Result<usize> {
        let secret = match &self.fixed {
            Some(word) => word.clone(),
            None => self.dictionary.sample(&mut self.rng).clone(),
        };
        let len = secret.len();
        log::debug!("referee holds a {len}-letter secret");
        self.secret = Some(secret);
        Ok(len)
    }

    fn check_guess(&mut self, letter: Letter) -> Result<Vec<usize>> {
        let secret = self.secret.as_ref().ok_or(HangmanError::NoSecret)?;
        Ok(secret.positions_of(letter).to_vec())
    }

    fn reveal_secret(&self) -> Option<&str> {
        self.secret.as_ref().map(Word::text)
    }
}

impl Guesser for ComputerPlayer<'_> {
    fn register_secret_length(&mut self, len: usize) -> Result<()> {
        self.engine.register_secret_length(len)
    }

    fn guess(&mut self, board: &Board) -> Result<Letter> {
        self.engine.choose_guess(board)
    }

    fn handle_response(&mut self, letter: Letter, indices: &[usize]) -> Result<()> {
        self.engine.handle_response(letter, indices)
    }

    fn last_guess_matched(&self) -> bool {
        self.engine.last_guess_matched()
    }
}
