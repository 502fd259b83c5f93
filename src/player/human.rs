//! A person at the keyboard, playing either role through a [`Prompt`]

use super::{Guesser, Prompt, Referee};
use crate::core::{ALPHABET, Board, Letter, Word};
use crate::error::{HangmanError, Result};
use crate::solver::GuessHistory;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

/// Reply that asks for a random unguessed letter
pub const RANDOM_GUESS: &str = "rg";

/// Human-controlled player
///
/// Malformed answers are re-asked here; only errors reading input reach
/// the controller.
pub struct HumanPlayer<P: Prompt> {
    prompt: P,
    secret: Option<Word>,
    guesses: GuessHistory,
    last_guess_matched: bool,
    rng: StdRng,
}

impl<P: Prompt> HumanPlayer<P> {
    #[must_use]
    pub fn new(prompt: P) -> Self {
        Self::with_rng(prompt, StdRng::from_os_rng())
    }

    /// Reproducible random guesses
    #[must_use]
    pub fn with_seed(prompt: P, seed: u64) -> Self {
        Self::with_rng(prompt, StdRng::seed_from_u64(seed))
    }

    fn with_rng(prompt: P, rng: StdRng) -> Self {
        Self {
            prompt,
            secret: None,
            guesses: GuessHistory::new(),
            last_guess_matched: false,
            rng,
        }
    }

    /// The prompt, e.g. to inspect what was asked
    #[must_use]
    pub const fn prompt(&self) -> &P {
        &self.prompt
    }

    /// Letters this player has guessed so far
    #[must_use]
    pub const fn guesses(&self) -> &GuessHistory {
        &self.guesses
    }

    fn random_letter(&mut self) -> Result<Letter> {
        let open: Vec<Letter> = ALPHABET
            .iter()
            .copied()
            .filter(|&l| !self.guesses.contains(l))
            .collect();
        open.choose(&mut self.rng)
            .copied()
            .ok_or(HangmanError::AlphabetExhausted)
    }

    fn chosen_letters(&self) -> String {
        self.guesses
            .letters()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl<P: Prompt> Referee for HumanPlayer<P> {
    fn pick_secret_word(&mut self) -> Result<usize> {
        let mut message = "What is your secret word?".to_string();
        loop {
            let input = self.prompt.prompt_line(&message)?;
            match Word::new(input) {
                Ok(word) => {
                    let len = word.len();
                    self.secret = Some(word);
                    return Ok(len);
                }
                Err(err) => {
                    message = format!("{err}. What is your secret word?");
                }
            }
        }
    }

    fn check_guess(&mut self, letter: Letter) -> Result<Vec<usize>> {
        let secret = self.secret.as_ref().ok_or(HangmanError::NoSecret)?;
        let message = format!(
            "The computer guesses \"{letter}\", is this letter in your word? Reply \"y\" or \"n\"."
        );
        loop {
            let input = self.prompt.prompt_line(&message)?.to_ascii_lowercase();
            match input.as_str() {
                "y" | "yes" => return Ok(secret.positions_of(letter).to_vec()),
                "n" | "no" => return Ok(Vec::new()),
                _ => {}
            }
        }
    }

    fn reveal_secret(&self) -> Option<&str> {
        self.secret.as_ref().map(Word::text)
    }
}

impl<P: Prompt> Guesser for HumanPlayer<P> {
    fn register_secret_length(&mut self, len: usize) -> Result<()> {
        if len == 0 {
            return Err(HangmanError::InvalidLength(len));
        }
        self.guesses.clear();
        self.last_guess_matched = false;
        Ok(())
    }

    fn guess(&mut self, _board: &Board) -> Result<Letter> {
        let ask = format!(
            "Which letter would you like to guess? You may also enter \"{RANDOM_GUESS}\" for random guess"
        );
        let mut message = ask.clone();
        loop {
            let input = self.prompt.prompt_line(&message)?.to_ascii_lowercase();

            if input == RANDOM_GUESS {
                let letter = self.random_letter()?;
                self.guesses.push(letter);
                self.prompt.say(&format!("You randomly guessed {letter}!"))?;
                return Ok(letter);
            }

            match Letter::parse(&input) {
                Ok(letter) if self.guesses.contains(letter) => {
                    message = format!(
                        "This letter was already selected! Pick another!\nHere are your chosen letters: {}",
                        self.chosen_letters()
                    );
                }
                Ok(letter) => {
                    self.guesses.push(letter);
                    return Ok(letter);
                }
                Err(err) => {
                    message = format!("{err}\n{ask}");
                }
            }
        }
    }

    fn handle_response(&mut self, _letter: Letter, indices: &[usize]) -> Result<()> {
        self.last_guess_matched = !indices.is_empty();
        Ok(())
    }

    fn last_guess_matched(&self) -> bool {
        self.last_guess_matched
    }
}
