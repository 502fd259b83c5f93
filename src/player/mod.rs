//! The two Hangman roles and the players that can fill them
//!
//! Either role can be played by the computer or by a person at a prompt.
//! The controller only talks to roles through [`Referee`] and [`Guesser`].

mod computer;
mod human;
pub mod prompt;

pub use computer::ComputerPlayer;
pub use human::HumanPlayer;
pub use prompt::{Prompt, ScriptedPrompt, StdinPrompt};

use crate::core::{Board, Letter};
use crate::error::Result;

/// Holds the secret word and answers guesses about it
pub trait Referee {
    /// Choose the secret and return its length
    ///
    /// # Errors
    /// Fails when no secret can be chosen (empty dictionary, input error).
    fn pick_secret_word(&mut self) -> Result<usize>;

    /// Zero-based positions of `letter` in the secret, ascending
    ///
    /// # Errors
    /// Fails if no secret was picked or input could not be read.
    fn check_guess(&mut self, letter: Letter) -> Result<Vec<usize>>;

    /// The secret, shown once the game is lost
    fn reveal_secret(&self) -> Option<&str>;
}

/// Tries to uncover the secret one letter at a time
pub trait Guesser {
    /// Prepare for a secret of `len` letters, forgetting any earlier game
    ///
    /// # Errors
    /// Fails for a zero length.
    fn register_secret_length(&mut self, len: usize) -> Result<()>;

    /// Next letter to try given the public board
    ///
    /// # Errors
    /// Fails when no sensible guess exists or input could not be read.
    fn guess(&mut self, board: &Board) -> Result<Letter>;

    /// Learn the referee's answer to the last guess
    ///
    /// # Errors
    /// Fails for positions outside the secret.
    fn handle_response(&mut self, letter: Letter, indices: &[usize]) -> Result<()>;

    /// Whether the most recent guess revealed anything
    fn last_guess_matched(&self) -> bool;
}

/// Enum wrapper for runtime role selection
///
/// Lets the CLI pick who plays which role while keeping static dispatch.
pub enum AnyPlayer<'a, P: Prompt = StdinPrompt> {
    Computer(ComputerPlayer<'a>),
    Human(HumanPlayer<P>),
}

impl<P: Prompt> Referee for AnyPlayer<'_, P> {
    fn pick_secret_word(&mut self) -> Result<usize> {
        match self {
            Self::Computer(p) => p.pick_secret_word(),
            Self::Human(p) => p.pick_secret_word(),
        }
    }

    fn check_guess(&mut self, letter: Letter) -> Result<Vec<usize>> {
        match self {
            Self::Computer(p) => p.check_guess(letter),
            Self::Human(p) => p.check_guess(letter),
        }
    }

    fn reveal_secret(&self) -> Option<&str> {
        match self {
            Self::Computer(p) => p.reveal_secret(),
            Self::Human(p) => p.reveal_secret(),
        }
    }
}

impl<P: Prompt> Guesser for AnyPlayer<'_, P> {
    fn register_secret_length(&mut self, len: usize) -> Result<()> {
        match self {
            Self::Computer(p) => p.register_secret_length(len),
            Self::Human(p) => p.register_secret_length(len),
        }
    }

    fn guess(&mut self, board: &Board) -> Result<Letter> {
        match self {
            Self::Computer(p) => p.guess(board),
            Self::Human(p) => p.guess(board),
        }
    }

    fn handle_response(&mut self, letter: Letter, indices: &[usize]) -> Result<()> {
        match self {
            Self::Computer(p) => p.handle_response(letter, indices),
            Self::Human(p) => p.handle_response(letter, indices),
        }
    }

    fn last_guess_matched(&self) -> bool {
        match self {
            Self::Computer(p) => p.last_guess_matched(),
            Self::Human(p) => p.last_guess_matched(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::Dictionary;

    #[test]
    fn any_player_dispatches_to_computer() {
        let dict = Dictionary::from_strs(&["cat"]).unwrap();
        let mut player: AnyPlayer<'_, ScriptedPrompt> =
            AnyPlayer::Computer(ComputerPlayer::with_seed(&dict, 1));

        assert_eq!(player.pick_secret_word().unwrap(), 3);
        assert_eq!(player.reveal_secret(), Some("cat"));
        let t = Letter::new('t').unwrap();
        assert_eq!(player.check_guess(t).unwrap(), vec![2]);
    }

    #[test]
    fn any_player_dispatches_to_human() {
        let prompt = ScriptedPrompt::new(["e"]);
        let mut player: AnyPlayer<'_, ScriptedPrompt> =
            AnyPlayer::Human(HumanPlayer::with_seed(prompt, 1));

        player.register_secret_length(4).unwrap();
        let guess = player.guess(&Board::new(4)).unwrap();
        assert_eq!(guess.as_char(), 'e');
        player.handle_response(guess, &[1]).unwrap();
        assert!(player.last_guess_matched());
    }
}
