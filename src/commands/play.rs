//! Interactive game between a person and the computer

use crate::error::Result;
use crate::game::{Game, GameOutcome};
use crate::output::{print_outcome, print_turn};
use crate::player::{AnyPlayer, ComputerPlayer, HumanPlayer, Prompt};
use crate::wordlists::Dictionary;

/// Which side the person at the keyboard takes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HumanRole {
    /// The person guesses a word the computer picked
    Guesser,
    /// The computer guesses the person's word
    Referee,
}

impl HumanRole {
    /// Parse a role name
    ///
    /// Accepts "human"/"guess"/"guesser" for guessing and
    /// "comp"/"computer"/"referee"/"ref" for refereeing.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "human" | "guess" | "guesser" => Some(Self::Guesser),
            "comp" | "computer" | "referee" | "ref" => Some(Self::Referee),
            _ => None,
        }
    }
}

/// Options for an interactive game
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayConfig {
    /// Ask at startup when not given
    pub role: Option<HumanRole>,
    /// Seed for the computer referee's word choice and random human guesses
    pub seed: Option<u64>,
}

/// Run one interactive game and print its progress
///
/// # Errors
///
/// Returns an error if input can no longer be read or the computer guesser
/// finds no dictionary word consistent with the referee's answers.
pub fn run_play<P: Prompt>(
    dictionary: &Dictionary,
    config: PlayConfig,
    mut prompt: P,
) -> Result<GameOutcome> {
    println!("Welcome to Hangman!");

    let role = match config.role {
        Some(role) => role,
        None => ask_role(&mut prompt)?,
    };

    let computer = match config.seed {
        Some(seed) => ComputerPlayer::with_seed(dictionary, seed),
        None => ComputerPlayer::new(dictionary),
    };
    let human = match config.seed {
        Some(seed) => HumanPlayer::with_seed(prompt, seed),
        None => HumanPlayer::new(prompt),
    };

    let (guesser, referee) = match role {
        HumanRole::Guesser => {
            println!(
                "Great! The computer has chosen a secret word, guess one letter at a time. \
                 You will be told if you've already chosen a letter."
            );
            (AnyPlayer::Human(human), AnyPlayer::Computer(computer))
        }
        HumanRole::Referee => {
            println!(
                "Alright! The computer will guess and narrow down letters in your word \
                 without knowing the word itself."
            );
            (AnyPlayer::Computer(computer), AnyPlayer::Human(human))
        }
    };

    let mut game = Game::new(guesser, referee);
    let outcome = game.play(print_turn)?;
    print_outcome(&outcome);
    Ok(outcome)
}

fn ask_role<P: Prompt>(prompt: &mut P) -> Result<HumanRole> {
    let question = "Would you like to guess letters or choose the word for the computer to guess? \
                    Type \"human\" to guess or \"comp\" for the computer to guess.";
    // Anything unrecognized lets the computer guess
    let answer = prompt.prompt_line(question)?;
    Ok(HumanRole::from_name(&answer).unwrap_or(HumanRole::Referee))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::ScriptedPrompt;

    #[test]
    fn role_names() {
        assert_eq!(HumanRole::from_name("human"), Some(HumanRole::Guesser));
        assert_eq!(HumanRole::from_name(" COMP "), Some(HumanRole::Referee));
        assert_eq!(HumanRole::from_name("referee"), Some(HumanRole::Referee));
        assert_eq!(HumanRole::from_name("spectator"), None);
    }

    #[test]
    fn human_referee_game_is_won_by_computer() {
        let dictionary = Dictionary::from_strs(&["cat", "cot", "dog"]).unwrap();
        // Guesses run c, t, a: ties among c/o/t and then a/o go alphabetically
        let prompt = ScriptedPrompt::new(["comp", "cat", "y", "y", "y"]);
        let config = PlayConfig {
            role: None,
            seed: Some(1),
        };

        let outcome = run_play(&dictionary, config, prompt).unwrap();
        assert_eq!(
            outcome,
            GameOutcome::Won {
                board: "cat".to_string(),
                remaining_chances: crate::game::CHANCES,
                turns: 3,
            }
        );
    }

    #[test]
    fn human_guesser_can_lose() {
        let dictionary = Dictionary::from_strs(&["dog"]).unwrap();
        let misses = ["a", "b", "c", "e", "f", "h", "i", "j", "k", "l"];
        let prompt = ScriptedPrompt::new(misses);
        let config = PlayConfig {
            role: Some(HumanRole::Guesser),
            seed: Some(1),
        };

        let outcome = run_play(&dictionary, config, prompt).unwrap();
        assert!(!outcome.is_win());
        assert_eq!(outcome.secret(), Some("dog"));
    }

    #[test]
    fn closed_input_is_an_error() {
        let dictionary = Dictionary::from_strs(&["dog"]).unwrap();
        let prompt = ScriptedPrompt::new(["human", "d"]);
        let result = run_play(&dictionary, PlayConfig::default(), prompt);
        assert!(result.is_err());
    }
}
