//! Hangman Solver
//!
//! Hangman between a guesser and a referee, either of which can be a person
//! or the computer. The computer guesser narrows the dictionary to the words
//! consistent with everything the referee has said and guesses the letter
//! that occurs most often across them.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman_solver::game::Game;
//! use hangman_solver::player::ComputerPlayer;
//! use hangman_solver::wordlists::Dictionary;
//!
//! let dictionary = Dictionary::embedded();
//! let guesser = ComputerPlayer::new(&dictionary);
//! let referee = ComputerPlayer::with_seed(&dictionary, 7).with_secret("kettle")?;
//!
//! let mut game = Game::new(guesser, referee);
//! let outcome = game.play(|turn| println!("{} -> {}", turn.letter, turn.board))?;
//! assert!(outcome.is_win());
//! # Ok::<_, hangman_solver::HangmanError>(())
//! ```

// Core domain types
pub mod core;

// Errors shared by every module
pub mod error;

// Candidate inference
pub mod solver;

// Guesser and referee roles
pub mod player;

// Turn loop and win/loss rules
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::{HangmanError, Result};
