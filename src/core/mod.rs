//! Core domain types for Hangman
//!
//! Letters, words, the public board and the guesser's private pattern.
//! Everything here is pure and has no I/O.

mod board;
mod letter;
mod pattern;
mod word;

pub use board::{Board, WILDCARD};
pub use letter::{ALPHABET, Letter};
pub use pattern::Pattern;
pub use word::Word;
