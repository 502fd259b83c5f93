//! Word lists for Hangman
//!
//! The dictionary provider: an embedded default list plus loading from a
//! line-delimited file.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::Dictionary;
pub use embedded::{DEFAULT_WORDS, DEFAULT_WORDS_COUNT};
