//! Error types for the Hangman engine and its collaborators

use std::path::PathBuf;
use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, HangmanError>;

/// Everything that can end a game early
///
/// All variants are fatal to the game in progress; the caller decides
/// whether to start a new one.
#[derive(Debug, Error)]
pub enum HangmanError {
    /// No dictionary word is consistent with the evidence gathered so far.
    ///
    /// Usually means the referee holds a word outside the dictionary or
    /// answered a confirmation incorrectly.
    #[error("no dictionary word matches pattern \"{pattern}\" and the letter counts seen so far")]
    EmptyCandidateSet { pattern: String },

    /// Candidates remain but every letter in them was already tried.
    #[error("every letter in the remaining candidates has already been guessed")]
    AlphabetExhausted,

    /// A guess was requested before the secret length was registered.
    #[error("the guesser has not been told the secret word length")]
    NotRegistered,

    /// Malformed text from a human or from a word list entry.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A secret length of zero, or a word whose length does not fit the game.
    #[error("invalid secret length {0}")]
    InvalidLength(usize),

    /// A reported position does not exist on the board.
    #[error("position {index} is outside a board of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A letter was reported again with positions that disagree with the
    /// first report.
    #[error("response {indices:?} for '{letter}' contradicts an earlier answer")]
    ConflictingResponse { letter: char, indices: Vec<usize> },

    /// A turn was requested while the game is not being played.
    #[error("the game is not in progress")]
    NotPlaying,

    /// The referee was asked about a guess before choosing a secret.
    #[error("the referee has not picked a secret word")]
    NoSecret,

    /// The word list file could not be read.
    #[error("could not read word list {path}")]
    DictionaryLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The word list contained no usable words.
    #[error("the dictionary is empty")]
    EmptyDictionary,

    /// Reading from or writing to the terminal failed.
    #[error("terminal I/O failed")]
    Io(#[from] std::io::Error),
}
