//! Word list loading utilities
//!
//! Provides functions to load a dictionary from a file or from embedded constants.

use super::Dictionary;
use crate::error::{HangmanError, Result};
use std::fs;
use std::path::Path;

/// Load a dictionary from a line-delimited file
///
/// One word per line; trailing whitespace and blank lines are ignored and
/// entries that are not plain words are skipped.
///
/// # Errors
///
/// Returns `HangmanError::DictionaryLoad` if the file cannot be read and
/// `HangmanError::EmptyDictionary` if it holds no usable words.
///
/// # Examples
/// ```no_run
/// use hangman_solver::wordlists::loader::load_from_file;
///
/// let dictionary = load_from_file("dictionary.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| HangmanError::DictionaryLoad {
        path: path.to_path_buf(),
        source,
    })?;

    let dictionary = parse_lines(&content)?;
    log::info!("loaded {} words from {}", dictionary.len(), path.display());
    Ok(dictionary)
}

/// Parse word list text already in memory
///
/// # Errors
///
/// Returns `HangmanError::EmptyDictionary` if no line holds a usable word.
pub fn parse_lines(content: &str) -> Result<Dictionary> {
    let entries: Vec<&str> = content
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .collect();
    Dictionary::from_strs(&entries)
}

/// Load the dictionary named on the command line, or the embedded one
///
/// # Errors
///
/// Same as [`load_from_file`] when a path is given.
pub fn load_or_default(path: Option<&Path>) -> Result<Dictionary> {
    match path {
        Some(path) => load_from_file(path),
        None => Ok(Dictionary::embedded()),
    }
}
