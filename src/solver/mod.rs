//! Hangman inference engine
//!
//! Narrows the dictionary to words consistent with the evidence so far and
//! picks the next letter by aggregate frequency over those candidates.

mod engine;
pub mod evidence;
pub mod frequency;

pub use engine::InferenceEngine;
pub use evidence::{GuessHistory, LetterCounts};
pub use frequency::LetterFrequencies;
