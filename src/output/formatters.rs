//! Formatting utilities for terminal output

use crate::core::Board;

/// Board with a space between slots, easier to count at a glance
#[must_use]
pub fn spaced_board(board: &Board) -> String {
    board
        .to_string()
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// One cell per chance, filled while it is still available
#[must_use]
pub fn chances_bar(remaining: usize, total: usize) -> String {
    create_progress_bar(remaining as f64, total as f64, total)
}
