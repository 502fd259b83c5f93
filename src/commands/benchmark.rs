//! Benchmark command
//!
//! Plays the computer guesser against every target word and summarizes how
//! it did.

use crate::core::Word;
use crate::game::{CHANCES, Game, GameOutcome};
use crate::player::ComputerPlayer;
use crate::wordlists::Dictionary;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub wins: usize,
    pub losses: usize,
    /// Games abandoned because the guesser ran out of candidates
    pub errors: usize,
    pub average_misses: f64,
    pub average_turns: f64,
    /// Misses per finished game -> number of games
    pub distribution: BTreeMap<usize, usize>,
    pub failed_words: Vec<String>,
    pub duration: Duration,
    pub words_per_second: f64,
}

impl BenchmarkResult {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_words == 0 {
            0.0
        } else {
            self.wins as f64 / self.total_words as f64
        }
    }
}

enum Played {
    Finished { won: bool, misses: usize, turns: usize },
    Abandoned,
}

/// Play one computer-versus-computer game per target in parallel
pub fn run_benchmark(
    dictionary: &Dictionary,
    targets: &[Word],
    show_progress: bool,
) -> BenchmarkResult {
    let start = Instant::now();

    let pb = if show_progress {
        ProgressBar::new(targets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .map_or_else(|_| ProgressStyle::default_bar(), |s| s.progress_chars("█▓▒░")),
    );

    let played: Vec<(&Word, Played)> = targets
        .par_iter()
        .map(|target| {
            let played = play_one(dictionary, target);
            pb.inc(1);
            (target, played)
        })
        .collect();

    pb.finish_with_message("done");

    let mut wins = 0;
    let mut losses = 0;
    let mut errors = 0;
    let mut total_misses = 0;
    let mut total_turns = 0;
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut failed_words = Vec::new();

    for (target, played) in played {
        match played {
            Played::Finished { won, misses, turns } => {
                if won {
                    wins += 1;
                } else {
                    losses += 1;
                    failed_words.push(target.text().to_string());
                }
                total_misses += misses;
                total_turns += turns;
                *distribution.entry(misses).or_insert(0) += 1;
            }
            Played::Abandoned => {
                errors += 1;
                failed_words.push(target.text().to_string());
            }
        }
    }

    let duration = start.elapsed();
    let total_words = targets.len();
    let finished = wins + losses;

    BenchmarkResult {
        total_words,
        wins,
        losses,
        errors,
        average_misses: ratio(total_misses, finished),
        average_turns: ratio(total_turns, finished),
        distribution,
        failed_words,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

fn play_one(dictionary: &Dictionary, target: &Word) -> Played {
    let referee = match ComputerPlayer::new(dictionary).with_secret(target.text()) {
        Ok(referee) => referee,
        Err(_) => return Played::Abandoned,
    };
    let mut game = Game::new(ComputerPlayer::new(dictionary), referee);

    match game.play(|_| {}) {
        Ok(GameOutcome::Won {
            remaining_chances,
            turns,
            ..
        }) => Played::Finished {
            won: true,
            misses: CHANCES - remaining_chances,
            turns,
        },
        Ok(GameOutcome::Lost { turns, .. }) => Played::Finished {
            won: false,
            misses: CHANCES,
            turns,
        },
        Err(err) => {
            log::warn!("abandoned game for \"{target}\": {err}");
            Played::Abandoned
        }
    }
}

fn ratio(total: usize, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        total as f64 / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_words(dictionary: &Dictionary, n: usize) -> Vec<Word> {
        dictionary.words().iter().take(n).cloned().collect()
    }

    #[test]
    fn benchmark_runs() {
        let dictionary = Dictionary::embedded();
        let targets = first_words(&dictionary, 20);
        let result = run_benchmark(&dictionary, &targets, false);

        assert_eq!(result.total_words, 20);
        assert_eq!(result.wins + result.losses + result.errors, 20);
        assert_eq!(result.errors, 0);
        assert!(result.average_turns >= 1.0);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let dictionary = Dictionary::embedded();
        let targets = first_words(&dictionary, 20);
        let result = run_benchmark(&dictionary, &targets, false);

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.wins + result.losses);
        assert!(result.distribution.keys().all(|&m| m <= CHANCES));
    }

    #[test]
    fn benchmark_counts_words_outside_dictionary_as_errors() {
        let dictionary = Dictionary::from_strs(&["cat", "cot"]).unwrap();
        let targets = vec![Word::new("cat").unwrap(), Word::new("dog").unwrap()];
        let result = run_benchmark(&dictionary, &targets, false);

        assert_eq!(result.wins, 1);
        assert_eq!(result.errors, 1);
        assert_eq!(result.failed_words, vec!["dog".to_string()]);
    }

    #[test]
    fn benchmark_empty_word_list() {
        let dictionary = Dictionary::embedded();
        let result = run_benchmark(&dictionary, &[], false);

        assert_eq!(result.total_words, 0);
        assert!(result.win_rate().abs() < f64::EPSILON);
        assert!(result.average_misses.abs() < f64::EPSILON);
    }
}
