//! Display functions for turns and command results

use super::formatters::{chances_bar, spaced_board};
use crate::commands::{BenchmarkResult, SolveResult};
use crate::game::{CHANCES, GameOutcome, TurnReport};
use colored::Colorize;

/// Print the board and chance count after a turn
pub fn print_turn(report: &TurnReport) {
    println!("Secret word: {}", report.board);
    println!(
        "The guesser has {} remaining {}\n",
        report.remaining_chances,
        chances_bar(report.remaining_chances, CHANCES).bright_black()
    );
}

/// Print the end-of-game banner
pub fn print_outcome(outcome: &GameOutcome) {
    match outcome {
        GameOutcome::Won { board, .. } => {
            println!("\n{}", "The guesser wins!".green().bold());
            println!("Secret word: {board}");
        }
        GameOutcome::Lost { secret, .. } => {
            println!("\n{}", "The guesser loses!".red().bold());
            println!("Secret word: {}", secret.as_deref().unwrap_or("?"));
        }
    }
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        let turn = i + 1;
        let letter = step.letter.to_string().to_uppercase();
        let letter = if step.indices.is_empty() {
            letter.red()
        } else {
            letter.green()
        };
        println!("\nTurn {turn}: {letter}  {}", spaced_board(&step.board));

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            let ranking = step
                .top_letters
                .iter()
                .map(|(letter, total)| format!("{letter}:{total}"))
                .collect::<Vec<_>>()
                .join(" ");
            println!("  Top:        {}", ranking.as_str().bright_black());
            println!("  Hidden:     {}", step.board.hidden_count());
            println!(
                "  Chances:    {} {}",
                chances_bar(step.remaining_chances, CHANCES),
                step.remaining_chances
            );
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!(
                "✅ Solved in {} guesses with {} misses!",
                result.guesses.len(),
                result.misses()
            )
            .green()
            .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Out of chances after {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate() * 100.0)
            .bright_yellow()
            .bold()
    );
    println!("   Wins / losses:    {} / {}", result.wins, result.losses);
    if result.errors > 0 {
        println!(
            "   Abandoned:        {}",
            result.errors.to_string().red()
        );
    }
    println!("   Average misses:   {:.2}", result.average_misses);
    println!("   Average turns:    {:.2}", result.average_turns);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Misses per game:".bright_cyan().bold());
    let finished = (result.wins + result.losses).max(1);
    for (&misses, &count) in &result.distribution {
        let pct = (count as f64 / finished as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {misses:2}: {bar} {count:4} ({pct:5.1}%)");
    }

    if !result.failed_words.is_empty() {
        println!("\n{}", "Not solved:".yellow());
        for word in result.failed_words.iter().take(20) {
            println!("   {word}");
        }
    }
}
