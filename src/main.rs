//! Hangman Solver - CLI
//!
//! Play Hangman against the computer, or watch it guess.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use hangman_solver::{
    commands::{HumanRole, PlayConfig, run_benchmark, run_play, solve_word},
    core::Word,
    output::{print_benchmark_result, print_solve_result},
    player::StdinPrompt,
    wordlists::{Dictionary, loader::load_or_default},
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "hangman_solver",
    about = "Hangman with a frequency-driven computer guesser",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line (default: built-in dictionary)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Seed for the computer referee's word choice
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// More log output (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum RoleArg {
    /// You guess the computer's word
    Guess,
    /// The computer guesses your word
    Referee,
}

impl From<RoleArg> for HumanRole {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::Guess => Self::Guesser,
            RoleArg::Referee => Self::Referee,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive game (default)
    Play {
        /// Your role; asked at startup when omitted
        #[arg(short, long, value_enum)]
        role: Option<RoleArg>,
    },

    /// Watch the computer guess a specific word
    Solve {
        /// The secret word
        word: String,

        /// Show candidate counts and chances for every turn
        #[arg(long)]
        detail: bool,
    },

    /// Play the computer against many dictionary words
    Benchmark {
        /// Number of words to test (default: all)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Only test words of this length
        #[arg(short, long)]
        length: Option<usize>,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let dictionary = load_or_default(cli.wordlist.as_deref()).with_context(|| {
        cli.wordlist.as_ref().map_or_else(
            || "loading built-in dictionary".to_string(),
            |p| format!("loading word list {}", p.display()),
        )
    })?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { role: None });

    match command {
        Commands::Play { role } => run_play_command(&dictionary, role, cli.seed),
        Commands::Solve { word, detail } => run_solve_command(&dictionary, &word, detail),
        Commands::Benchmark { count, length } => {
            run_benchmark_command(&dictionary, count, length);
            Ok(())
        }
    }
}

fn run_play_command(
    dictionary: &Dictionary,
    role: Option<RoleArg>,
    seed: Option<u64>,
) -> Result<()> {
    let config = PlayConfig {
        role: role.map(HumanRole::from),
        seed,
    };
    run_play(dictionary, config, StdinPrompt)?;
    Ok(())
}

fn run_solve_command(dictionary: &Dictionary, word: &str, detail: bool) -> Result<()> {
    let result = solve_word(word, dictionary).with_context(|| format!("solving \"{word}\""))?;
    print_solve_result(&result, detail);
    Ok(())
}

fn run_benchmark_command(dictionary: &Dictionary, count: Option<usize>, length: Option<usize>) {
    let targets: Vec<Word> = dictionary
        .words()
        .iter()
        .filter(|w| length.is_none_or(|len| w.len() == len))
        .take(count.unwrap_or(usize::MAX))
        .cloned()
        .collect();

    println!("Running benchmark on {} words...", targets.len());
    let result = run_benchmark(dictionary, &targets, true);
    print_benchmark_result(&result);
}
