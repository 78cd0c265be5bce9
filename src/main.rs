//! Bulls and Cows Solver - CLI
//!
//! Non-interactive access to feedback scoring, candidate filtering and
//! minimax guess selection. Pools are passed as word arguments.

use anyhow::Result;
use bulls_cows::{
    commands::{analyze_guess, filter_pool, score_words, select_from},
    output::{print_analysis_result, print_filter_result, print_score_result, print_select_result},
    solver::{
        MinimaxConfig,
        config::{LARGE_POOL_LIMIT, SAMPLE_SIZE, SMALL_POOL_LIMIT},
    },
};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "bulls_cows",
    about = "Bulls and Cows solver using bounded minimax guess selection",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Pools at or below this size return their first word
    #[arg(long, global = true, default_value_t = SMALL_POOL_LIMIT)]
    small_pool_limit: usize,

    /// Pools above this size return their first word
    #[arg(long, global = true, default_value_t = LARGE_POOL_LIMIT)]
    large_pool_limit: usize,

    /// Number of leading pool words tried as guesses
    #[arg(long, global = true, default_value_t = SAMPLE_SIZE)]
    sample_size: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a guess against a secret
    Score {
        /// The guessed word
        guess: String,

        /// The secret word
        secret: String,
    },

    /// Keep the words consistent with observed feedback
    Filter {
        /// The guessed word
        guess: String,

        /// Observed feedback: "1,2", "1b2c" or "win"
        feedback: String,

        /// Candidate pool, in order
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Suggest the next guess for a pool
    Select {
        /// Candidate pool, in order
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Show how a guess partitions a pool
    Analyze {
        /// Word to analyze
        guess: String,

        /// Candidate pool, in order
        #[arg(required = true)]
        words: Vec<String>,
    },
}

impl Cli {
    const fn minimax_config(&self) -> MinimaxConfig {
        MinimaxConfig::new(
            self.small_pool_limit,
            self.large_pool_limit,
            self.sample_size,
        )
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.minimax_config();

    match cli.command {
        Commands::Score { guess, secret } => run_score_command(&guess, &secret),
        Commands::Filter {
            guess,
            feedback,
            words,
        } => run_filter_command(&guess, &feedback, &words),
        Commands::Select { words } => run_select_command(&words, config),
        Commands::Analyze { guess, words } => run_analyze_command(&guess, &words),
    }
}

fn run_score_command(guess: &str, secret: &str) -> Result<()> {
    let result = score_words(guess, secret).map_err(|e| anyhow::anyhow!(e))?;
    print_score_result(&result);
    Ok(())
}

fn run_filter_command(guess: &str, feedback: &str, words: &[String]) -> Result<()> {
    let result = filter_pool(guess, feedback, words).map_err(|e| anyhow::anyhow!(e))?;
    print_filter_result(&result);
    Ok(())
}

fn run_select_command(words: &[String], config: MinimaxConfig) -> Result<()> {
    log::debug!("selecting from {} words with {config:?}", words.len());
    let result = select_from(words, config).map_err(|e| anyhow::anyhow!(e))?;
    print_select_result(&result);
    Ok(())
}

fn run_analyze_command(guess: &str, words: &[String]) -> Result<()> {
    let result = analyze_guess(guess, words).map_err(|e| anyhow::anyhow!(e))?;
    print_analysis_result(&result);
    Ok(())
}
