//! oxo CLI - tic-tac-toe outcome oracle
//!
//! - Ask the minimax oracle for the best move of a board
//! - Score every legal move of a position
//! - Run matches between strategies
//! - Play against the computer

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "oxo")]
#[command(version, about = "Tic-tac-toe outcome oracle", long_about = None)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the optimal move for a board
    BestMove(oxo::cli::commands::best_move::BestMoveArgs),

    /// Score every legal move of a board
    Analyze(oxo::cli::commands::analyze::AnalyzeArgs),

    /// Play a match between two strategies
    Match(oxo::cli::commands::matches::MatchArgs),

    /// Play against the computer
    Play(oxo::cli::commands::play::PlayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::BestMove(args) => oxo::cli::commands::best_move::execute(args),
        Commands::Analyze(args) => oxo::cli::commands::analyze::execute(args),
        Commands::Match(args) => oxo::cli::commands::matches::execute(args),
        Commands::Play(args) => oxo::cli::commands::play::execute(args),
    }
}
