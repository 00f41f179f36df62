//! noughts CLI - solve tic-tac-toe positions by exhaustive search

use anyhow::Result;
use clap::{Parser, Subcommand};
use noughts::cli::{commands, config::CommonConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "noughts")]
#[command(version, about = "Exhaustive alpha-beta solver for tic-tac-toe", long_about = None)]
struct Cli {
    #[command(flatten)]
    common: CommonConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the optimal move for a position
    BestMove(commands::best_move::BestMoveArgs),

    /// Show the value of every legal move
    Moves(commands::moves::MovesArgs),

    /// Let the solver play both sides
    SelfPlay(commands::self_play::SelfPlayArgs),

    /// Export the optimal policy to JSON
    Export(commands::export::ExportArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(cli.common.default_log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::BestMove(args) => commands::best_move::execute(args),
        Commands::Moves(args) => commands::moves::execute(args),
        Commands::SelfPlay(args) => commands::self_play::execute(args),
        Commands::Export(args) => commands::export::execute(args, cli.common.progress),
    }
}
