//! Best-move command - Solve a single position

use anyhow::Result;
use clap::Parser;
use tracing::info;

use super::parse_state;
use crate::{
    cli::output::{describe_value, format_number, print_board, print_kv, print_section},
    search::{SearchConfig, search_with},
};

#[derive(Parser, Debug)]
#[command(about = "Find the optimal move for the side to move")]
pub struct BestMoveArgs {
    /// Board to analyze, e.g. "XX./OO./..." (defaults to the empty board)
    #[arg(long)]
    pub state: Option<String>,

    /// Use plain minimax instead of alpha-beta
    #[arg(long)]
    pub no_pruning: bool,
}

pub fn execute(args: BestMoveArgs) -> Result<()> {
    let board = parse_state(args.state.as_deref())?;
    let config = SearchConfig::new().with_pruning(!args.no_pruning);
    info!(board = %board.encode(), pruning = config.pruning, "solving position");

    let result = search_with(&board, &config);

    print_section("Position");
    print_board(&board);

    print_section("Search");
    match result.best_move {
        Some(mv) => {
            print_kv("To move", &board.turn().to_string());
            print_kv("Best move", &mv.to_string());
        }
        None => print_kv("Best move", "none (game is over)"),
    }
    print_kv(
        "Value",
        &format!("{} ({})", result.value, describe_value(result.value)),
    );
    print_kv(
        "Strategy",
        if config.pruning {
            "alpha-beta"
        } else {
            "plain minimax"
        },
    );
    print_kv("Nodes", &format_number(result.nodes));

    Ok(())
}
