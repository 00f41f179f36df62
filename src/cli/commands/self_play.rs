//! Self-play command - Let the solver play both sides

use anyhow::Result;
use clap::Parser;
use tracing::info;

use super::parse_state;
use crate::{
    cli::output::{describe_outcome, print_board, print_kv, print_section},
    search,
    tictactoe::{Board3, GameOutcome, Move},
};

#[derive(Parser, Debug)]
#[command(about = "Play optimal moves for both sides until the game ends")]
pub struct SelfPlayArgs {
    /// Starting board (defaults to the empty board)
    #[arg(long)]
    pub state: Option<String>,
}

/// Play `best_move` for both sides from `board`, returning the moves made and
/// the final position.
pub fn play_out(board: Board3) -> Result<(Vec<Move>, Board3)> {
    let mut board = board;
    let mut moves = Vec::new();
    while let Some(mv) = search::best_move(&board) {
        board = board.apply_move(mv)?;
        moves.push(mv);
    }
    Ok((moves, board))
}

pub fn execute(args: SelfPlayArgs) -> Result<()> {
    let start = parse_state(args.state.as_deref())?;
    let (moves, _) = play_out(start)?;

    let mut board = start;
    print_section("Start");
    print_board(&board);

    for (ply, mv) in moves.iter().enumerate() {
        let player = board.turn();
        board = board.apply_move(*mv)?;
        print_section(&format!("Ply {}: {player} plays {mv}", ply + 1));
        print_board(&board);
    }

    let outcome = board.outcome().unwrap_or(GameOutcome::Draw);
    info!(plies = moves.len(), ?outcome, "self-play finished");

    print_section("Result");
    print_kv("Outcome", &describe_outcome(outcome));
    if let Some((line, _)) = board.winning_line() {
        print_kv("Winning line", &line.to_string());
    }

    Ok(())
}
