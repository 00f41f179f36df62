//! Minimax search with alpha-beta pruning
//!
//! The tree is always searched to terminal positions; there is no depth limit
//! and no heuristic evaluation. Pruning only skips subtrees that cannot change
//! the minimax value.

use tracing::debug;

use super::SearchResult;
use crate::tictactoe::{Board, Move, Player};

/// Bound wider than any utility
const INFINITY: i32 = i32::MAX;

/// Alpha-beta searcher
///
/// Moves are tried in row-major order and a move only replaces the current
/// best when it is strictly better, so among equally good moves the first one
/// in row-major order is returned.
#[derive(Debug, Default)]
pub struct AlphaBeta {
    nodes: u64,
}

impl AlphaBeta {
    pub fn new() -> Self {
        Self::default()
    }

    /// Positions visited since this searcher was created
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Search `board` to the end of the game for the side to move.
    pub fn search<const N: usize>(&mut self, board: &Board<N>) -> SearchResult {
        let start = self.nodes;
        let maximizing = board.turn() == Player::X;
        let (best_move, value) = self.alphabeta(board, -INFINITY, INFINITY, maximizing);

        let result = SearchResult {
            best_move,
            value,
            nodes: self.nodes - start,
        };
        debug!(
            board = %board.encode(),
            best_move = ?result.best_move,
            value = result.value,
            nodes = result.nodes,
            "alpha-beta search finished"
        );
        result
    }

    fn alphabeta<const N: usize>(
        &mut self,
        board: &Board<N>,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> (Option<Move>, i32) {
        self.nodes += 1;

        if board.is_terminal() {
            return (None, board.utility());
        }

        let mark = board.turn().mark();
        let mut best_move = None;
        let mut best_value = if maximizing { -INFINITY } else { INFINITY };

        for mv in board.legal_moves() {
            let child = board.with_mark(mv, mark);
            let (_, value) = self.alphabeta(&child, alpha, beta, !maximizing);

            if maximizing {
                if value > best_value {
                    best_value = value;
                    best_move = Some(mv);
                }
                if best_value >= beta {
                    break; // Beta cutoff
                }
                alpha = alpha.max(best_value);
            } else {
                if value < best_value {
                    best_value = value;
                    best_move = Some(mv);
                }
                if best_value <= alpha {
                    break; // Alpha cutoff
                }
                beta = beta.min(best_value);
            }
        }

        (best_move, best_value)
    }
}

/// Search `board` with a fresh [`AlphaBeta`] searcher.
pub fn search<const N: usize>(board: &Board<N>) -> SearchResult {
    AlphaBeta::new().search(board)
}

/// The optimal move for the side to move, or `None` if the game is over.
pub fn best_move<const N: usize>(board: &Board<N>) -> Option<Move> {
    search(board).best_move
}
