//! Unpruned minimax with a position cache
//!
//! Serves as the reference the alpha-beta searcher is checked against, and
//! reports the value of every legal move rather than just the best one.

use std::collections::HashMap;

use super::SearchResult;
use crate::tictactoe::{Board, Move, Player};

/// Plain minimax solver (no pruning)
#[derive(Debug, Default)]
pub struct MinimaxSolver<const N: usize> {
    cache: HashMap<Board<N>, i32>,
    nodes: u64,
}

impl<const N: usize> MinimaxSolver<N> {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            nodes: 0,
        }
    }

    /// Number of distinct positions solved so far
    pub fn cached_positions(&self) -> usize {
        self.cache.len()
    }

    /// Minimax value of `board`: +1 X wins, -1 O wins, 0 draw.
    pub fn value(&mut self, board: &Board<N>) -> i32 {
        if let Some(&value) = self.cache.get(board) {
            return value;
        }
        self.nodes += 1;

        let value = if board.is_terminal() {
            board.utility()
        } else {
            let to_move = board.turn();
            let mark = to_move.mark();
            let children = board
                .legal_moves()
                .into_iter()
                .map(|mv| self.value(&board.with_mark(mv, mark)));
            let best = match to_move {
                Player::X => children.max(),
                Player::O => children.min(),
            };
            best.unwrap_or_else(|| board.utility())
        };

        self.cache.insert(*board, value);
        value
    }

    /// Evaluate every legal move in the given state and return its minimax
    /// value, in row-major order. Empty for terminal boards.
    pub fn evaluate_moves(&mut self, board: &Board<N>) -> Vec<(Move, i32)> {
        if board.is_terminal() {
            return Vec::new();
        }

        let mark = board.turn().mark();
        board
            .legal_moves()
            .into_iter()
            .map(|mv| (mv, self.value(&board.with_mark(mv, mark))))
            .collect()
    }

    /// Solve `board`, picking the first strictly best move in row-major
    /// order.
    pub fn search(&mut self, board: &Board<N>) -> SearchResult {
        let start = self.nodes;
        let to_move = board.turn();

        let mut best: Option<(Move, i32)> = None;
        for (mv, value) in self.evaluate_moves(board) {
            let better = match (best, to_move) {
                (None, _) => true,
                (Some((_, current)), Player::X) => value > current,
                (Some((_, current)), Player::O) => value < current,
            };
            if better {
                best = Some((mv, value));
            }
        }

        let value = match best {
            Some((_, value)) => value,
            None => self.value(board),
        };

        SearchResult {
            best_move: best.map(|(mv, _)| mv),
            value,
            nodes: self.nodes - start,
        }
    }
}
