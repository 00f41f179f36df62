//! Game rules: turn order, move generation and terminal detection

use serde::{Deserialize, Serialize};

use super::{
    board::{Board, Cell, Move, Player},
    lines::Line,
};
use crate::error::{Error, IllegalMoveReason};

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl<const N: usize> Board<N> {
    /// The player to move. X opens, so X moves whenever the mark counts are
    /// equal and O moves otherwise.
    pub fn turn(&self) -> Player {
        if self.count(Cell::X) == self.count(Cell::O) {
            Player::X
        } else {
            Player::O
        }
    }

    /// Every empty cell, in row-major order. Empty only for a full board.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.iter()
            .filter(|&(_, cell)| cell == Cell::Empty)
            .map(|(mv, _)| mv)
            .collect()
    }

    /// Place the mark of the player to move at `mv` and return the new board.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IllegalMove`] if `mv` is off the board or its cell is
    /// already occupied.
    pub fn apply_move(&self, mv: Move) -> Result<Self, Error> {
        let reject = |reason| Error::IllegalMove {
            row: mv.row,
            col: mv.col,
            reason,
        };

        match self.get(mv.row, mv.col) {
            None => Err(reject(IllegalMoveReason::OutOfBounds)),
            Some(Cell::Empty) => Ok(self.with_mark(mv, self.turn().mark())),
            Some(_) => Err(reject(IllegalMoveReason::Occupied)),
        }
    }

    /// The first fully claimed line, checking rows, then columns, then the
    /// diagonals.
    pub fn winning_line(&self) -> Option<(Line, Player)> {
        Line::all(N).find_map(|line| line.owner(self).map(|player| (line, player)))
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        self.winning_line().map(|(_, player)| player)
    }

    /// Check if the game is over (win or full board)
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.count(Cell::Empty) == 0
    }

    /// +1 if X has won, -1 if O has won, 0 otherwise
    pub fn utility(&self) -> i32 {
        match self.winner() {
            Some(Player::X) => 1,
            Some(Player::O) => -1,
            None => 0,
        }
    }

    /// The result of the game, or `None` while it is still in progress
    pub fn outcome(&self) -> Option<GameOutcome> {
        if let Some(player) = self.winner() {
            Some(GameOutcome::Win(player))
        } else if self.is_terminal() {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Board3;

    fn play(moves: &[(usize, usize)]) -> Board3 {
        moves.iter().fold(Board3::new(), |board, &mv| {
            board.apply_move(mv.into()).unwrap()
        })
    }

    #[test]
    fn test_turn() {
        let board = Board3::new();
        assert_eq!(board.turn(), Player::X);

        let board = board.apply_move(Move::new(1, 1)).unwrap();
        assert_eq!(board.turn(), Player::O);

        let board = board.apply_move(Move::new(0, 0)).unwrap();
        assert_eq!(board.turn(), Player::X);
    }

    #[test]
    fn test_apply_move() {
        let board = Board3::new();

        let new_board = board.apply_move(Move::new(1, 1)).unwrap();
        assert_eq!(new_board.get(1, 1), Some(Cell::X));
        assert_eq!(board.get(1, 1), Some(Cell::Empty));

        // Move on occupied cell
        let err = new_board.apply_move(Move::new(1, 1)).unwrap_err();
        assert!(matches!(
            err,
            Error::IllegalMove {
                row: 1,
                col: 1,
                reason: IllegalMoveReason::Occupied
            }
        ));
        assert!(err.to_string().contains("occupied"));
    }

    #[test]
    fn test_apply_move_out_of_bounds() {
        let board = Board3::new();
        for mv in [Move::new(3, 0), Move::new(0, 3), Move::new(7, 9)] {
            let err = board.apply_move(mv).unwrap_err();
            assert!(matches!(
                err,
                Error::IllegalMove {
                    reason: IllegalMoveReason::OutOfBounds,
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_legal_moves() {
        let board = Board3::new();
        let moves = board.legal_moves();
        assert_eq!(moves.len(), 9);
        assert_eq!(moves[0], Move::new(0, 0));
        assert_eq!(moves[8], Move::new(2, 2));

        let board = board.apply_move(Move::new(0, 0)).unwrap();
        assert_eq!(board.legal_moves().len(), 8);
        assert!(!board.legal_moves().contains(&Move::new(0, 0)));
    }

    #[test]
    fn test_legal_moves_full_board() {
        let board: Board3 = "XOX/XOO/OXX".parse().unwrap();
        assert!(board.legal_moves().is_empty());
        assert!(board.is_terminal());
    }

    #[test]
    fn test_win_detection_horizontal() {
        // X wins on top row
        let board = play(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert!(board.is_terminal());
        assert_eq!(board.winner(), Some(Player::X));
        assert_eq!(board.winning_line(), Some((Line::Row(0), Player::X)));
        assert_eq!(board.utility(), 1);
    }

    #[test]
    fn test_win_detection_vertical() {
        // O wins on middle column
        let board = play(&[(0, 0), (0, 1), (0, 2), (1, 1), (1, 2), (2, 1)]);
        assert!(board.is_terminal());
        assert_eq!(board.winner(), Some(Player::O));
        assert_eq!(board.winning_line(), Some((Line::Column(1), Player::O)));
        assert_eq!(board.utility(), -1);
        assert_eq!(board.outcome(), Some(GameOutcome::Win(Player::O)));
    }

    #[test]
    fn test_win_detection_diagonals() {
        let board: Board3 = "XO./OX./..X".parse().unwrap();
        assert_eq!(board.winning_line(), Some((Line::Diagonal, Player::X)));

        let board: Board3 = "XXO/XO./O..".parse().unwrap();
        assert_eq!(board.winning_line(), Some((Line::AntiDiagonal, Player::O)));
    }

    #[test]
    fn test_winning_line_prefers_rows() {
        // Malformed board with an X row and an O column; rows are checked first
        let board: Board3 = "XXX/O../O..".parse().unwrap();
        assert_eq!(board.winner(), Some(Player::X));

        let board: Board3 = "O../O../OXX".parse().unwrap();
        assert_eq!(board.winning_line(), Some((Line::Column(0), Player::O)));
    }

    #[test]
    fn test_won_board_still_lists_empty_cells() {
        let board: Board3 = "XXX/OO./...".parse().unwrap();
        assert!(board.is_terminal());
        assert_eq!(board.legal_moves().len(), 4);
    }

    #[test]
    fn test_draw_detection() {
        // Classic draw game
        let board = play(&[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (2, 0),
            (1, 2),
            (2, 2),
            (2, 1),
        ]);
        assert!(board.is_terminal());
        assert_eq!(board.winner(), None);
        assert_eq!(board.utility(), 0);
        assert_eq!(board.outcome(), Some(GameOutcome::Draw));
    }

    #[test]
    fn test_in_progress_has_no_outcome() {
        let board = play(&[(1, 1), (0, 0)]);
        assert!(!board.is_terminal());
        assert_eq!(board.outcome(), None);
        assert_eq!(board.utility(), 0);
    }

    #[test]
    fn test_four_by_four_needs_full_line() {
        let board: Board<4> = "XXX./OOO./..../....".parse().unwrap();
        assert_eq!(board.winner(), None);
        assert!(!board.is_terminal());

        let board = board.apply_move(Move::new(0, 3)).unwrap();
        assert_eq!(board.winner(), Some(Player::X));
    }
}
