//! Winning line analysis

use std::fmt;

use super::{Board, Player};

/// A row, column or main diagonal of an N×N board.
///
/// Lines are not stored; each one names the N coordinates it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    Row(usize),
    Column(usize),
    /// Top-left to bottom-right
    Diagonal,
    /// Top-right to bottom-left
    AntiDiagonal,
}

impl Line {
    /// All lines of a `size`×`size` board: rows, then columns, then the two
    /// diagonals.
    pub fn all(size: usize) -> impl Iterator<Item = Line> {
        (0..size)
            .map(Line::Row)
            .chain((0..size).map(Line::Column))
            .chain([Line::Diagonal, Line::AntiDiagonal])
    }

    /// The `(row, col)` coordinates covered by this line
    pub fn coordinates(self, size: usize) -> impl Iterator<Item = (usize, usize)> {
        (0..size).map(move |i| match self {
            Line::Row(row) => (row, i),
            Line::Column(col) => (i, col),
            Line::Diagonal => (i, i),
            Line::AntiDiagonal => (i, size - 1 - i),
        })
    }

    /// The player holding every cell of this line, if any
    pub fn owner<const N: usize>(self, board: &Board<N>) -> Option<Player> {
        let mut coords = self.coordinates(N);
        let (row, col) = coords.next()?;
        let player = board.cell(row, col).player()?;
        let mark = player.mark();
        coords
            .all(|(r, c)| board.cell(r, c) == mark)
            .then_some(player)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Row(row) => write!(f, "row {row}"),
            Line::Column(col) => write!(f, "column {col}"),
            Line::Diagonal => write!(f, "diagonal"),
            Line::AntiDiagonal => write!(f, "anti-diagonal"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Board3;

    #[test]
    fn test_line_enumeration_order() {
        let lines: Vec<_> = Line::all(3).collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], Line::Row(0));
        assert_eq!(lines[3], Line::Column(0));
        assert_eq!(lines[6], Line::Diagonal);
        assert_eq!(lines[7], Line::AntiDiagonal);
    }

    #[test]
    fn test_coordinates() {
        let anti: Vec<_> = Line::AntiDiagonal.coordinates(3).collect();
        assert_eq!(anti, vec![(0, 2), (1, 1), (2, 0)]);

        let column: Vec<_> = Line::Column(1).coordinates(4).collect();
        assert_eq!(column, vec![(0, 1), (1, 1), (2, 1), (3, 1)]);
    }

    #[test]
    fn test_owner_horizontal() {
        let board: Board3 = "XXX/OO./...".parse().unwrap();
        assert_eq!(Line::Row(0).owner(&board), Some(Player::X));
        assert_eq!(Line::Row(1).owner(&board), None);
        assert_eq!(Line::Row(2).owner(&board), None);
    }

    #[test]
    fn test_owner_vertical_and_diagonal() {
        let board: Board3 = "O.X/OX./OX.".parse().unwrap();
        assert_eq!(Line::Column(0).owner(&board), Some(Player::O));
        assert_eq!(Line::AntiDiagonal.owner(&board), None);

        let board: Board3 = "X.O/.XO/..X".parse().unwrap();
        assert_eq!(Line::Diagonal.owner(&board), Some(Player::X));
    }

    #[test]
    fn test_display() {
        assert_eq!(Line::Row(2).to_string(), "row 2");
        assert_eq!(Line::AntiDiagonal.to_string(), "anti-diagonal");
    }
}
