//! Board state representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// The player owning this mark, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game. X always moves first and is the maximizing side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// The mark this player places on the board
    pub fn mark(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mark().to_char())
    }
}

/// A 0-indexed `(row, col)` coordinate naming the cell to mark.
///
/// A move is only meaningful relative to the board it was generated from;
/// [`Board::apply_move`] re-validates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Move {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Snapshot of an N×N grid.
///
/// Boards are `Copy` values. The rules engine never mutates a board; applying a
/// move yields a new one, so a position can be shared freely across branches
/// of the search tree. Whose turn it is follows from the mark counts and is not
/// stored.
///
/// Serialized as its compact row-major string (see [`Board::encode`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Board<const N: usize> {
    cells: [[Cell; N]; N],
}

/// The canonical 3×3 tic-tac-toe board
pub type Board3 = Board<3>;

impl<const N: usize> Board<N> {
    /// Create the all-empty starting board
    pub const fn new() -> Self {
        Self {
            cells: [[Cell::Empty; N]; N],
        }
    }

    /// Build a board from explicit rows. No consistency checks are made.
    pub const fn from_cells(cells: [[Cell; N]; N]) -> Self {
        Self { cells }
    }

    /// The grid rows
    pub fn cells(&self) -> &[[Cell; N]; N] {
        &self.cells
    }

    /// Get the cell at `(row, col)`, or `None` when out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    pub(crate) fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Iterate over `(move, cell)` pairs in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Move, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, &cell)| (Move::new(row, col), cell))
        })
    }

    /// Count cells holding the given value
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == cell).count()
    }

    /// Number of marks placed so far
    pub fn occupied_count(&self) -> usize {
        N * N - self.count(Cell::Empty)
    }

    /// Place `mark` at `mv` without validation. Callers guarantee the move is
    /// in bounds and targets an empty cell.
    #[must_use = "with_mark returns a new board; the original is unchanged"]
    pub(crate) fn with_mark(&self, mv: Move, mark: Cell) -> Self {
        let mut next = *self;
        next.cells[mv.row][mv.col] = mark;
        next
    }

    /// Compact row-major encoding, e.g. `"XO..X...."`
    pub fn encode(&self) -> String {
        self.cells.iter().flatten().map(|c| c.to_char()).collect()
    }
}

impl<const N: usize> Default for Board<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Display for Board<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}

/// Parse a board from text.
///
/// Accepts exactly N² cell characters (`.`, `_`, `-` for empty; `X`/`x`;
/// `O`/`o`/`0`). Whitespace and `/` row separators are ignored, so
/// `"XX./OO./..."` and the multi-line [`Display`](fmt::Display) output both
/// parse.
impl<const N: usize> FromStr for Board<N> {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .collect();

        if chars.len() != N * N {
            return Err(crate::Error::InvalidBoardLength {
                expected: N * N,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [[Cell::Empty; N]; N];
        for (i, &c) in chars.iter().enumerate() {
            cells[i / N][i % N] =
                Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                    character: c,
                    position: i,
                    context: s.to_string(),
                })?;
        }

        Ok(Self { cells })
    }
}

impl<const N: usize> From<Board<N>> for String {
    fn from(board: Board<N>) -> Self {
        board.encode()
    }
}

impl<const N: usize> TryFrom<String> for Board<N> {
    type Error = crate::Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
