//! The 3×3 grid, its coordinates, and the canonical board hash.
//!
//! Cells are traversed row-major everywhere: move enumeration, hashing and
//! parsing all visit `(0, 0), (0, 1), ..., (2, 2)` in that order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::Player;
use crate::error::{InputError, MoveError};
use crate::rules::{self, GameResult};

/// Side length of the board.
pub const SIZE: usize = 3;

/// Number of cells on the board.
pub const CELLS: usize = SIZE * SIZE;

/// Empty-cell coordinates in row-major order. Never spills to the heap.
pub type Moves = SmallVec<[Coord; CELLS]>;

/// A `(row, col)` position. Not necessarily on the board; see [`Coord::in_bounds`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether this coordinate lies on the 3×3 grid.
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.row < SIZE && self.col < SIZE
    }

    /// Row-major index in `0..9`. Only meaningful when in bounds.
    #[must_use]
    pub const fn index(self) -> usize {
        self.row * SIZE + self.col
    }

    /// Inverse of [`Coord::index`].
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self::new(index / SIZE, index % SIZE)
    }

    /// Every on-board coordinate, row-major.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..CELLS).map(Coord::from_index)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// Contents of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    /// Numeric encoding: +1 for X, -1 for O, 0 for empty.
    #[must_use]
    pub const fn value(self) -> i8 {
        match self {
            Cell::Empty => 0,
            Cell::X => 1,
            Cell::O => -1,
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The player owning this cell, if any.
    #[must_use]
    pub const fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }

    /// Character used in the canonical hash.
    const fn hash_char(self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    /// Character used when drawing the board.
    const fn display_char(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }
}

/// Canonical value-table key: the full board contents, row-major.
///
/// Depends on cell contents only, so two boards with identical cells hash
/// identically no matter whose turn it is or how they were reached.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoardHash(String);

impl BoardHash {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BoardHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The 3×3 grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a board from explicit rows.
    #[must_use]
    pub const fn from_rows(cells: [[Cell; SIZE]; SIZE]) -> Self {
        Self { cells }
    }

    /// Get the cell at `coord`, or `None` if it is off the board.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        coord
            .in_bounds()
            .then(|| self.cells[coord.row][coord.col])
    }

    /// Place `player`'s mark at `coord`.
    pub fn place(&mut self, coord: Coord, player: Player) -> Result<(), MoveError> {
        match self.get(coord) {
            None => Err(MoveError::OutOfRange(coord)),
            Some(Cell::Empty) => {
                self.cells[coord.row][coord.col] = player.to_cell();
                Ok(())
            }
            Some(_) => Err(MoveError::Occupied(coord)),
        }
    }

    /// Copy of this board with `player`'s mark placed at `coord`.
    pub fn with_move(&self, coord: Coord, player: Player) -> Result<Board, MoveError> {
        let mut next = *self;
        next.place(coord, player)?;
        Ok(next)
    }

    /// Empty cells in row-major order.
    #[must_use]
    pub fn available_moves(&self) -> Moves {
        Coord::all()
            .filter(|&c| self.cells[c.row][c.col].is_empty())
            .collect()
    }

    /// Occupied cells in row-major order.
    pub fn occupied_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        Coord::all().filter(move |&c| !self.cells[c.row][c.col].is_empty())
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|c| !c.is_empty())
    }

    /// Sum of the numeric cell encoding along `line`.
    #[must_use]
    pub fn line_sum(&self, line: &[Coord; SIZE]) -> i8 {
        line.iter().map(|c| self.cells[c.row][c.col].value()).sum()
    }

    /// Result of the position, without touching any state flags.
    #[must_use]
    pub fn evaluate(&self) -> GameResult {
        rules::evaluate(self)
    }

    /// Canonical hash of the full board contents.
    #[must_use]
    pub fn canonical_hash(&self) -> BoardHash {
        BoardHash(self.cells.iter().flatten().map(|c| c.hash_char()).collect())
    }
}

/// Parses nine cells row-major from `X`/`x`, `O`/`o`, and `.`/`-`/`_` for
/// empty. Whitespace and `|` separators are ignored.
impl FromStr for Board {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|')
            .collect();
        if symbols.len() != CELLS {
            return Err(InputError::Parse(s.to_string()));
        }

        let mut board = Board::new();
        for (i, symbol) in symbols.into_iter().enumerate() {
            let cell = match symbol {
                'X' | 'x' => Cell::X,
                'O' | 'o' => Cell::O,
                '.' | '-' | '_' => Cell::Empty,
                _ => return Err(InputError::Parse(s.to_string())),
            };
            let c = Coord::from_index(i);
            board.cells[c.row][c.col] = cell;
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            writeln!(f, "-------------")?;
            write!(f, "|")?;
            for cell in row {
                write!(f, " {} |", cell.display_char())?;
            }
            writeln!(f)?;
        }
        write!(f, "-------------")
    }
}
