//! Terminal-state detection.
//!
//! Lines are checked in a fixed order so that results are deterministic even
//! on boards that legal play cannot reach:
//! - each row, top to bottom (X before O per row)
//! - each column, left to right (X before O per column)
//! - the two diagonals, X on either diagonal before O on either diagonal
//!
//! If no line is complete, a full board is a draw.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Coord, Player, SIZE};

/// Line sum that marks a completed line for X. O completes at the negation.
const WIN_SUM: i8 = SIZE as i8;

pub const ROWS: [[Coord; SIZE]; SIZE] = [
    [Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)],
    [Coord::new(1, 0), Coord::new(1, 1), Coord::new(1, 2)],
    [Coord::new(2, 0), Coord::new(2, 1), Coord::new(2, 2)],
];

pub const COLUMNS: [[Coord; SIZE]; SIZE] = [
    [Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 0)],
    [Coord::new(0, 1), Coord::new(1, 1), Coord::new(2, 1)],
    [Coord::new(0, 2), Coord::new(1, 2), Coord::new(2, 2)],
];

pub const DIAGONALS: [[Coord; SIZE]; 2] = [
    [Coord::new(0, 0), Coord::new(1, 1), Coord::new(2, 2)],
    [Coord::new(0, 2), Coord::new(1, 1), Coord::new(2, 0)],
];

/// Result of evaluating a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// A player completed a line.
    Winner(Player),
    /// Board full, no completed line.
    Draw,
    /// Moves remain and nobody has won.
    InProgress,
}

impl GameResult {
    /// Whether the episode is over.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameResult::InProgress)
    }

    /// The winning player, if any.
    #[must_use]
    pub fn winner(self) -> Option<Player> {
        match self {
            GameResult::Winner(p) => Some(p),
            _ => None,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(self, player: Player) -> bool {
        self.winner() == Some(player)
    }
}

fn completed_by(sum: i8) -> Option<Player> {
    if sum == WIN_SUM {
        Some(Player::X)
    } else if sum == -WIN_SUM {
        Some(Player::O)
    } else {
        None
    }
}

/// Evaluate `board` in the fixed line order.
#[must_use]
pub fn evaluate(board: &Board) -> GameResult {
    for line in ROWS.iter().chain(COLUMNS.iter()) {
        if let Some(player) = completed_by(board.line_sum(line)) {
            return GameResult::Winner(player);
        }
    }

    let diagonal_sums = DIAGONALS.map(|line| board.line_sum(&line));
    if diagonal_sums.contains(&WIN_SUM) {
        return GameResult::Winner(Player::X);
    }
    if diagonal_sums.contains(&-WIN_SUM) {
        return GameResult::Winner(Player::O);
    }

    if board.is_full() {
        GameResult::Draw
    } else {
        GameResult::InProgress
    }
}
