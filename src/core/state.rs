//! Live game state shared by both seats.
//!
//! One `BoardState` is created per session and reused across episodes via
//! [`BoardState::reset`]. The driver is its only writer.

use super::board::{Board, BoardHash, Cell, Coord, Moves};
use super::player::Player;
use crate::error::MoveError;
use crate::rules::GameResult;

/// Board, whose turn it is, and the terminal flag.
#[derive(Clone, Debug)]
pub struct BoardState {
    board: Board,
    active_player: Player,
    terminal: bool,
    /// Cleared on every mutation, filled on the next hash request.
    cached_hash: Option<BoardHash>,
}

impl BoardState {
    /// Empty board with X to move.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            active_player: Player::X,
            terminal: false,
            cached_hash: None,
        }
    }

    /// State with arbitrary contents, `active_player` to move.
    ///
    /// The terminal flag starts cleared; call [`BoardState::evaluate_winner`]
    /// to set it.
    #[must_use]
    pub fn from_board(board: Board, active_player: Player) -> Self {
        Self {
            board,
            active_player,
            terminal: false,
            cached_hash: None,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Read-only cell accessor for renderers.
    #[must_use]
    pub fn cell(&self, coord: Coord) -> Option<Cell> {
        self.board.get(coord)
    }

    #[must_use]
    pub fn active_player(&self) -> Player {
        self.active_player
    }

    /// Whether the last call to `evaluate_winner` found a terminal result.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Empty cells in row-major order. Empty means the board is full.
    #[must_use]
    pub fn available_moves(&self) -> Moves {
        self.board.available_moves()
    }

    /// Occupied cells in row-major order.
    pub fn occupied_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.board.occupied_cells()
    }

    /// Place the active player's mark at `coord` and pass the turn.
    pub fn apply_move(&mut self, coord: Coord) -> Result<(), MoveError> {
        self.board.place(coord, self.active_player)?;
        self.active_player = self.active_player.other();
        self.cached_hash = None;
        Ok(())
    }

    /// Evaluate the board and update the terminal flag to match.
    pub fn evaluate_winner(&mut self) -> GameResult {
        let result = self.board.evaluate();
        self.terminal = result.is_terminal();
        result
    }

    /// Canonical hash of the board contents, cached until the next move.
    pub fn canonical_hash(&mut self) -> BoardHash {
        self.cached_hash
            .get_or_insert_with(|| self.board.canonical_hash())
            .clone()
    }

    /// Clear the board, give X the move, and drop the terminal flag and cache.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.active_player = Player::X;
        self.terminal = false;
        self.cached_hash = None;
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}
