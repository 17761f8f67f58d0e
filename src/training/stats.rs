//! Outcome counts for a run of episodes.

use serde::{Deserialize, Serialize};

use crate::core::Player;
use crate::rules::GameResult;

/// Counts collected while the driver plays episodes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaySummary {
    /// Episodes finished.
    pub episodes: usize,

    /// Episodes won by the X seat.
    pub x_wins: usize,

    /// Episodes won by the O seat.
    pub o_wins: usize,

    /// Episodes ending in a full board with no line.
    pub draws: usize,

    /// Moves applied across all finished episodes.
    pub total_moves: usize,
}

impl PlaySummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one finished episode. In-progress results are ignored.
    pub fn record(&mut self, result: GameResult, moves: usize) {
        match result {
            GameResult::Winner(Player::X) => self.x_wins += 1,
            GameResult::Winner(Player::O) => self.o_wins += 1,
            GameResult::Draw => self.draws += 1,
            GameResult::InProgress => return,
        }
        self.episodes += 1;
        self.total_moves += moves;
    }

    /// Wins for `player`.
    #[must_use]
    pub fn wins(&self, player: Player) -> usize {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    #[must_use]
    pub fn win_rate(&self, player: Player) -> f64 {
        self.rate(self.wins(player))
    }

    #[must_use]
    pub fn draw_rate(&self) -> f64 {
        self.rate(self.draws)
    }

    #[must_use]
    pub fn average_game_length(&self) -> f64 {
        self.rate(self.total_moves)
    }

    fn rate(&self, count: usize) -> f64 {
        if self.episodes == 0 {
            0.0
        } else {
            count as f64 / self.episodes as f64
        }
    }
}
