//! The interface the driver uses to talk to a seat.

use crate::core::{Board, BoardHash, Coord, Player};
use crate::error::PlayError;

use super::value_table::ValueTable;

/// A participant in an episode.
///
/// The driver calls these in a fixed rhythm: `choose_action` on the acting
/// seat, `record_visited` with the hash of the resulting board, and at the
/// end of the episode `propagate_reward` followed by `end_episode` on both
/// seats. Agents without learning state keep the default no-ops.
pub trait Agent {
    /// Display name, also used for policy file names.
    fn name(&self) -> &str;

    /// Pick one of `moves` for `symbol` on `board`.
    ///
    /// `moves` is row-major and never contains an occupied cell. The
    /// returned coordinate must be an element of `moves`.
    fn choose_action(
        &mut self,
        moves: &[Coord],
        board: &Board,
        symbol: Player,
    ) -> Result<Coord, PlayError>;

    /// Remember a board this agent produced during the current episode.
    fn record_visited(&mut self, _hash: BoardHash) {}

    /// Back up the terminal reward over the states visited this episode.
    fn propagate_reward(&mut self, _reward: f64) {}

    /// Forget the current episode's trajectory.
    fn end_episode(&mut self) {}

    /// The agent's value table, if it learns one.
    fn value_table(&self) -> Option<&ValueTable> {
        None
    }
}

impl<A: Agent + ?Sized> Agent for Box<A> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn choose_action(
        &mut self,
        moves: &[Coord],
        board: &Board,
        symbol: Player,
    ) -> Result<Coord, PlayError> {
        (**self).choose_action(moves, board, symbol)
    }

    fn record_visited(&mut self, hash: BoardHash) {
        (**self).record_visited(hash);
    }

    fn propagate_reward(&mut self, reward: f64) {
        (**self).propagate_reward(reward);
    }

    fn end_episode(&mut self) {
        (**self).end_episode();
    }

    fn value_table(&self) -> Option<&ValueTable> {
        (**self).value_table()
    }
}
