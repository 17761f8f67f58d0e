//! Tabular temporal-difference agent.
//!
//! The agent plays epsilon-greedy over the values of the boards its moves
//! would produce, records every board it produces during an episode, and at
//! the end of the episode backs the terminal reward up that trajectory from
//! the last state to the first.

use std::path::Path;

use crate::core::{Board, BoardHash, Coord, GameRng, Player};
use crate::error::{PersistenceError, PlayError};
use crate::persistence;

use super::config::TdConfig;
use super::traits::Agent;
use super::value_table::ValueTable;

/// Learning agent with a persistent value table.
#[derive(Clone, Debug)]
pub struct TdAgent {
    name: String,
    config: TdConfig,
    values: ValueTable,
    /// Hashes produced this episode, earliest first.
    trajectory: Vec<BoardHash>,
    rng: GameRng,
}

impl TdAgent {
    /// Create an agent with an empty table and an entropy-seeded RNG.
    pub fn new(name: impl Into<String>, config: TdConfig) -> Self {
        Self::with_rng(name, config, GameRng::from_entropy())
    }

    /// Create an agent with an explicit RNG, for reproducible runs.
    pub fn with_rng(name: impl Into<String>, config: TdConfig, rng: GameRng) -> Self {
        Self {
            name: name.into(),
            config,
            values: ValueTable::new(),
            trajectory: Vec::new(),
            rng,
        }
    }

    /// Replace the value table.
    #[must_use]
    pub fn with_values(mut self, values: ValueTable) -> Self {
        self.values = values;
        self
    }

    #[must_use]
    pub fn config(&self) -> &TdConfig {
        &self.config
    }

    /// Change the exploration rate, e.g. to play greedily after training.
    pub fn set_exploration_rate(&mut self, rate: f64) {
        self.config.exploration_rate = rate;
    }

    #[must_use]
    pub fn values(&self) -> &ValueTable {
        &self.values
    }

    /// Hashes recorded so far this episode, earliest first.
    #[must_use]
    pub fn trajectory(&self) -> &[BoardHash] {
        &self.trajectory
    }

    /// Highest-valued move, last one winning ties.
    fn greedy_action(&self, moves: &[Coord], board: &Board, symbol: Player) -> Option<Coord> {
        let mut best: Option<(Coord, f64)> = None;
        for &coord in moves {
            // Occupied or off-board candidates are skipped.
            let Ok(next) = board.with_move(coord, symbol) else {
                continue;
            };
            let value = self.values.get(&next.canonical_hash());
            if best.map_or(true, |(_, best_value)| value >= best_value) {
                best = Some((coord, value));
            }
        }
        best.map(|(coord, _)| coord)
    }

    /// Write the value table to `path`.
    pub fn save_policy(&self, path: &Path) -> Result<(), PersistenceError> {
        persistence::save(&self.values, path)
    }

    /// Replace the value table with the one stored at `path`.
    ///
    /// On failure the table is left empty and the error is returned.
    pub fn load_policy(&mut self, path: &Path) -> Result<(), PersistenceError> {
        match persistence::load(path) {
            Ok(values) => {
                self.values = values;
                Ok(())
            }
            Err(err) => {
                log::warn!(
                    "{}: could not load policy, starting from an empty table: {err}",
                    self.name
                );
                self.values = ValueTable::new();
                Err(err)
            }
        }
    }
}

impl Agent for TdAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_action(
        &mut self,
        moves: &[Coord],
        board: &Board,
        symbol: Player,
    ) -> Result<Coord, PlayError> {
        if moves.is_empty() {
            return Err(PlayError::NoAvailableMoves);
        }

        if self.rng.gen_bool(self.config.exploration_rate) {
            return self
                .rng
                .choose(moves)
                .copied()
                .ok_or(PlayError::NoAvailableMoves);
        }

        self.greedy_action(moves, board, symbol)
            .ok_or(PlayError::NoAvailableMoves)
    }

    fn record_visited(&mut self, hash: BoardHash) {
        self.trajectory.push(hash);
    }

    fn propagate_reward(&mut self, reward: f64) {
        let TdConfig {
            learning_rate,
            discount,
            ..
        } = self.config;

        let mut running = reward;
        for hash in self.trajectory.iter().rev() {
            let entry = self.values.entry(hash.clone());
            *entry += learning_rate * (discount * running - *entry);
            running = *entry;
        }
    }

    fn end_episode(&mut self) {
        self.trajectory.clear();
    }

    fn value_table(&self) -> Option<&ValueTable> {
        Some(&self.values)
    }
}
