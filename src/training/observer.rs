//! Hooks for watching episodes as they are played.
//!
//! Training runs use [`SilentObserver`]. Spectator runs use
//! [`ConsoleObserver`], which draws the board after every move and announces
//! the result.

use std::io::{self, Write};

use crate::core::{BoardState, Coord, Player};
use crate::rules::GameResult;

/// Receives episode events from the driver.
pub trait PlayObserver {
    /// Called with the freshly reset board before the first move.
    fn on_episode_start(&mut self, _state: &BoardState) {}

    /// Called after each applied move.
    fn on_move(&mut self, _player: Player, _coord: Coord, _state: &BoardState) {}

    /// Called once the episode has a terminal result.
    fn on_episode_end(&mut self, _result: GameResult, _winner_name: Option<&str>) {}
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentObserver;

impl PlayObserver for SilentObserver {}

/// Observer that renders to a writer.
pub struct ConsoleObserver<W> {
    writer: W,
}

impl<W: Write> ConsoleObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn emit(&mut self, text: std::fmt::Arguments<'_>) {
        // Rendering failures must not end the episode.
        if let Err(err) = self.writer.write_fmt(text) {
            log::debug!("failed to render: {err}");
        }
    }
}

impl ConsoleObserver<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> PlayObserver for ConsoleObserver<W> {
    fn on_episode_start(&mut self, state: &BoardState) {
        self.emit(format_args!("{}\n", state.board()));
    }

    fn on_move(&mut self, player: Player, coord: Coord, state: &BoardState) {
        self.emit(format_args!("{player} plays {coord}\n{}\n", state.board()));
    }

    fn on_episode_end(&mut self, result: GameResult, winner_name: Option<&str>) {
        match (result, winner_name) {
            (GameResult::Winner(_), Some(name)) => self.emit(format_args!("{name} wins!\n")),
            (GameResult::Winner(player), None) => self.emit(format_args!("{player} wins!\n")),
            (GameResult::Draw, _) => self.emit(format_args!("Tie!\n")),
            (GameResult::InProgress, _) => {}
        }
    }
}
