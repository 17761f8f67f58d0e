//! # td-tictactoe
//!
//! Tabular temporal-difference learning for tic-tac-toe by self-play.
//!
//! ## Design Principles
//!
//! 1. **Value tables over canonical boards**: Each learning seat keeps its own
//!    map from board hash to estimated value. Unseen boards are worth zero.
//!
//! 2. **Backward updates at episode end**: Rewards are only known once the
//!    game is over, so every board a seat produced is updated in reverse
//!    order from the terminal reward.
//!
//! 3. **Seats are interchangeable**: The driver talks to the [`Agent`] trait,
//!    so learning and human seats can be mixed freely.
//!
//! ## Modules
//!
//! - `core`: Board, coordinates, players, board state, RNG
//! - `rules`: Terminal-state evaluation
//! - `agents`: The `Agent` trait, the TD learner and the interactive seat
//! - `training`: Episode driver, observers and run summaries
//! - `persistence`: Saving and loading value tables
//! - `config`: TOML configuration
//! - `error`: Error types

pub mod agents;
pub mod config;
pub mod core;
pub mod error;
pub mod persistence;
pub mod rules;
pub mod training;

// Re-export commonly used types
pub use crate::core::{Board, BoardHash, BoardState, Cell, Coord, GameRng, Player, PlayerMap};

pub use crate::rules::{evaluate, GameResult};

pub use crate::agents::{Agent, InteractiveAgent, TdAgent, TdConfig, ValueTable};

pub use crate::training::{
    ConsoleObserver, DriverConfig, PlayObserver, PlaySummary, SelfPlayDriver, SilentObserver,
};

pub use crate::config::AppConfig;
pub use crate::error::{ConfigError, InputError, MoveError, PersistenceError, PlayError};
