//! Game rules: line checks and terminal-state detection.
//!
//! The rules are fixed to the 3×3 grid with three-in-a-row wins; nothing
//! here is configurable.

pub mod engine;

pub use engine::{evaluate, GameResult};
