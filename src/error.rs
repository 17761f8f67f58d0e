use std::path::PathBuf;

use crate::core::Coord;

/// A move that cannot be placed on the board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("cell {0} is outside the 3x3 board")]
    OutOfRange(Coord),

    #[error("cell {0} is already occupied")]
    Occupied(Coord),
}

/// Interactive input that was rejected. The prompt is repeated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("could not parse '{0}' as a row and column pair")]
    Parse(String),

    #[error("row and column must be in 0..3, got ({row}, {col})")]
    OutOfRange { row: usize, col: usize },

    #[error("cell {0} is not an available move")]
    Unavailable(Coord),
}

/// Errors that end a play session.
#[derive(Debug, thiserror::Error)]
pub enum PlayError {
    #[error("invalid move: {0}")]
    Move(#[from] MoveError),

    #[error("agent asked to choose from an empty move list")]
    NoAvailableMoves,

    #[error("input source closed before a move was supplied")]
    InputClosed,

    #[error("failed to read input: {0}")]
    Input(#[from] std::io::Error),
}

/// Errors from saving or loading a value table.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("failed to read policy from {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write policy to {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to encode value table: {0}")]
    Encode(bincode::Error),

    #[error("failed to decode value table: {0}")]
    Decode(bincode::Error),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("failed to render TOML: {0}")]
    TomlRender(#[from] toml::ser::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
