//! Tabular state values keyed by canonical board hash.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::BoardHash;

/// Value assumed for a board that has never been updated.
pub const DEFAULT_VALUE: f64 = 0.0;

/// Mapping from canonical board hash to estimated value.
///
/// Absent keys read as [`DEFAULT_VALUE`]. The table lives as long as its
/// agent and is never cleared between episodes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValueTable {
    values: FxHashMap<BoardHash, f64>,
}

impl ValueTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of `hash`, or [`DEFAULT_VALUE`] if it has never been set.
    #[must_use]
    pub fn get(&self, hash: &BoardHash) -> f64 {
        self.values.get(hash).copied().unwrap_or(DEFAULT_VALUE)
    }

    /// Stored value of `hash`, distinguishing absent entries.
    #[must_use]
    pub fn lookup(&self, hash: &BoardHash) -> Option<f64> {
        self.values.get(hash).copied()
    }

    /// Mutable entry for `hash`, inserting [`DEFAULT_VALUE`] if absent.
    pub fn entry(&mut self, hash: BoardHash) -> &mut f64 {
        self.values.entry(hash).or_insert(DEFAULT_VALUE)
    }

    pub fn insert(&mut self, hash: BoardHash, value: f64) {
        self.values.insert(hash, value);
    }

    #[must_use]
    pub fn contains(&self, hash: &BoardHash) -> bool {
        self.values.contains_key(hash)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&BoardHash, f64)> {
        self.values.iter().map(|(k, v)| (k, *v))
    }
}

impl FromIterator<(BoardHash, f64)> for ValueTable {
    fn from_iter<I: IntoIterator<Item = (BoardHash, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
