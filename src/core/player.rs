//! Player identification and per-seat data storage.
//!
//! ## Player
//!
//! The two seats of the game. `Player::X` always moves first.
//!
//! ## PlayerMap
//!
//! Fixed two-entry storage indexed by `Player`, used for per-seat rewards
//! and anything else the driver keeps once per seat.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::board::Cell;

/// One of the two seats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// First mover. Encoded as +1 in line sums.
    X,
    /// Second mover. Encoded as -1 in line sums.
    O,
}

impl Player {
    /// Both seats in turn order.
    pub const ALL: [Player; 2] = [Player::X, Player::O];

    /// The opposing seat.
    #[must_use]
    pub const fn other(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// The cell this player's mark occupies.
    #[must_use]
    pub const fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    /// Seat index (X = 0, O = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::X => 0,
            Player::O => 1,
        }
    }

    /// Numeric encoding used by line sums.
    #[must_use]
    pub const fn sign(self) -> i8 {
        match self {
            Player::X => 1,
            Player::O => -1,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// Per-seat data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use td_tictactoe::core::{Player, PlayerMap};
///
/// let mut rewards: PlayerMap<f64> = PlayerMap::new(|_| 0.0);
/// rewards[Player::O] = 0.5;
/// assert_eq!(rewards[Player::X], 0.0);
/// assert_eq!(rewards[Player::O], 0.5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Player) -> T) -> Self {
        Self {
            data: [factory(Player::X), factory(Player::O)],
        }
    }

    /// Create a map from explicit X and O values.
    pub fn from_pair(x: T, o: T) -> Self {
        Self { data: [x, o] }
    }

    /// Create a map with every entry set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::from_pair(value.clone(), value)
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (Player, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (Player, &mut T) pairs in turn order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Player, &mut T)> {
        Player::ALL.into_iter().zip(self.data.iter_mut())
    }

    /// Transform every value, keeping seats.
    pub fn map<U>(self, f: impl Fn(T) -> U) -> PlayerMap<U> {
        let [x, o] = self.data;
        PlayerMap::from_pair(f(x), f(o))
    }

    /// Unwrap into `[x, o]`.
    pub fn into_array(self) -> [T; 2] {
        self.data
    }
}

impl<T: Default> Default for PlayerMap<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T> Index<Player> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerMap<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_player() {
        assert_eq!(Player::X.other(), Player::O);
        assert_eq!(Player::O.other(), Player::X);
    }

    #[test]
    fn test_player_encoding() {
        assert_eq!(Player::X.sign(), 1);
        assert_eq!(Player::O.sign(), -1);
        assert_eq!(Player::X.to_cell(), Cell::X);
        assert_eq!(Player::O.to_cell(), Cell::O);
    }

    #[test]
    fn test_player_display() {
        assert_eq!(format!("{}", Player::X), "X");
        assert_eq!(format!("{}", Player::O), "O");
    }

    #[test]
    fn test_player_map_index() {
        let mut map = PlayerMap::from_pair(1, 2);
        assert_eq!(map[Player::X], 1);
        assert_eq!(map[Player::O], 2);

        map[Player::X] = 10;
        assert_eq!(*map.get(Player::X), 10);
    }

    #[test]
    fn test_player_map_iter_in_turn_order() {
        let map = PlayerMap::new(|p| p.index() * 10);
        let pairs: Vec<_> = map.iter().map(|(p, v)| (p, *v)).collect();
        assert_eq!(pairs, vec![(Player::X, 0), (Player::O, 10)]);
    }

    #[test]
    fn test_player_map_map() {
        let map = PlayerMap::from_pair(1, 2).map(|v| v * 3);
        assert_eq!(map, PlayerMap::from_pair(3, 6));
    }

    #[test]
    fn test_player_map_serde() {
        let map = PlayerMap::from_pair(0.1, 0.5);
        let json = serde_json::to_string(&map).unwrap();
        let back: PlayerMap<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, back);
    }
}
