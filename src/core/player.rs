//! Player identification and per-player data storage.
//!
//! ## Player
//!
//! The game is strictly two-player. `Player::One` always arranges first,
//! takes the first turn, and plays the green deck. `Player::Two` plays red.
//!
//! ## PlayerMap
//!
//! Fixed two-slot storage indexed by `Player`, used for arrangements,
//! cheat-token balances, and anything else kept once per player.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::cards::Color;

/// One of the two seats at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Both players in seat order.
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// The other seat.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// The deck color assigned to this player.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Player::One => Color::Green,
            Player::Two => Color::Red,
        }
    }

    /// Seat number as shown to people (1 or 2).
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Index into per-player storage (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        self.number() as usize - 1
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Per-player data storage.
///
/// ## Example
///
/// ```
/// use diicii_knockout::core::{Player, PlayerMap};
///
/// let mut tokens: PlayerMap<u8> = PlayerMap::with_value(3);
/// tokens[Player::Two] -= 1;
///
/// assert_eq!(tokens[Player::One], 3);
/// assert_eq!(tokens[Player::Two], 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Player) -> T) -> Self {
        Self {
            data: [factory(Player::One), factory(Player::Two)],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a map with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (Player, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::ALL.into_iter().zip(self.data.iter())
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
    fn test_player_basics() {
        assert_eq!(Player::One.other(), Player::Two);
        assert_eq!(Player::Two.other(), Player::One);
        assert_eq!(Player::One.index(), 0);
        assert_eq!(Player::Two.index(), 1);
        assert_eq!(format!("{}", Player::Two), "Player 2");
    }

    #[test]
    fn test_player_colors() {
        assert_eq!(Player::One.color(), Color::Green);
        assert_eq!(Player::Two.color(), Color::Red);
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<u8> = PlayerMap::new(|p| p.number() * 10);

        assert_eq!(map[Player::One], 10);
        assert_eq!(map[Player::Two], 20);
    }

    #[test]
    fn test_player_map_mutation() {
        let mut map: PlayerMap<Vec<u8>> = PlayerMap::with_default();

        map[Player::One].push(1);
        map[Player::Two].extend([2, 2]);

        assert_eq!(map[Player::One], vec![1]);
        assert_eq!(map[Player::Two].len(), 2);
    }

    #[test]
    fn test_player_map_iter() {
        let map: PlayerMap<u8> = PlayerMap::new(|p| p.number());

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Player::One, &1), (Player::Two, &2)]);
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<u8> = PlayerMap::new(|p| p.number() + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
