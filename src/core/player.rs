//! Player identification and per-player data storage.
//!
//! ## Player
//!
//! The duel has exactly two sides, `Black` and `White`. There is no third
//! value and no "null" player, so "the opponent of X" is always defined.
//!
//! ## PlayerMap
//!
//! Two-slot storage indexed by `Player`. Both slots exist for the whole
//! lifetime of a map; entries are never created or destroyed.
//!
//! ## PlayerState
//!
//! Health, position, hand and frozen status for one side.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use super::board::Coordinate;
use super::error::GameError;
use crate::stack::toggle;

/// One of the two sides of a duel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// Both players, black first.
    pub const ALL: [Player; 2] = [Player::Black, Player::White];

    /// The other side.
    ///
    /// ```
    /// use grid_duel::core::Player;
    ///
    /// assert_eq!(Player::Black.opponent(), Player::White);
    /// assert_eq!(Player::White.opponent(), Player::Black);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        toggle(self)
    }

    /// Lowercase name used on the wire and in logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Player::Black => "black",
            Player::White => "white",
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Player {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "black" => Ok(Player::Black),
            "white" => Ok(Player::White),
            other => Err(GameError::UnknownPlayer(other.to_string())),
        }
    }
}

/// Per-player data storage, one slot per side.
///
/// ## Example
///
/// ```
/// use grid_duel::core::{Player, PlayerMap};
///
/// let mut health: PlayerMap<i64> = PlayerMap::with_value(3);
/// health[Player::White] -= 1;
///
/// assert_eq!(health[Player::Black], 3);
/// assert_eq!(health[Player::White], 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    black: T,
    white: T,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(Player) -> T) -> Self {
        Self {
            black: factory(Player::Black),
            white: factory(Player::White),
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            black: value.clone(),
            white: value,
        }
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        match player {
            Player::Black => &self.black,
            Player::White => &self.white,
        }
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        match player {
            Player::Black => &mut self.black,
            Player::White => &mut self.white,
        }
    }

    /// Iterate over (Player, &T) pairs, black first.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        [(Player::Black, &self.black), (Player::White, &self.white)].into_iter()
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

/// Mutable state of one side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Remaining health. May drop to zero or below, which loses the game.
    pub health: i64,

    /// Current cell. Only ever set from a validated move.
    pub position: Coordinate,

    /// Effect names currently playable, in deal order.
    pub hand: Vec<String>,

    /// While set, the player may not declare actions.
    pub frozen: bool,
}

impl PlayerState {
    /// Create a fresh player state.
    #[must_use]
    pub fn new(health: i64, position: Coordinate, hand: Vec<String>) -> Self {
        Self {
            health,
            position,
            hand,
            frozen: false,
        }
    }

    /// Check if the player is still standing.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Check if the named effect is in hand.
    #[must_use]
    pub fn has_card(&self, card: &str) -> bool {
        self.hand.iter().any(|c| c == card)
    }

    /// Remove every copy of the named effect from hand.
    ///
    /// Returns true if anything was removed. Removing an absent card is a
    /// no-op.
    pub fn remove_card(&mut self, card: &str) -> bool {
        let before = self.hand.len();
        self.hand.retain(|c| c != card);
        self.hand.len() != before
    }
}
