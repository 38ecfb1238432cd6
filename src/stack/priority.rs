//! Priority and turn control.
//!
//! In a two-player game "the next player to act" and "the target of an
//! attack declared by X" are both the complement of a player, so a single
//! `toggle` primitive serves both. Every priority or turn change goes
//! through it.

use serde::{Deserialize, Serialize};

use crate::core::Player;

/// Map `Black` to `White` and back.
///
/// ```
/// use grid_duel::core::Player;
/// use grid_duel::stack::toggle;
///
/// assert_eq!(toggle(Player::Black), Player::White);
/// assert_eq!(toggle(toggle(Player::White)), Player::White);
/// ```
#[must_use]
pub const fn toggle(player: Player) -> Player {
    match player {
        Player::Black => Player::White,
        Player::White => Player::Black,
    }
}

/// Who may submit the next intent, and whose combat turn it is.
///
/// The two are tracked separately: priority flips after every queued
/// intent or pass, the turn flips only when a turn is advanced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityController {
    priority: Player,
    turn: Player,
    turn_number: u32,
}

impl Default for PriorityController {
    fn default() -> Self {
        Self::new(Player::Black)
    }
}

impl PriorityController {
    /// Create a controller where `first` holds both turn and priority.
    #[must_use]
    pub const fn new(first: Player) -> Self {
        Self {
            priority: first,
            turn: first,
            turn_number: 1,
        }
    }

    /// Rebuild a controller from stored values.
    #[must_use]
    pub const fn from_parts(priority: Player, turn: Player, turn_number: u32) -> Self {
        Self {
            priority,
            turn,
            turn_number,
        }
    }

    /// Player holding priority.
    #[must_use]
    pub const fn priority(&self) -> Player {
        self.priority
    }

    /// Player whose turn it is.
    #[must_use]
    pub const fn turn(&self) -> Player {
        self.turn
    }

    /// Turn counter, starting at 1.
    #[must_use]
    pub const fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Check if a player holds priority.
    #[must_use]
    pub fn has_priority(&self, player: Player) -> bool {
        self.priority == player
    }

    /// Hand priority to the other player. Returns the new holder.
    pub fn toggle_priority(&mut self) -> Player {
        self.priority = toggle(self.priority);
        self.priority
    }

    /// End the current turn: the other player gets the turn and priority.
    pub fn advance_turn(&mut self) -> Player {
        self.turn = toggle(self.turn);
        self.priority = self.turn;
        self.turn_number = self.turn_number.saturating_add(1);
        self.turn
    }
}
