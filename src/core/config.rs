//! Game configuration.
//!
//! A `GameConfig` fixes the starting state and the rule toggles for one
//! session. Configs are built up with chained setters:
//!
//! ```
//! use grid_duel::core::{GameConfig, Player};
//!
//! let config = GameConfig::new()
//!     .starting_health(5)
//!     .starting_hand(Player::Black, ["freeze", "block"])
//!     .require_card_in_hand(true);
//!
//! assert_eq!(config.starting_health, 5);
//! assert_eq!(config.starting_hands[Player::Black].len(), 2);
//! ```

use serde::{Deserialize, Serialize};

use super::board::Coordinate;
use super::player::{Player, PlayerMap, PlayerState};

/// Default starting health for both players.
pub const DEFAULT_STARTING_HEALTH: i64 = 3;

/// Default cap on pending actions.
pub const DEFAULT_MAX_STACK_DEPTH: usize = 64;

/// Session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Health both players start with.
    pub starting_health: i64,

    /// Starting cell per player.
    pub starting_positions: PlayerMap<Coordinate>,

    /// Starting hand per player.
    pub starting_hands: PlayerMap<Vec<String>>,

    /// Maximum number of pending actions on the stack.
    pub max_stack_depth: usize,

    /// Reject intents from frozen players.
    pub enforce_frozen: bool,

    /// Reject intents from a player who does not hold priority.
    pub enforce_priority: bool,

    /// Reject spells that are not in the actor's hand.
    pub require_card_in_hand: bool,

    /// Mark the game started when the session is created.
    pub start_immediately: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_health: DEFAULT_STARTING_HEALTH,
            starting_positions: PlayerMap::new(|p| match p {
                Player::Black => Coordinate::new(0, 0),
                Player::White => Coordinate::new(6, 6),
            }),
            starting_hands: PlayerMap::with_value(Vec::new()),
            max_stack_depth: DEFAULT_MAX_STACK_DEPTH,
            enforce_frozen: true,
            enforce_priority: false,
            require_card_in_hand: false,
            start_immediately: true,
        }
    }
}

impl GameConfig {
    /// Create a config with the default rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the health both players start with.
    #[must_use]
    pub fn starting_health(mut self, health: i64) -> Self {
        self.starting_health = health;
        self
    }

    /// Set a player's starting cell.
    ///
    /// Off-board positions are ignored; the starting corner is kept.
    #[must_use]
    pub fn starting_position(mut self, player: Player, position: Coordinate) -> Self {
        if position.is_on_board() {
            self.starting_positions[player] = position;
        }
        self
    }

    /// Replace a player's starting hand.
    #[must_use]
    pub fn starting_hand<I, S>(mut self, player: Player, cards: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.starting_hands[player] = cards.into_iter().map(Into::into).collect();
        self
    }

    /// Set the cap on pending actions.
    #[must_use]
    pub fn max_stack_depth(mut self, depth: usize) -> Self {
        self.max_stack_depth = depth;
        self
    }

    /// Toggle rejection of intents from frozen players.
    #[must_use]
    pub fn enforce_frozen(mut self, enforce: bool) -> Self {
        self.enforce_frozen = enforce;
        self
    }

    /// Toggle rejection of intents from the player without priority.
    #[must_use]
    pub fn enforce_priority(mut self, enforce: bool) -> Self {
        self.enforce_priority = enforce;
        self
    }

    /// Toggle rejection of spells the actor does not hold.
    #[must_use]
    pub fn require_card_in_hand(mut self, require: bool) -> Self {
        self.require_card_in_hand = require;
        self
    }

    /// Toggle marking the game started on session creation.
    #[must_use]
    pub fn start_immediately(mut self, start: bool) -> Self {
        self.start_immediately = start;
        self
    }

    /// Initial state for both players.
    #[must_use]
    pub fn initial_players(&self) -> PlayerMap<PlayerState> {
        PlayerMap::new(|p| {
            PlayerState::new(
                self.starting_health,
                self.starting_positions[p],
                self.starting_hands[p].clone(),
            )
        })
    }
}
