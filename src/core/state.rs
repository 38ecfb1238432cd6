//! Duel state: everything a renderer or persistence layer needs.
//!
//! ## DuelState
//!
//! - Session flags: started, ended, players joined
//! - Turn and priority
//! - Both player states (health, position, hand, frozen)
//! - The pending action stack
//! - History, most recent first
//!
//! Stack and history use `im` persistent structures, so cloning a state to
//! hand out a snapshot is O(1) and safe to read while the session moves on.
//!
//! ## Wire shape
//!
//! Serialized flat, as `DuelRecord`: the top-level scalars (`gameStarted`,
//! `gameEnded`, `playersJoined`, `turn`, `priority`, `turnNumber`), the two
//! player records, the stack as a list of `{kind, actor, payload}` and the
//! history. Decoding checks the state with [`DuelState::validate`].

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::action::{ActionKind, HistoryEvent};
use super::config::GameConfig;
use super::error::{GameError, Result};
use super::player::{Player, PlayerMap, PlayerState};
use crate::stack::{ActionStack, PriorityController};

/// Maximum number of clients that can join a session.
pub const MAX_PLAYERS: u8 = 2;

/// Complete state of a duel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DuelRecord", into = "DuelRecord")]
pub struct DuelState {
    /// Set by `start_game`; never cleared.
    pub game_started: bool,

    /// Set once a player drops to zero health; never cleared.
    pub game_ended: bool,

    /// Clients attached by the lobby layer, 0-2.
    pub players_joined: u8,

    /// Turn and priority.
    pub control: PriorityController,

    /// Per-player state.
    pub players: PlayerMap<PlayerState>,

    /// Declared actions awaiting resolution.
    pub stack: ActionStack,

    /// Audit log, most recent first.
    pub history: Vector<HistoryEvent>,
}

/// Serialized form of a [`DuelState`].
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DuelRecord {
    game_started: bool,
    game_ended: bool,
    players_joined: u8,
    turn: Player,
    priority: Player,
    turn_number: u32,
    players: PlayerMap<PlayerState>,
    stack: ActionStack,
    history: Vector<HistoryEvent>,
}

impl From<DuelState> for DuelRecord {
    fn from(state: DuelState) -> Self {
        Self {
            game_started: state.game_started,
            game_ended: state.game_ended,
            players_joined: state.players_joined,
            turn: state.control.turn(),
            priority: state.control.priority(),
            turn_number: state.control.turn_number(),
            players: state.players,
            stack: state.stack,
            history: state.history,
        }
    }
}

impl TryFrom<DuelRecord> for DuelState {
    type Error = GameError;

    fn try_from(record: DuelRecord) -> Result<Self> {
        let state = Self {
            game_started: record.game_started,
            game_ended: record.game_ended,
            players_joined: record.players_joined,
            control: PriorityController::from_parts(
                record.priority,
                record.turn,
                record.turn_number,
            ),
            players: record.players,
            stack: record.stack,
            history: record.history,
        };
        state.validate()?;
        Ok(state)
    }
}

impl DuelState {
    /// Create the initial state for a configuration.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            game_started: false,
            game_ended: false,
            players_joined: 0,
            control: PriorityController::default(),
            players: config.initial_players(),
            stack: ActionStack::new(config.max_stack_depth),
            history: Vector::new(),
        }
    }

    /// Player holding priority.
    #[must_use]
    pub fn priority(&self) -> Player {
        self.control.priority()
    }

    /// Player whose turn it is.
    #[must_use]
    pub fn turn(&self) -> Player {
        self.control.turn()
    }

    /// Get a player's state.
    #[must_use]
    pub fn player(&self, player: Player) -> &PlayerState {
        &self.players[player]
    }

    /// Get a mutable player state.
    pub fn player_mut(&mut self, player: Player) -> &mut PlayerState {
        &mut self.players[player]
    }

    /// Players at or below zero health, black first.
    #[must_use]
    pub fn losers(&self) -> SmallVec<[Player; 2]> {
        self.players
            .iter()
            .filter(|(_, state)| !state.is_alive())
            .map(|(p, _)| p)
            .collect()
    }

    /// Prepend an event to the history.
    pub fn record(&mut self, event: HistoryEvent) {
        self.history.push_front(event);
    }

    /// Check the invariants a live session maintains.
    ///
    /// - Both players stand on the board
    /// - At most two players have joined
    /// - Anyone at or below zero health means the game has ended
    /// - Every queued move targets a cell on the board
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: String| Err(GameError::InvalidState { reason });

        for (player, state) in self.players.iter() {
            if !state.position.is_on_board() {
                return invalid(format!("{player} is off the board at {}", state.position));
            }
        }
        if self.players_joined > MAX_PLAYERS {
            return invalid(format!("{} players joined", self.players_joined));
        }
        if !self.game_ended && !self.losers().is_empty() {
            return invalid("a player is out of health but the game has not ended".to_string());
        }
        for action in self.stack.iter() {
            if let ActionKind::Move { to } = action.kind {
                if !to.is_on_board() {
                    return invalid(format!("queued move to off-board cell {to}"));
                }
            }
        }
        Ok(())
    }

    /// Encode to a compact binary form.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a state produced by [`DuelState::to_bytes`].
    ///
    /// Fails with `Codec` on malformed bytes or a state that breaks an
    /// invariant.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}
