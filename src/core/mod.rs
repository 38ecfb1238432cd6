//! Core engine types: players, board geometry, actions, configuration,
//! state and errors.

pub mod action;
pub mod board;
pub mod config;
pub mod error;
pub mod player;
pub mod state;

pub use action::{Action, ActionKind, ActionRecord, HistoryEvent, Payload};
pub use board::{is_legal_move, Coordinate, BOARD_SIZE};
pub use config::GameConfig;
pub use error::{GameError, Result};
pub use player::{Player, PlayerMap, PlayerState};
pub use state::{DuelRecord, DuelState, MAX_PLAYERS};
