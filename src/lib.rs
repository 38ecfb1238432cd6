//! # grid-duel
//!
//! Rules engine for a two-player positional duel on a 7x7 grid.
//!
//! Each player occupies one cell, holds a hand of effects and declares
//! actions onto a shared stack. Priority alternates after every declared
//! action. Resolving the stack applies actions most-recent-first and ends
//! the game once anyone is at or below zero health.
//!
//! ## Design Principles
//!
//! 1. **Declare, then resolve**: intents only queue actions. Nothing touches
//!    health or position until `resolve_stack`, so counters can be declared
//!    against pending actions.
//!
//! 2. **Closed action set**: action kinds are an enum, dispatched in one
//!    place. Unknown names are rejected at the string boundary.
//!
//! 3. **Owned state**: a `GameSession` owns its state. Callers read
//!    snapshots, which are O(1) clones thanks to `im`.
//!
//! ## Modules
//!
//! - `core`: players, board, actions, configuration, state, errors
//! - `stack`: action stack and priority/turn control
//! - `rules`: resolution engine and game results
//! - `session`: the game session entry point

pub mod core;
pub mod rules;
pub mod session;
pub mod stack;

// Re-export commonly used types
pub use crate::core::{
    is_legal_move, Action, ActionKind, Coordinate, DuelState, GameConfig, GameError,
    HistoryEvent, Player, PlayerMap, PlayerState, Result, BOARD_SIZE,
};

pub use crate::rules::{GameResult, ResolutionEngine, ResolutionReport};

pub use crate::session::GameSession;

pub use crate::stack::{toggle, ActionStack, PriorityController};
