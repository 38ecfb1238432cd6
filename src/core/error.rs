//! Error types for the duel engine.
//!
//! Recoverable rejections (`InvalidMove`, `PlayerFrozen`, ...) leave the
//! session untouched; the caller may retry with corrected input.
//! `UnknownPlayer` and `UnknownActionKind` can only come from the string
//! boundary and indicate a caller contract violation.

use super::board::Coordinate;
use super::player::Player;

/// Errors returned by intent submission and snapshot encoding.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// Requested destination is off the board or not one orthogonal step away.
    #[error("illegal move from {from} to {to}")]
    InvalidMove {
        /// Current position of the mover.
        from: Coordinate,
        /// Requested destination.
        to: Coordinate,
    },

    /// A player name other than `black` or `white`.
    #[error("unknown player: {0}")]
    UnknownPlayer(String),

    /// An action name outside the closed set of kinds.
    #[error("unknown action kind: {0}")]
    UnknownActionKind(String),

    /// The named action kind needs a payload the string form cannot carry.
    #[error("action kind {0} requires a payload")]
    MissingPayload(&'static str),

    /// The game has ended; no further intents are accepted.
    #[error("game is over")]
    GameOver,

    /// The game has not been started.
    #[error("game has not started")]
    NotStarted,

    /// The actor is frozen and may not declare actions.
    #[error("{0} is frozen")]
    PlayerFrozen(Player),

    /// The actor does not hold priority.
    #[error("{actor} does not have priority ({holder} does)")]
    NotYourPriority {
        /// Who tried to act.
        actor: Player,
        /// Who holds priority.
        holder: Player,
    },

    /// The named effect is not in the actor's hand.
    #[error("{player} has no {card} in hand")]
    CardNotInHand {
        /// Whose hand was checked.
        player: Player,
        /// The missing effect name.
        card: String,
    },

    /// The action stack is at its configured depth.
    #[error("action stack is full ({capacity} entries)")]
    StackFull {
        /// Configured maximum depth.
        capacity: usize,
    },

    /// A restored state breaks a game invariant.
    #[error("invalid state: {reason}")]
    InvalidState {
        /// Which invariant failed.
        reason: String,
    },

    /// Snapshot encoding or decoding failed.
    #[error("snapshot codec error: {0}")]
    Codec(#[from] bincode::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GameError>;
