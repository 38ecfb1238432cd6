//! Resolution of the action stack.
//!
//! The engine applies queued actions to player state in stack order and
//! reports whether the game ended.

pub mod engine;

pub use engine::{GameResult, ResolutionEngine, ResolutionReport};
