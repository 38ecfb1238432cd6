//! Game session: the entry point for player intents.
//!
//! A session composes the board rules, player states, action stack,
//! priority controller and resolution engine:
//!
//! - Intents are validated (game open, priority, frozen, board rules)
//! - Valid intents become actions on the stack and priority flips
//! - `resolve_stack` applies the stack and checks for a winner
//! - Every resolved action lands in the history
//!
//! ```
//! use grid_duel::core::{Coordinate, Player};
//! use grid_duel::session::GameSession;
//!
//! let mut session = GameSession::default();
//! session.submit_move_intent(Player::Black, (0, 1)).unwrap();
//! session.submit_attack_intent(Player::White).unwrap();
//! session.resolve_stack().unwrap();
//!
//! assert_eq!(session.player(Player::Black).position, Coordinate::new(0, 1));
//! assert_eq!(session.player(Player::Black).health, 2);
//! ```

mod game;

pub use game::GameSession;
