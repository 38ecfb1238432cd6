//! Action stack and priority control.
//!
//! - [`ActionStack`]: LIFO queue of declared actions. The front resolves
//!   first and is the target of counters.
//! - [`PriorityController`]: who may act next and whose turn it is, built
//!   on the single [`toggle`] primitive.
//!
//! ## Example Usage
//!
//! ```
//! use grid_duel::core::{Action, Player};
//! use grid_duel::stack::{ActionStack, PriorityController};
//!
//! let mut stack = ActionStack::default();
//! let mut priority = PriorityController::default();
//!
//! stack.push(Action::attack(Player::Black)).unwrap();
//! priority.toggle_priority();
//!
//! assert_eq!(stack.len(), 1);
//! assert_eq!(priority.priority(), Player::White);
//! ```

mod lifo;
mod priority;

pub use lifo::ActionStack;
pub use priority::{toggle, PriorityController};
