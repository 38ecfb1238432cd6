//! The pending-action stack.
//!
//! New actions go on the front and the front resolves first, so a stack
//! built by pushing A, B, C resolves C, B, A. Counters cancel whatever is
//! at the front.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::config::DEFAULT_MAX_STACK_DEPTH;
use crate::core::{Action, GameError, Result};

/// LIFO queue of declared actions awaiting resolution.
///
/// Backed by `im::Vector` so that snapshots of a session clone in O(1).
/// Serialized as the bare list of actions, front first; the capacity comes
/// from the session config and is restored with [`ActionStack::set_capacity`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vector<Action>", into = "Vector<Action>")]
pub struct ActionStack {
    /// Index 0 is the front (next to resolve).
    entries: Vector<Action>,

    capacity: usize,
}

impl Default for ActionStack {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_STACK_DEPTH)
    }
}

impl From<Vector<Action>> for ActionStack {
    fn from(entries: Vector<Action>) -> Self {
        Self {
            entries,
            capacity: DEFAULT_MAX_STACK_DEPTH,
        }
    }
}

impl From<ActionStack> for Vector<Action> {
    fn from(stack: ActionStack) -> Self {
        stack.entries
    }
}

impl ActionStack {
    /// Create an empty stack holding at most `capacity` actions.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vector::new(),
            capacity,
        }
    }

    /// Put an action on the front of the stack.
    ///
    /// Performs no game validation; that happens before an intent is
    /// queued. Fails only when the stack is at capacity.
    pub fn push(&mut self, action: Action) -> Result<()> {
        if self.entries.len() >= self.capacity {
            return Err(GameError::StackFull {
                capacity: self.capacity,
            });
        }
        self.entries.push_front(action);
        Ok(())
    }

    /// Remove and return the front action, or `None` if empty.
    pub fn pop_front(&mut self) -> Option<Action> {
        self.entries.pop_front()
    }

    /// Peek at the next action to resolve.
    #[must_use]
    pub fn front(&self) -> Option<&Action> {
        self.entries.front()
    }

    /// Remove every action, front first.
    pub fn drain_in_order(&mut self) -> Vec<Action> {
        std::mem::take(&mut self.entries).into_iter().collect()
    }

    /// Iterate front to back without removing anything.
    pub fn iter(&self) -> impl Iterator<Item = &Action> {
        self.entries.iter()
    }

    /// Number of pending actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of pending actions.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Change the depth limit. Entries already queued are kept.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
    }

    /// Remove all actions.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
