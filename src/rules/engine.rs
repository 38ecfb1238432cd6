//! Stack resolution and win detection.
//!
//! `ResolutionEngine::resolve` takes actions off the front of the stack one
//! at a time and applies each fully before looking at the next. A counter
//! (`CounterSpell` or `Block`) removes the next unresolved action, which is
//! then recorded as countered instead of resolved. With nothing left to
//! counter it resolves as a no-op.
//!
//! After the stack is empty, every player at or below zero health is a
//! loser. Any loser ends the game; two losers is a draw.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info, warn};

use crate::core::{Action, ActionKind, DuelState, HistoryEvent, Player};

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// One player lost.
    Winner(Player),
    /// Both players dropped to zero in the same resolution.
    Draw,
}

impl GameResult {
    /// Build a result from the set of losers, or `None` if there are none.
    #[must_use]
    pub fn from_losers(losers: &[Player]) -> Option<Self> {
        match losers {
            [] => None,
            [loser] => Some(GameResult::Winner(loser.opponent())),
            _ => Some(GameResult::Draw),
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// Players who lost.
    #[must_use]
    pub fn losers(&self) -> SmallVec<[Player; 2]> {
        match self {
            GameResult::Winner(p) => SmallVec::from_slice(&[p.opponent()]),
            GameResult::Draw => SmallVec::from_slice(&Player::ALL),
        }
    }
}

/// What one call to [`ResolutionEngine::resolve`] did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolutionReport {
    /// Actions whose effect was applied, in resolution order.
    pub resolved: Vec<Action>,

    /// Actions cancelled by a counter, in cancellation order.
    pub countered: Vec<Action>,

    /// Set if this resolution ended the game.
    pub result: Option<GameResult>,
}

/// Applies queued actions to a duel state.
pub struct ResolutionEngine;

impl ResolutionEngine {
    /// Resolve the whole stack, then check for a winner.
    pub fn resolve(state: &mut DuelState) -> ResolutionReport {
        let mut report = ResolutionReport::default();

        while let Some(action) = state.stack.pop_front() {
            Self::apply(state, &action, &mut report);
        }

        report.result = Self::check_for_win(state);

        info!(
            resolved = report.resolved.len(),
            countered = report.countered.len(),
            game_ended = state.game_ended,
            "Stack resolved"
        );

        report
    }

    /// Apply a single action.
    fn apply(state: &mut DuelState, action: &Action, report: &mut ResolutionReport) {
        let actor = action.actor;
        debug!(%action, "Resolving action");

        // Counters land in history before the action they cancel.
        state.record(HistoryEvent::Resolved(action.clone()));
        report.resolved.push(action.clone());

        match &action.kind {
            ActionKind::Move { to } => {
                if to.is_on_board() {
                    state.player_mut(actor).position = *to;
                } else {
                    warn!(%action, "Skipping off-board move");
                }
            }
            ActionKind::Attack | ActionKind::CounterAttack => {
                let target = state.player_mut(actor.opponent());
                target.health = target.health.saturating_sub(1);
            }
            ActionKind::PlaySpell { name } => {
                state.player_mut(actor).remove_card(name);
            }
            ActionKind::CounterSpell | ActionKind::Block => match state.stack.pop_front() {
                Some(cancelled) => {
                    debug!(%cancelled, by = %action, "Action countered");
                    state.record(HistoryEvent::Countered {
                        action: cancelled.clone(),
                        by: action.clone(),
                    });
                    report.countered.push(cancelled);
                }
                None => debug!(%action, "Nothing to counter"),
            },
            ActionKind::Freeze => {
                state.player_mut(actor.opponent()).frozen = true;
            }
            ActionKind::RemoveFrozen { player } => {
                state.player_mut(*player).frozen = false;
            }
            ActionKind::Teleport
            | ActionKind::Retreat
            | ActionKind::Stutter
            | ActionKind::TimeWarp => {}
        }
    }

    /// End the game if anyone is at or below zero health.
    ///
    /// Returns the result only on the transition into the ended state.
    fn check_for_win(state: &mut DuelState) -> Option<GameResult> {
        if state.game_ended {
            return None;
        }

        let losers = state.losers();
        let result = GameResult::from_losers(&losers)?;

        state.game_ended = true;
        info!(losers = ?losers, result = ?result, "Game ended");
        state.record(HistoryEvent::GameEnded { losers });

        Some(result)
    }
}
