//! Action representation: an actor plus a kind-specific payload.
//!
//! The set of kinds is closed. Every queued `Action` is well-formed by
//! construction, so resolution never has to reject one.
//!
//! On the wire an action is `{kind, actor, payload}`, where `kind` is the
//! camelCase name also accepted by [`ActionKind::from_name`] and `payload`
//! is `{"to": [x, y]}`, `{"name": ..}`, `{"player": ..}` or null.
//!
//! `HistoryEvent` is the audit log entry type: resolved and countered
//! actions plus session start/end markers.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::board::Coordinate;
use super::error::{GameError, Result};
use super::player::Player;

/// The kind of a queued action, with its payload.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// Move the actor to an already-validated cell.
    Move { to: Coordinate },
    /// Deal 1 damage to the actor's opponent.
    Attack,
    /// Discard the named effect from the actor's hand.
    PlaySpell { name: String },
    /// Deal 1 damage to the actor's opponent in response.
    CounterAttack,
    /// Cancel the next unresolved action.
    CounterSpell,
    /// Freeze the actor's opponent.
    Freeze,
    /// Unfreeze the named player.
    RemoveFrozen { player: Player },
    /// Cancel the next unresolved action.
    Block,
    Teleport,
    Retreat,
    Stutter,
    TimeWarp,
}

impl ActionKind {
    /// The camelCase name of this kind.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            ActionKind::Move { .. } => "move",
            ActionKind::Attack => "attack",
            ActionKind::PlaySpell { .. } => "playSpell",
            ActionKind::CounterAttack => "counterAttack",
            ActionKind::CounterSpell => "counterSpell",
            ActionKind::Freeze => "freeze",
            ActionKind::RemoveFrozen { .. } => "removeFrozen",
            ActionKind::Block => "block",
            ActionKind::Teleport => "teleport",
            ActionKind::Retreat => "retreat",
            ActionKind::Stutter => "stutter",
            ActionKind::TimeWarp => "timeWarp",
        }
    }

    /// Parse a kind from its camelCase name on behalf of `actor`.
    ///
    /// `removeFrozen` targets the actor. Kinds that need a coordinate or a
    /// spell name cannot be expressed by name alone.
    ///
    /// ```
    /// use grid_duel::core::{ActionKind, Player};
    ///
    /// let kind = ActionKind::from_name("freeze", Player::Black).unwrap();
    /// assert_eq!(kind, ActionKind::Freeze);
    /// assert!(ActionKind::from_name("fireball", Player::Black).is_err());
    /// ```
    pub fn from_name(name: &str, actor: Player) -> Result<Self> {
        let kind = match name {
            "attack" => ActionKind::Attack,
            "counterAttack" => ActionKind::CounterAttack,
            "counterSpell" => ActionKind::CounterSpell,
            "freeze" => ActionKind::Freeze,
            "removeFrozen" => ActionKind::RemoveFrozen { player: actor },
            "block" => ActionKind::Block,
            "teleport" => ActionKind::Teleport,
            "retreat" => ActionKind::Retreat,
            "stutter" => ActionKind::Stutter,
            "timeWarp" => ActionKind::TimeWarp,
            "move" => return Err(GameError::MissingPayload("move")),
            "playSpell" => return Err(GameError::MissingPayload("playSpell")),
            other => return Err(GameError::UnknownActionKind(other.to_string())),
        };
        Ok(kind)
    }

    /// Rebuild a kind from its name and payload.
    ///
    /// Payload-free kinds ignore any payload given.
    pub fn from_parts(name: &str, actor: Player, payload: Option<Payload>) -> Result<Self> {
        let kind = match (name, payload) {
            ("move", Some(Payload::To(to))) => ActionKind::Move { to },
            ("playSpell", Some(Payload::Name(name))) => ActionKind::PlaySpell { name },
            ("removeFrozen", Some(Payload::Player(player))) => ActionKind::RemoveFrozen { player },
            ("removeFrozen", _) => return Err(GameError::MissingPayload("removeFrozen")),
            (name, _) => Self::from_name(name, actor)?,
        };
        Ok(kind)
    }

    /// The payload carried by this kind, if any.
    #[must_use]
    pub fn payload(&self) -> Option<Payload> {
        match self {
            ActionKind::Move { to } => Some(Payload::To(*to)),
            ActionKind::PlaySpell { name } => Some(Payload::Name(name.clone())),
            ActionKind::RemoveFrozen { player } => Some(Payload::Player(*player)),
            _ => None,
        }
    }

    /// Check if this kind cancels the next unresolved action.
    #[must_use]
    pub const fn is_counter(&self) -> bool {
        matches!(self, ActionKind::CounterSpell | ActionKind::Block)
    }

    /// Check if this kind is reserved and resolves without effect.
    #[must_use]
    pub const fn is_reserved(&self) -> bool {
        matches!(
            self,
            ActionKind::Teleport | ActionKind::Retreat | ActionKind::Stutter | ActionKind::TimeWarp
        )
    }
}

/// Kind-specific data of an action.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Payload {
    /// Destination of a move.
    To(Coordinate),
    /// Spell being played.
    Name(String),
    /// Player being unfrozen.
    Player(Player),
}

/// Serialized form of an [`Action`]: `{kind, actor, payload}`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ActionRecord {
    kind: String,
    actor: Player,
    payload: Option<Payload>,
}

impl From<Action> for ActionRecord {
    fn from(action: Action) -> Self {
        Self {
            kind: action.kind.name().to_string(),
            actor: action.actor,
            payload: action.kind.payload(),
        }
    }
}

impl TryFrom<ActionRecord> for Action {
    type Error = GameError;

    fn try_from(record: ActionRecord) -> Result<Self> {
        let kind = ActionKind::from_parts(&record.kind, record.actor, record.payload)?;
        Ok(Action::new(record.actor, kind))
    }
}

/// A queued unit of game effect. Immutable once created.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ActionRecord", into = "ActionRecord")]
pub struct Action {
    /// Who declared the action.
    pub actor: Player,

    /// What it does.
    pub kind: ActionKind,
}

impl Action {
    /// Create an action.
    #[must_use]
    pub const fn new(actor: Player, kind: ActionKind) -> Self {
        Self { actor, kind }
    }

    /// A move to `to`.
    #[must_use]
    pub const fn movement(actor: Player, to: Coordinate) -> Self {
        Self::new(actor, ActionKind::Move { to })
    }

    /// An attack on the actor's opponent.
    #[must_use]
    pub const fn attack(actor: Player) -> Self {
        Self::new(actor, ActionKind::Attack)
    }

    /// Playing the named spell.
    #[must_use]
    pub fn play_spell(actor: Player, name: impl Into<String>) -> Self {
        Self::new(actor, ActionKind::PlaySpell { name: name.into() })
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ActionKind::Move { to } => write!(f, "{} move {}", self.actor, to),
            ActionKind::PlaySpell { name } => write!(f, "{} playSpell {}", self.actor, name),
            ActionKind::RemoveFrozen { player } => {
                write!(f, "{} removeFrozen {}", self.actor, player)
            }
            kind => write!(f, "{} {}", self.actor, kind.name()),
        }
    }
}

/// One entry of the session history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HistoryEvent {
    /// `start_game` was called.
    GameStarted,

    /// An action's effect was applied (including no-op kinds).
    Resolved(Action),

    /// An action was cancelled by a counter before it resolved.
    Countered {
        /// The cancelled action.
        action: Action,
        /// The counter or block that cancelled it.
        by: Action,
    },

    /// The game reached its terminal state.
    GameEnded {
        /// Every player at or below zero health. Empty for a forced end.
        losers: SmallVec<[Player; 2]>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names_round_trip() {
        let kinds = [
            ActionKind::Attack,
            ActionKind::CounterAttack,
            ActionKind::CounterSpell,
            ActionKind::Freeze,
            ActionKind::RemoveFrozen {
                player: Player::White,
            },
            ActionKind::Block,
            ActionKind::Teleport,
            ActionKind::Retreat,
            ActionKind::Stutter,
            ActionKind::TimeWarp,
        ];

        for kind in kinds {
            let parsed = ActionKind::from_name(kind.name(), Player::White).unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn test_from_parts_uses_payload() {
        let kind = ActionKind::from_parts(
            "removeFrozen",
            Player::Black,
            Some(Payload::Player(Player::White)),
        )
        .unwrap();
        assert_eq!(
            kind,
            ActionKind::RemoveFrozen {
                player: Player::White
            }
        );

        let kind = ActionKind::from_parts("move", Player::Black, kind.payload());
        assert!(matches!(kind, Err(GameError::MissingPayload("move"))));
        assert!(matches!(
            ActionKind::from_parts("removeFrozen", Player::Black, None),
            Err(GameError::MissingPayload("removeFrozen"))
        ));
    }

    #[test]
    fn test_from_name_errors() {
        assert!(matches!(
            ActionKind::from_name("fireball", Player::Black),
            Err(GameError::UnknownActionKind(ref s)) if s == "fireball"
        ));
        assert!(matches!(
            ActionKind::from_name("move", Player::Black),
            Err(GameError::MissingPayload("move"))
        ));
        assert!(matches!(
            ActionKind::from_name("playSpell", Player::Black),
            Err(GameError::MissingPayload("playSpell"))
        ));
    }

    #[test]
    fn test_remove_frozen_targets_actor() {
        let kind = ActionKind::from_name("removeFrozen", Player::Black).unwrap();
        assert_eq!(
            kind,
            ActionKind::RemoveFrozen {
                player: Player::Black
            }
        );
    }

    #[test]
    fn test_kind_classification() {
        assert!(ActionKind::CounterSpell.is_counter());
        assert!(ActionKind::Block.is_counter());
        assert!(!ActionKind::CounterAttack.is_counter());

        assert!(ActionKind::TimeWarp.is_reserved());
        assert!(!ActionKind::Freeze.is_reserved());
    }

    #[test]
    fn test_action_display() {
        let action = Action::movement(Player::Black, Coordinate::new(0, 1));
        assert_eq!(action.to_string(), "black move (0, 1)");
        assert_eq!(Action::attack(Player::White).to_string(), "white attack");
        assert_eq!(
            Action::play_spell(Player::White, "freeze").to_string(),
            "white playSpell freeze"
        );
    }

    #[test]
    fn test_action_wire_shape() {
        let action = Action::movement(Player::Black, Coordinate::new(0, 1));
        let value = serde_json::to_value(&action).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"kind": "move", "actor": "black", "payload": {"to": [0, 1]}})
        );

        let value = serde_json::to_value(Action::new(Player::White, ActionKind::TimeWarp)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"kind": "timeWarp", "actor": "white", "payload": null})
        );

        let value = serde_json::to_value(Action::play_spell(Player::White, "freeze")).unwrap();
        assert_eq!(value["kind"], "playSpell");
        assert_eq!(value["payload"]["name"], "freeze");
    }

    #[test]
    fn test_action_wire_rejects_bad_records() {
        let unknown = serde_json::json!({"kind": "fireball", "actor": "black", "payload": null});
        assert!(serde_json::from_value::<Action>(unknown).is_err());

        let bare_move = serde_json::json!({"kind": "move", "actor": "black", "payload": null});
        assert!(serde_json::from_value::<Action>(bare_move).is_err());

        let bad_actor = serde_json::json!({"kind": "attack", "actor": "red", "payload": null});
        assert!(serde_json::from_value::<Action>(bad_actor).is_err());
    }

    #[test]
    fn test_action_serialization() {
        let action = Action::play_spell(Player::Black, "freeze");
        let json = serde_json::to_string(&action).unwrap();
        let deserialized: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(action, deserialized);

        let event = HistoryEvent::Countered {
            action: Action::attack(Player::Black),
            by: Action::new(Player::White, ActionKind::Block),
        };
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: HistoryEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
