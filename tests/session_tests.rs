//! Game session scenario tests.
//!
//! Full declare/resolve sequences through the public session API.

use grid_duel::core::{Coordinate, GameError, HistoryEvent, Player};
use grid_duel::rules::GameResult;
use grid_duel::session::GameSession;
use grid_duel::{DuelState, GameConfig};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Legal move, resolve, then an illegal two-step move is rejected.
#[test]
fn test_move_scenario() {
    init_tracing();
    let mut session = GameSession::default();

    session.submit_move_intent(Player::Black, (0, 1)).unwrap();
    assert_eq!(session.priority(), Player::White);
    assert_eq!(session.stack().len(), 1);

    session.resolve_stack().unwrap();
    assert_eq!(session.player(Player::Black).position, Coordinate::new(0, 1));
    assert_eq!(session.priority(), Player::White);
    assert_eq!(session.turn(), Player::Black);

    let history_len = session.history().len();
    let err = session.submit_move_intent(Player::Black, (2, 2)).unwrap_err();
    assert!(matches!(err, GameError::InvalidMove { .. }));
    assert!(session.stack().is_empty());
    assert_eq!(session.player(Player::Black).position, Coordinate::new(0, 1));
    assert_eq!(session.history().len(), history_len);
    assert_eq!(session.priority(), Player::White);
}

/// Three attacks from white knock black out.
#[test]
fn test_attack_scenario() {
    init_tracing();
    let mut session = GameSession::default();

    session.submit_attack_intent(Player::White).unwrap();
    session.resolve_stack().unwrap();
    assert_eq!(session.player(Player::Black).health, 2);
    assert!(!session.game_ended());

    for _ in 0..2 {
        session.submit_attack_intent(Player::White).unwrap();
        session.resolve_stack().unwrap();
    }

    assert!(session.player(Player::Black).health <= 0);
    assert!(session.game_ended());
    assert_eq!(session.result(), Some(GameResult::Winner(Player::White)));
    assert_eq!(session.losers().as_slice(), &[Player::Black]);
    assert!(matches!(
        session.history().front(),
        Some(HistoryEvent::GameEnded { .. })
    ));
}

/// Once ended, the game stays ended.
#[test]
fn test_game_end_is_monotone() {
    let mut session = GameSession::new(GameConfig::new().starting_health(1));

    session.submit_attack_intent(Player::Black).unwrap();
    session.resolve_stack().unwrap();
    assert!(session.game_ended());

    assert!(matches!(
        session.submit_attack_intent(Player::White),
        Err(GameError::GameOver)
    ));
    assert!(session.resolve_stack().is_err());
    assert!(session.advance_turn().is_err());
    session.start_game();
    session.end_game();

    assert!(session.game_ended());
    assert_eq!(session.result(), Some(GameResult::Winner(Player::Black)));
}

/// Both players dropping to zero together is a draw with two losers.
#[test]
fn test_double_ko() {
    let mut session = GameSession::new(GameConfig::new().starting_health(1));

    session.submit_attack_intent(Player::Black).unwrap();
    session.submit_attack_intent(Player::White).unwrap();
    let report = session.resolve_stack().unwrap();

    assert!(session.game_ended());
    assert_eq!(report.result, Some(GameResult::Draw));
    assert_eq!(
        session.losers().as_slice(),
        &[Player::Black, Player::White]
    );
}

/// Hands shrink when spells are played, and absent cards are tolerated.
#[test]
fn test_spell_hand_bookkeeping() {
    let config = GameConfig::new().starting_hand(Player::Black, ["freeze", "block"]);
    let mut session = GameSession::new(config);

    session
        .submit_play_spell_intent(Player::Black, "freeze")
        .unwrap();
    assert_eq!(session.player(Player::Black).hand, vec!["block".to_string()]);

    session
        .submit_play_spell_intent(Player::White, "teleport")
        .unwrap();
    session.resolve_stack().unwrap();

    assert_eq!(session.player(Player::Black).hand, vec!["block".to_string()]);
    assert!(session.player(Player::White).hand.is_empty());

    session.add_to_hand(Player::White, "stutter");
    assert_eq!(session.player(Player::White).hand, vec!["stutter".to_string()]);
}

/// The string boundary rejects unknown names before touching state.
#[test]
fn test_named_intents() {
    let mut session = GameSession::default();

    session.submit_named_intent("black", "freeze").unwrap();
    assert_eq!(session.stack().len(), 1);

    assert!(matches!(
        session.submit_named_intent("red", "attack"),
        Err(GameError::UnknownPlayer(_))
    ));
    assert!(matches!(
        session.submit_named_intent("white", "fireball"),
        Err(GameError::UnknownActionKind(_))
    ));
    assert!(matches!(
        session.submit_named_intent("white", "move"),
        Err(GameError::MissingPayload("move"))
    ));
    assert_eq!(session.stack().len(), 1);
    assert_eq!(session.priority(), Player::White);

    session.resolve_stack().unwrap();
    assert!(session.player(Player::White).frozen);

    // White unfreezes itself by name while frozen.
    session.submit_named_intent("white", "removeFrozen").unwrap();
    session.resolve_stack().unwrap();
    assert!(!session.player(Player::White).frozen);
}

/// Snapshots are independent of later mutation and survive encoding.
#[test]
fn test_snapshot_and_restore() {
    let mut session = GameSession::default();
    session.submit_move_intent(Player::White, (6, 5)).unwrap();

    let snapshot = session.snapshot();
    session.resolve_stack().unwrap();

    assert_eq!(snapshot.stack.len(), 1);
    assert_eq!(snapshot.player(Player::White).position, Coordinate::new(6, 6));

    let bytes = snapshot.to_bytes().unwrap();
    let decoded = DuelState::from_bytes(&bytes).unwrap();
    assert_eq!(decoded, snapshot);

    let json = serde_json::to_string(&snapshot).unwrap();
    let from_json: DuelState = serde_json::from_str(&json).unwrap();
    assert_eq!(from_json, snapshot);

    let value = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(value["priority"], "black");
    assert_eq!(
        value["stack"],
        serde_json::json!([{"kind": "move", "actor": "white", "payload": {"to": [6, 5]}}])
    );

    let mut restored = GameSession::from_state(GameConfig::default(), decoded).unwrap();
    restored.resolve_stack().unwrap();
    assert_eq!(restored.player(Player::White).position, Coordinate::new(6, 5));
}

/// Corrupt bytes produce a codec error rather than a panic.
#[test]
fn test_decode_garbage() {
    let err = DuelState::from_bytes(&[0xff, 0x01]).unwrap_err();
    assert!(matches!(err, GameError::Codec(_)));
}

/// A full exchange of turns.
#[test]
fn test_turn_exchange() {
    let mut session = GameSession::new(GameConfig::new().enforce_priority(true));

    session.submit_move_intent(Player::Black, (1, 0)).unwrap();
    session.pass(Player::White).unwrap();
    session.resolve_stack().unwrap();
    assert_eq!(session.advance_turn().unwrap(), Player::White);

    session.submit_move_intent(Player::White, (5, 6)).unwrap();
    session.submit_attack_intent(Player::Black).unwrap();
    session.resolve_stack().unwrap();

    assert_eq!(session.player(Player::Black).position, Coordinate::new(1, 0));
    assert_eq!(session.player(Player::White).position, Coordinate::new(5, 6));
    assert_eq!(session.player(Player::White).health, 2);
    assert_eq!(session.state().control.turn_number(), 2);
}
