//! The game session: intent validation, queuing and resolution.

use im::Vector;
use smallvec::SmallVec;
use tracing::{debug, info};

use crate::core::{
    is_legal_move, Action, ActionKind, Coordinate, DuelState, GameConfig, GameError, HistoryEvent,
    Player, PlayerState, Result, MAX_PLAYERS,
};
use crate::rules::{GameResult, ResolutionEngine, ResolutionReport};
use crate::stack::ActionStack;

/// One duel between black and white.
///
/// Owns the whole state; callers mutate it only through the intent
/// methods and read it through accessors or [`GameSession::snapshot`].
#[derive(Clone, Debug)]
pub struct GameSession {
    config: GameConfig,
    state: DuelState,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl GameSession {
    /// Create a session from a configuration.
    pub fn new(config: GameConfig) -> Self {
        let state = DuelState::new(&config);
        let mut session = Self { config, state };
        if session.config.start_immediately {
            session.start_game();
        }
        session
    }

    /// Rebuild a session around a previously captured state.
    ///
    /// The state must satisfy [`DuelState::validate`] and fit within the
    /// config's stack depth, which becomes the stack's capacity.
    pub fn from_state(config: GameConfig, mut state: DuelState) -> Result<Self> {
        state.validate()?;
        if state.stack.len() > config.max_stack_depth {
            return Err(GameError::StackFull {
                capacity: config.max_stack_depth,
            });
        }
        state.stack.set_capacity(config.max_stack_depth);
        debug!(pending = state.stack.len(), "Session restored");
        Ok(Self { config, state })
    }

    // === Lifecycle ===

    /// Mark the game started. Calling it again changes nothing.
    pub fn start_game(&mut self) {
        if self.state.game_started {
            return;
        }
        self.state.game_started = true;
        self.state.record(HistoryEvent::GameStarted);
        info!("Game started");
    }

    /// Force the game into its terminal state.
    pub fn end_game(&mut self) {
        if self.state.game_ended {
            return;
        }
        self.state.game_ended = true;
        let losers = self.state.losers();
        info!(losers = ?losers, "Game ended by caller");
        self.state.record(HistoryEvent::GameEnded { losers });
    }

    /// Note that a client attached. Saturates at two.
    pub fn player_joined(&mut self) -> u8 {
        if self.state.players_joined < MAX_PLAYERS {
            self.state.players_joined += 1;
        }
        self.state.players_joined
    }

    /// Deal an effect into a player's hand.
    pub fn add_to_hand(&mut self, player: Player, card: impl Into<String>) {
        self.state.player_mut(player).hand.push(card.into());
    }

    // === Intents ===

    /// Declare a one-step move for `actor`.
    ///
    /// Rejected with `InvalidMove` if the destination is off the board or
    /// not orthogonally adjacent to the actor's current position.
    pub fn submit_move_intent(&mut self, actor: Player, to: impl Into<Coordinate>) -> Result<()> {
        let to = to.into();
        self.check_can_act(actor)?;

        let from = self.state.player(actor).position;
        if !is_legal_move(from, to) {
            debug!(%actor, %from, %to, "Rejected illegal move");
            return Err(GameError::InvalidMove { from, to });
        }

        self.queue(Action::movement(actor, to))
    }

    /// Declare an attack on `actor`'s opponent.
    pub fn submit_attack_intent(&mut self, actor: Player) -> Result<()> {
        self.check_can_act(actor)?;
        self.queue(Action::attack(actor))
    }

    /// Play a spell from `actor`'s hand.
    ///
    /// The card leaves the hand now; the spell's own effect is declared
    /// separately with [`GameSession::submit_effect_intent`]. A card that is
    /// not in hand is accepted unless `require_card_in_hand` is set.
    pub fn submit_play_spell_intent(&mut self, actor: Player, spell: impl Into<String>) -> Result<()> {
        let spell = spell.into();
        self.check_can_act(actor)?;

        if self.config.require_card_in_hand && !self.state.player(actor).has_card(&spell) {
            debug!(%actor, %spell, "Rejected spell not in hand");
            return Err(GameError::CardNotInHand {
                player: actor,
                card: spell,
            });
        }

        self.queue(Action::play_spell(actor, spell.clone()))?;
        self.state.player_mut(actor).remove_card(&spell);
        Ok(())
    }

    /// Declare any kind of action.
    ///
    /// Moves and spells go through their own validation; every other kind
    /// is queued as is. A frozen player may still declare `RemoveFrozen`
    /// on themselves.
    pub fn submit_effect_intent(&mut self, actor: Player, kind: ActionKind) -> Result<()> {
        match kind {
            ActionKind::Move { to } => self.submit_move_intent(actor, to),
            ActionKind::PlaySpell { name } => self.submit_play_spell_intent(actor, name),
            ActionKind::RemoveFrozen { player } if player == actor => {
                self.check_session_open()?;
                self.check_priority(actor)?;
                self.queue(Action::new(actor, ActionKind::RemoveFrozen { player }))
            }
            kind => {
                self.check_can_act(actor)?;
                self.queue(Action::new(actor, kind))
            }
        }
    }

    /// Declare an action from its string form, e.g. `("white", "freeze")`.
    ///
    /// Fails with `UnknownPlayer` or `UnknownActionKind` before touching
    /// any state.
    pub fn submit_named_intent(&mut self, actor: &str, kind: &str) -> Result<()> {
        let actor: Player = actor.parse()?;
        let kind = ActionKind::from_name(kind, actor)?;
        self.submit_effect_intent(actor, kind)
    }

    /// Give up priority without acting. Returns the new holder.
    ///
    /// Frozen players may still pass.
    pub fn pass(&mut self, actor: Player) -> Result<Player> {
        self.check_session_open()?;
        self.check_priority(actor)?;

        let holder = self.state.control.toggle_priority();
        debug!(%actor, priority = %holder, "Priority passed");
        Ok(holder)
    }

    /// End the current turn. Returns the player whose turn it now is.
    pub fn advance_turn(&mut self) -> Result<Player> {
        self.check_session_open()?;
        let turn = self.state.control.advance_turn();
        debug!(%turn, turn_number = self.state.control.turn_number(), "Turn advanced");
        Ok(turn)
    }

    /// Resolve every pending action, then check for a winner.
    pub fn resolve_stack(&mut self) -> Result<ResolutionReport> {
        self.check_session_open()?;
        Ok(ResolutionEngine::resolve(&mut self.state))
    }

    // === Accessors ===

    /// Session configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Borrow the full state.
    #[must_use]
    pub fn state(&self) -> &DuelState {
        &self.state
    }

    /// Cheap copy of the full state for rendering or broadcast.
    #[must_use]
    pub fn snapshot(&self) -> DuelState {
        self.state.clone()
    }

    /// Check if the game has started.
    #[must_use]
    pub fn game_started(&self) -> bool {
        self.state.game_started
    }

    /// Check if the game has ended.
    #[must_use]
    pub fn game_ended(&self) -> bool {
        self.state.game_ended
    }

    /// Number of clients attached, 0-2.
    #[must_use]
    pub fn players_joined(&self) -> u8 {
        self.state.players_joined
    }

    /// Player holding priority.
    #[must_use]
    pub fn priority(&self) -> Player {
        self.state.priority()
    }

    /// Player whose turn it is.
    #[must_use]
    pub fn turn(&self) -> Player {
        self.state.turn()
    }

    /// Get a player's state.
    #[must_use]
    pub fn player(&self, player: Player) -> &PlayerState {
        self.state.player(player)
    }

    /// Pending actions, next to resolve first.
    #[must_use]
    pub fn stack(&self) -> &ActionStack {
        &self.state.stack
    }

    /// History, most recent first.
    #[must_use]
    pub fn history(&self) -> &Vector<HistoryEvent> {
        &self.state.history
    }

    /// Players at or below zero health.
    #[must_use]
    pub fn losers(&self) -> SmallVec<[Player; 2]> {
        self.state.losers()
    }

    /// Outcome of a finished game, if anyone lost.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if !self.state.game_ended {
            return None;
        }
        GameResult::from_losers(&self.state.losers())
    }

    // === Validation ===

    fn check_session_open(&self) -> Result<()> {
        if self.state.game_ended {
            return Err(GameError::GameOver);
        }
        if !self.state.game_started {
            return Err(GameError::NotStarted);
        }
        Ok(())
    }

    fn check_priority(&self, actor: Player) -> Result<()> {
        let holder = self.state.priority();
        if self.config.enforce_priority && holder != actor {
            return Err(GameError::NotYourPriority { actor, holder });
        }
        Ok(())
    }

    fn check_can_act(&self, actor: Player) -> Result<()> {
        self.check_session_open()?;
        self.check_priority(actor)?;
        if self.config.enforce_frozen && self.state.player(actor).frozen {
            debug!(%actor, "Rejected intent from frozen player");
            return Err(GameError::PlayerFrozen(actor));
        }
        Ok(())
    }

    /// Push a validated action and hand priority over.
    fn queue(&mut self, action: Action) -> Result<()> {
        let summary = action.to_string();
        self.state.stack.push(action)?;
        let priority = self.state.control.toggle_priority();
        debug!(action = %summary, %priority, "Queued action");
        Ok(())
    }
}
