//! Session engine for tic-tac-toe.
//!
//! One [`Engine`] owns a session: the configured players, the current
//! round and the running score. Every operation runs to completion and
//! either applies its transition or rejects it without touching state.
//! Callers redraw from the returned [`Snapshot`].

use super::invariants::{InvariantSet, RoundInvariants};
use super::player::{Player, PlayerSetup, Players};
use super::rules::check_termination;
use super::{EngineError, Mark, Move, Outcome, Position, RoundState, Score};
use crate::clock::{Clock, SystemClock};
use crate::store::{ScoreStore, StoreError};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// Everything a renderer needs to redraw after an operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// The current round.
    pub round: RoundState,
    /// Session score totals.
    pub score: Score,
    /// Configured players, absent while awaiting setup.
    pub players: Option<Players>,
    /// Whether undo is currently allowed.
    pub can_undo: bool,
}

/// Result of an accepted move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveReport {
    /// State after the move.
    pub snapshot: Snapshot,
    /// Set when the move ended the round.
    pub outcome: Option<Outcome>,
}

/// Tic-tac-toe session engine.
#[derive(Debug)]
pub struct Engine<S, C = SystemClock> {
    round: RoundState,
    score: Score,
    players: Option<Players>,
    store: S,
    clock: C,
}

impl<S: ScoreStore> Engine<S> {
    /// Creates an engine timed by the system clock.
    pub fn new(store: S) -> Self {
        Self::with_clock(store, SystemClock::new())
    }
}

impl<S: ScoreStore, C: Clock> Engine<S, C> {
    /// Creates an engine with an explicit clock, loading the score from `store`.
    #[instrument(skip(store, clock))]
    pub fn with_clock(store: S, clock: C) -> Self {
        let score = store.load();
        info!(?score, "Engine created");
        Self {
            round: RoundState::new(),
            score,
            players: None,
            store,
            clock,
        }
    }

    /// Configures both players and starts a fresh round.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfiguration`] naming the first
    /// player whose display name is empty after trimming.
    #[instrument(skip(self, first, second))]
    pub fn start_round(
        &mut self,
        first: PlayerSetup,
        second: PlayerSetup,
    ) -> Result<Snapshot, EngineError> {
        let first = Player::from_setup(Mark::First, first)
            .ok_or(EngineError::InvalidConfiguration(Mark::First))?;
        let second = Player::from_setup(Mark::Second, second)
            .ok_or(EngineError::InvalidConfiguration(Mark::Second))?;

        info!(
            first = %first.display_name(),
            second = %second.display_name(),
            "Players configured"
        );
        self.players = Some(Players::new(first, second));
        self.round = RoundState::new();
        Ok(self.snapshot())
    }

    /// Plays the current mark at a board index.
    ///
    /// # Errors
    ///
    /// See [`Engine::place`]; additionally [`EngineError::OutOfBounds`]
    /// when `position` is outside 0-8.
    pub fn apply_move(&mut self, position: i64) -> Result<MoveReport, EngineError> {
        let position = Position::try_from(position).inspect_err(|e| {
            debug!(error = %e, "Move rejected");
        })?;
        self.place(position)
    }

    /// Plays the current mark at `position`.
    ///
    /// On a terminal move the score is credited and handed to the store.
    ///
    /// # Errors
    ///
    /// - [`EngineError::SetupRequired`] before players are configured
    /// - [`EngineError::RoundAlreadyOver`] after a win or draw
    /// - [`EngineError::CellOccupied`] if the square holds a mark
    #[instrument(skip(self), fields(turn = %self.round.current_turn()))]
    pub fn place(&mut self, position: Position) -> Result<MoveReport, EngineError> {
        if self.players.is_none() {
            debug!("Move rejected: no players");
            return Err(EngineError::SetupRequired);
        }
        if self.round.is_over() {
            debug!("Move rejected: round over");
            return Err(EngineError::RoundAlreadyOver);
        }
        if !self.round.board().is_empty(position) {
            debug!("Move rejected: occupied");
            return Err(EngineError::CellOccupied(position));
        }

        let mov = Move::new(self.round.current_turn(), position, self.clock.now());
        let outcome = self.round.place(mov);
        debug!(%mov, moves = self.round.move_log().len(), "Move applied");
        self.assert_invariants();

        if let Some(outcome) = &outcome {
            info!(%outcome, "Round finished");
            self.score.record(outcome);
            self.persist_score();
        }

        Ok(MoveReport {
            snapshot: self.snapshot(),
            outcome,
        })
    }

    /// Evaluates the current board against the termination rules.
    ///
    /// Pure; the engine applies the same check after every move.
    pub fn check_termination(&self) -> Option<Outcome> {
        check_termination(self.round.board())
    }

    /// Takes back the last move and returns the turn to its mark.
    ///
    /// # Errors
    ///
    /// - [`EngineError::NothingToUndo`] with an empty move log
    /// - [`EngineError::RoundAlreadyOver`] after a win or draw
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> Result<Snapshot, EngineError> {
        if self.round.move_log().is_empty() {
            debug!("Undo rejected: empty log");
            return Err(EngineError::NothingToUndo);
        }
        if self.round.is_over() {
            debug!("Undo rejected: round over");
            return Err(EngineError::RoundAlreadyOver);
        }

        if let Some(mov) = self.round.unplace() {
            debug!(%mov, "Move undone");
        }
        self.assert_invariants();
        Ok(self.snapshot())
    }

    /// Clears the board for another round with the same players.
    #[instrument(skip(self))]
    pub fn reset_round(&mut self) -> Snapshot {
        debug!("Round reset");
        self.round = RoundState::new();
        self.snapshot()
    }

    /// Clears the round and the players, returning to setup.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) -> Snapshot {
        info!("New game, awaiting setup");
        self.round = RoundState::new();
        self.players = None;
        self.snapshot()
    }

    /// Zeroes the score and persists it.
    ///
    /// A failed save is logged and the in-memory reset still applies.
    #[instrument(skip(self))]
    pub fn reset_score(&mut self) -> Snapshot {
        info!("Score reset");
        self.score = Score::default();
        self.persist_score();
        self.snapshot()
    }

    /// Zeroes the score and persists it, reporting a failed save.
    ///
    /// # Errors
    ///
    /// Returns the store's [`StoreError`] when the zeroed record could
    /// not be written. The in-memory score is zeroed either way.
    #[instrument(skip(self))]
    pub fn try_reset_score(&mut self) -> Result<Snapshot, StoreError> {
        info!("Score reset");
        self.score = Score::default();
        self.store.save(&self.score)?;
        Ok(self.snapshot())
    }

    /// Current state for rendering.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            round: self.round.clone(),
            score: self.score,
            players: self.players.clone(),
            can_undo: self.round.can_undo(),
        }
    }

    /// The current round.
    pub fn round(&self) -> &RoundState {
        &self.round
    }

    /// Session score.
    pub fn score(&self) -> Score {
        self.score
    }

    /// Configured players, if setup has completed.
    pub fn players(&self) -> Option<&Players> {
        self.players.as_ref()
    }

    /// The player holding `mark`, if configured.
    pub fn player(&self, mark: Mark) -> Option<&Player> {
        self.players.as_ref().map(|p| p.get(mark))
    }

    /// Whether players have been configured.
    pub fn is_configured(&self) -> bool {
        self.players.is_some()
    }

    /// Whether undo is currently allowed.
    pub fn can_undo(&self) -> bool {
        self.round.can_undo()
    }

    /// The backing score store.
    pub fn store(&self) -> &S {
        &self.store
    }

    fn persist_score(&mut self) {
        if let Err(e) = self.store.save(&self.score) {
            warn!(error = %e, "Score not persisted");
        }
    }

    fn assert_invariants(&self) {
        if let Err(violations) = RoundInvariants::check_all(&self.round) {
            for violation in &violations {
                warn!(%violation, "Round invariant violated");
            }
            debug_assert!(violations.is_empty(), "round invariants violated");
        }
    }
}
