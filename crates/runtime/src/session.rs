//! Session orchestration around the pure quiz engine.
//!
//! [`QuizSession`] owns the oracles and the current [`GameState`] value. Each
//! dispatch runs the engine against the current state, swaps in the result
//! and keeps the bookkeeping the engine deliberately leaves to its caller:
//! the action log and the feedback-clearing deadline.

use quiz_content::ContentFactory;
use quiz_core::{
    CatalogOracle, ClockOracle, ConfigOracle, Env, GameAction, GameConfig, GameEngine, GameEnv,
    GameError, GameState, PcgSelector, RoundSettings, ScoreSubmission, SelectorOracle,
    StaticCatalog, Timestamp, TransitionEvent,
};
use tracing::{debug, info, warn};

use crate::clock::SystemClock;
use crate::config::RuntimeConfig;
use crate::error::{Result, SessionError};
use crate::record::SessionRecord;

/// A running quiz: oracles, current round and action history.
pub struct QuizSession {
    catalog: StaticCatalog,
    selector: Box<dyn SelectorOracle>,
    clock: Box<dyn ClockOracle>,
    config: GameConfig,

    state: GameState,
    record: SessionRecord,
    feedback_deadline: Option<Timestamp>,
}

impl QuizSession {
    /// Seeds the first round from explicit oracles.
    ///
    /// # Errors
    ///
    /// Fails when no region matches `settings`.
    pub fn new(
        catalog: StaticCatalog,
        selector: impl SelectorOracle + 'static,
        clock: impl ClockOracle + 'static,
        config: GameConfig,
        settings: RoundSettings,
        seed: u64,
    ) -> Result<Self> {
        let mut session = Self {
            catalog,
            selector: Box::new(selector),
            clock: Box::new(clock),
            config,
            state: GameState::empty(settings, seed),
            record: SessionRecord::new(seed, settings),
            feedback_deadline: None,
        };

        let state = session
            .engine()
            .initial_state(settings, seed)
            .map_err(SessionError::InitialState)?;
        session.state = state;

        info!(
            seed,
            ?settings,
            total_regions = session.state.total_regions(),
            "session started"
        );
        Ok(session)
    }

    /// Loads content as described by `runtime` and seeds the first round with
    /// the system clock and the PCG selector.
    pub fn bootstrap(runtime: &RuntimeConfig) -> Result<Self> {
        let factory = match &runtime.data_dir {
            Some(dir) => ContentFactory::new(dir),
            None => ContentFactory::embedded(),
        };

        let config = factory.load_config().map_err(SessionError::Content)?;
        let catalog = factory.load_catalog().map_err(SessionError::Content)?;
        debug!(
            regions = catalog.records().len(),
            data_dir = ?factory.data_dir(),
            "content loaded"
        );

        let settings = runtime.settings(config.default_settings);
        let seed = runtime.seed_or_random();
        Self::new(catalog, PcgSelector, SystemClock, config, settings, seed)
    }

    fn env(&self) -> GameEnv<'_> {
        let catalog: &dyn CatalogOracle = &self.catalog;
        let selector: &dyn SelectorOracle = &*self.selector;
        let clock: &dyn ClockOracle = &*self.clock;
        let config: &dyn ConfigOracle = &self.config;
        Env::with_all(catalog, selector, clock, config)
    }

    fn engine(&self) -> GameEngine<'_> {
        GameEngine::new(self.env())
    }

    /// Runs `action` against the current round.
    ///
    /// On success the new state replaces the old one, the action is appended
    /// to the record and the feedback deadline is re-armed. On failure
    /// nothing changes.
    pub fn dispatch(&mut self, action: GameAction) -> Result<TransitionEvent> {
        let was_over = self.state.game_over;

        let outcome = match self.engine().execute(&self.state, &action) {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(?action, %err, code = err.error_code(), "action rejected");
                return Err(err.into());
            }
        };

        debug!(action = ?action, event = ?outcome.event, "action executed");

        self.state = outcome.state;
        self.record.actions.push(action);
        self.update_feedback_deadline(&outcome.event);

        match &outcome.event {
            TransitionEvent::RoundStarted {
                settings,
                total_regions,
            } => {
                info!(
                    difficulty = %settings.difficulty,
                    continent = %settings.continent,
                    mode = %settings.mode,
                    total_regions,
                    "round started"
                );
            }
            _ if self.state.game_over && !was_over => {
                info!(
                    score = self.state.score,
                    errors = self.state.errors,
                    best_streak = self.state.best_streak,
                    duration_secs = self.duration_secs(),
                    "round finished"
                );
            }
            _ => {}
        }

        Ok(outcome.event)
    }

    fn update_feedback_deadline(&mut self, event: &TransitionEvent) {
        match event {
            TransitionEvent::Correct { .. }
            | TransitionEvent::Wrong { .. }
            | TransitionEvent::Skipped { .. } => {
                let now = self.clock.now();
                self.feedback_deadline = self
                    .config
                    .pending_feedback_ms(
                        self.state.last_answer_correct,
                        self.state.skipped_region.is_some(),
                    )
                    .map(|delay| now.plus_millis(delay));
            }
            TransitionEvent::RoundStarted { .. } | TransitionEvent::FeedbackCleared => {
                self.feedback_deadline = None;
            }
            TransitionEvent::Ignored => {}
        }
    }

    /// Dispatches `ClearFeedback` once the feedback deadline has passed.
    ///
    /// Returns `None` when there is nothing to clear yet.
    pub fn poll_feedback(&mut self, now: Timestamp) -> Result<Option<TransitionEvent>> {
        match self.feedback_deadline {
            Some(deadline) if deadline <= now => {
                self.dispatch(GameAction::ClearFeedback).map(Some)
            }
            _ => Ok(None),
        }
    }

    /// Instant at which the current feedback should be cleared.
    pub fn feedback_deadline(&self) -> Option<Timestamp> {
        self.feedback_deadline
    }

    /// Rebuilds a state from a seed, settings and action log with this
    /// session's oracles. The session itself is left untouched.
    pub fn replay(
        &self,
        seed: u64,
        settings: RoundSettings,
        actions: &[GameAction],
    ) -> Result<GameState> {
        let engine = self.engine();
        let mut state = engine
            .initial_state(settings, seed)
            .map_err(SessionError::InitialState)?;

        for action in actions {
            state = engine.execute(&state, action)?.state;
        }
        Ok(state)
    }

    /// Replays this session's own record.
    pub fn replay_record(&self, record: &SessionRecord) -> Result<GameState> {
        self.replay(record.seed, record.settings, &record.actions)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn catalog(&self) -> &StaticCatalog {
        &self.catalog
    }

    pub fn record(&self) -> &SessionRecord {
        &self.record
    }

    pub fn now(&self) -> Timestamp {
        self.clock.now()
    }

    pub fn total_regions(&self) -> usize {
        self.state.total_regions()
    }

    pub fn progress(&self) -> f64 {
        self.state.progress()
    }

    /// Round duration measured against the session clock.
    pub fn duration_secs(&self) -> u64 {
        self.state.duration_secs(self.now())
    }

    /// Score record of the finished round, if it is finished.
    pub fn submission(&self) -> Option<ScoreSubmission> {
        ScoreSubmission::from_state(&self.state, self.now())
    }
}
