//! Round seeding and action execution pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. It never
//! mutates the state it is given: each call clones the input, drives the
//! matching transition on the clone and hands back the new value together
//! with a [`TransitionEvent`].

mod errors;
mod reducer;
mod transition;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};
pub use reducer::RoundReducer;

use crate::action::{GameAction, TransitionEvent, seed_round};
use crate::env::GameEnv;
use crate::state::{GameState, InitializationError, RoundSettings};

/// Complete outcome of action execution.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExecutionOutcome {
    /// The state after the action.
    pub state: GameState,

    /// What the action did.
    pub event: TransitionEvent,
}

/// Pure reducer over [`GameState`], bound to a set of oracles.
///
/// All transitions flow through the three-phase action pipeline:
/// pre_validate → apply → post_validate
pub struct GameEngine<'a> {
    env: GameEnv<'a>,
}

impl<'a> GameEngine<'a> {
    /// Creates a new game engine over the given environment.
    pub fn new(env: GameEnv<'a>) -> Self {
        Self { env }
    }

    /// Seeds the opening state of a round.
    ///
    /// # Errors
    ///
    /// Returns [`InitializationError`] when an oracle is missing or no region
    /// matches `settings`.
    pub fn initial_state(
        &self,
        settings: RoundSettings,
        round_seed: u64,
    ) -> Result<GameState, InitializationError> {
        seed_round(settings, round_seed, &self.env)
    }

    /// Applies `action` to a copy of `state` and returns the result.
    ///
    /// Select/Skip without an active target yield an unchanged copy and
    /// [`TransitionEvent::Ignored`].
    pub fn execute(
        &self,
        state: &GameState,
        action: &GameAction,
    ) -> Result<ExecutionOutcome, ExecuteError> {
        let mut next = state.clone();
        let event = transition::execute_transition(action, &mut next, &self.env)?;
        Ok(ExecutionOutcome { state: next, event })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::env::{Env, FixedClock, OracleError, ScriptedSelector, StaticCatalog};
    use crate::error::GameError;
    use crate::state::{Continent, Difficulty, GameMode, RoundError, Timestamp};

    struct Fixture {
        catalog: StaticCatalog,
        selector: ScriptedSelector,
        clock: FixedClock,
        config: GameConfig,
    }

    impl Fixture {
        fn new(names: &[&str], script: &[&str]) -> Self {
            Self {
                catalog: StaticCatalog::from_names(
                    names.iter().copied(),
                    100_000_000,
                    Continent::Europe,
                ),
                selector: ScriptedSelector::new(script.iter().copied()),
                clock: FixedClock::at_millis(1_000),
                config: GameConfig::default(),
            }
        }

        fn engine(&self) -> GameEngine<'_> {
            GameEngine::new(
                Env::with_all(&self.catalog, &self.selector, &self.clock, &self.config)
                    .into_game_env(),
            )
        }
    }

    fn easy_full() -> RoundSettings {
        RoundSettings::new(Difficulty::Easy, Continent::World, GameMode::Full)
    }

    fn run(engine: &GameEngine<'_>, state: &GameState, action: GameAction) -> GameState {
        engine.execute(state, &action).unwrap().state
    }

    #[test]
    fn initial_state_draws_first_target() {
        let fixture = Fixture::new(&["A", "B", "C"], &["B"]);
        let state = fixture.engine().initial_state(easy_full(), 1).unwrap();

        assert_eq!(state.region_to_find.as_deref(), Some("B"));
        assert_eq!(state.regions_remaining, vec!["A", "C"]);
        assert!(state.regions_found.is_empty());
        assert_eq!(state.start_time, None);
        assert_eq!(state.total_regions(), 3);
    }

    #[test]
    fn three_strikes_force_a_skip() {
        let fixture = Fixture::new(&["A", "B"], &["A", "B"]);
        let engine = fixture.engine();
        let state = engine.initial_state(easy_full(), 1).unwrap();

        let state = run(&engine, &state, GameAction::select("X"));
        assert_eq!(state.errors, 1);
        assert_eq!(state.current_guess_errors, 1);
        assert_eq!(state.streak, 0);
        assert_eq!(state.last_answer_correct, Some(false));
        assert_eq!(state.selected_region.as_deref(), Some("X"));

        let state = run(&engine, &state, GameAction::select("X"));
        assert_eq!(state.errors, 2);
        assert_eq!(state.current_guess_errors, 2);

        let outcome = engine.execute(&state, &GameAction::select("X")).unwrap();
        let state = outcome.state;
        assert_eq!(
            outcome.event,
            TransitionEvent::Skipped {
                region: "A".into(),
                forced: true
            }
        );
        assert_eq!(state.errors, 3);
        assert_eq!(state.regions_found, vec!["A"]);
        assert_eq!(state.skipped_region.as_deref(), Some("A"));
        assert_eq!(state.region_to_find.as_deref(), Some("B"));
        assert_eq!(state.current_guess_errors, 0);
        assert_eq!(state.selected_region, None);
    }

    #[test]
    fn single_region_round_ends_on_first_hit() {
        let fixture = Fixture::new(&["Z"], &[]);
        let engine = fixture.engine();
        let state = engine.initial_state(easy_full(), 1).unwrap();

        let state = run(&engine, &state, GameAction::select("Z"));

        assert!(state.game_over);
        assert_eq!(state.region_to_find, None);
        assert_eq!(state.regions_found, vec!["Z"]);
        assert_eq!(state.score, 1);
        assert_eq!(state.streak, 1);
        assert_eq!(state.best_streak, 1);
        assert_eq!(state.start_time, Some(Timestamp(1_000)));
    }

    #[test]
    fn correct_after_strike_resets_streak_to_one() {
        let fixture = Fixture::new(&["A", "B", "C"], &["A", "B", "C"]);
        let engine = fixture.engine();
        let state = engine.initial_state(easy_full(), 1).unwrap();

        let state = run(&engine, &state, GameAction::select("A"));
        assert_eq!(state.streak, 1);
        let state = run(&engine, &state, GameAction::select("nope"));
        assert_eq!(state.streak, 0);
        let state = run(&engine, &state, GameAction::select("B"));
        assert_eq!(state.streak, 1);
        assert_eq!(state.best_streak, 1);
        let state = run(&engine, &state, GameAction::select("C"));
        assert_eq!(state.streak, 2);
        assert_eq!(state.best_streak, 2);
        assert!(state.game_over);
        assert_eq!(state.regions_found, vec!["C", "B", "A"]);
    }

    #[test]
    fn skip_on_last_target_ends_round() {
        let fixture = Fixture::new(&["A"], &[]);
        let engine = fixture.engine();
        let state = engine.initial_state(easy_full(), 1).unwrap();

        let state = run(&engine, &state, GameAction::SkipRegion);

        assert!(state.game_over);
        assert_eq!(state.errors, 1);
        assert_eq!(state.score, 0);
        assert_eq!(state.skipped_region.as_deref(), Some("A"));
        assert_eq!(state.regions_found, vec!["A"]);
    }

    #[test]
    fn actions_after_game_over_are_ignored() {
        let fixture = Fixture::new(&["A"], &[]);
        let engine = fixture.engine();
        let state = engine.initial_state(easy_full(), 1).unwrap();
        let done = run(&engine, &state, GameAction::select("A"));

        for action in [GameAction::select("A"), GameAction::SkipRegion] {
            let outcome = engine.execute(&done, &action).unwrap();
            assert_eq!(outcome.event, TransitionEvent::Ignored);
            assert_eq!(outcome.state, done);
        }
    }

    #[test]
    fn clear_feedback_touches_only_feedback() {
        let fixture = Fixture::new(&["A", "B"], &["A"]);
        let engine = fixture.engine();
        let state = engine.initial_state(easy_full(), 1).unwrap();
        let state = run(&engine, &state, GameAction::SkipRegion);

        let cleared = run(&engine, &state, GameAction::ClearFeedback);

        let mut expected = state.clone();
        expected.last_answer_correct = None;
        expected.skipped_region = None;
        assert_eq!(cleared, expected);
    }

    #[test]
    fn change_difficulty_discards_progress() {
        let fixture = Fixture::new(&["A", "B", "C"], &["A", "B"]);
        let engine = fixture.engine();
        let state = engine.initial_state(easy_full(), 1).unwrap();
        let state = run(&engine, &state, GameAction::select("A"));
        let state = run(&engine, &state, GameAction::select("wrong"));

        let outcome = engine
            .execute(&state, &GameAction::ChangeDifficulty(Difficulty::Hard))
            .unwrap();
        let state = outcome.state;

        assert!(matches!(
            outcome.event,
            TransitionEvent::RoundStarted {
                total_regions: 3,
                ..
            }
        ));
        assert_eq!(state.settings.difficulty, Difficulty::Hard);
        assert_eq!(state.score, 0);
        assert_eq!(state.errors, 0);
        assert_eq!(state.streak, 0);
        assert_eq!(state.best_streak, 0);
        assert!(state.regions_found.is_empty());
        assert_eq!(state.start_time, None);
        assert_eq!(state.total_regions(), 3);
    }

    #[test]
    fn reset_keeps_settings_and_changes_seed() {
        let fixture = Fixture::new(&["A", "B"], &[]);
        let engine = fixture.engine();
        let settings = easy_full().with_mode(GameMode::Quick);
        let state = engine.initial_state(settings, 1).unwrap();

        let reset = run(&engine, &state, GameAction::ResetGame);

        assert_eq!(reset.settings, settings);
        assert_ne!(reset.round_seed, state.round_seed);
    }

    #[test]
    fn quick_round_uses_configured_size() {
        let mut fixture = Fixture::new(&["A", "B", "C", "D"], &[]);
        fixture.config = GameConfig::new().with_quick_round_size(2);
        let engine = fixture.engine();

        let state = engine
            .initial_state(easy_full().with_mode(GameMode::Quick), 1)
            .unwrap();
        assert_eq!(state.total_regions(), 2);

        let full = run(&engine, &state, GameAction::ChangeGameMode(GameMode::Full));
        assert_eq!(full.total_regions(), 4);
    }

    #[test]
    fn empty_continent_fails_and_leaves_state_alone() {
        let fixture = Fixture::new(&["A", "B"], &[]);
        let engine = fixture.engine();
        let state = engine.initial_state(easy_full(), 1).unwrap();

        let err = engine
            .execute(&state, &GameAction::ChangeContinent(Continent::Africa))
            .unwrap_err();

        assert!(matches!(err, ExecuteError::Reseed(_)));
        assert_eq!(err.error_code(), "CATALOG_EMPTY");
        assert_eq!(state.settings.continent, Continent::World);
    }

    #[test]
    fn missing_selector_is_fatal() {
        let fixture = Fixture::new(&["A"], &[]);
        let env = Env::new(
            Some(&fixture.catalog),
            None::<&ScriptedSelector>,
            Some(&fixture.clock),
            Some(&fixture.config),
        )
        .into_game_env();

        let err = GameEngine::new(env)
            .initial_state(easy_full(), 0)
            .unwrap_err();
        assert_eq!(
            err,
            InitializationError::Oracle(OracleError::SelectorNotAvailable)
        );
    }

    #[test]
    fn unknown_names_are_plain_wrong_guesses() {
        let fixture = Fixture::new(&["A", "B"], &["A"]);
        let engine = fixture.engine();
        let state = engine.initial_state(easy_full(), 1).unwrap();

        let outcome = engine
            .execute(&state, &GameAction::select("Atlantis"))
            .unwrap();

        assert_eq!(
            outcome.event,
            TransitionEvent::Wrong {
                region: "Atlantis".into(),
                strikes: 1
            }
        );
        assert_eq!(outcome.state.region_to_find.as_deref(), Some("A"));
    }

    #[test]
    fn invariant_errors_are_internal() {
        let err = RoundError::DuplicateFound("A".into());
        assert!(err.severity().is_internal());
    }
}
