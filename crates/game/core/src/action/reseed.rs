use crate::catalog::build_round_catalog;
use crate::engine::RoundReducer;
use crate::env::{CONTEXT_RESEED, CONTEXT_SHUFFLE, GameEnv, compute_seed};
use crate::state::{GameState, InitializationError, RoundSettings};

use super::{ActionTransition, TransitionEvent};

/// Replaces the round with a freshly seeded one.
///
/// Backs `ResetGame` (same settings) and every settings change. All progress
/// is discarded; the catalog is rebuilt, so Quick mode draws a new subset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReseedAction {
    pub settings: RoundSettings,
}

impl ReseedAction {
    pub fn new(settings: RoundSettings) -> Self {
        Self { settings }
    }
}

impl ActionTransition for ReseedAction {
    type Error = InitializationError;

    fn apply(
        &self,
        state: &mut GameState,
        env: &GameEnv<'_>,
    ) -> Result<TransitionEvent, Self::Error> {
        let next_seed = compute_seed(state.round_seed, state.draws, CONTEXT_RESEED);
        *state = seed_round(self.settings, next_seed, env)?;

        Ok(TransitionEvent::RoundStarted {
            settings: self.settings,
            total_regions: state.total_regions(),
        })
    }
}

/// Builds the opening state of a round.
///
/// # Errors
///
/// Fails when an oracle is missing or the catalog comes out empty; a round
/// is never started without a target.
pub(crate) fn seed_round(
    settings: RoundSettings,
    round_seed: u64,
    env: &GameEnv<'_>,
) -> Result<GameState, InitializationError> {
    let catalog = env.catalog()?;
    let selector = env.selector()?;
    let quick_round_size = env.config()?.quick_round_size();

    let names = build_round_catalog(
        catalog.records(),
        settings,
        quick_round_size,
        selector,
        compute_seed(round_seed, 0, CONTEXT_SHUFFLE),
    )?;

    let mut state = GameState::empty(settings, round_seed);
    state.regions_remaining = names;
    RoundReducer::new(&mut state).draw_next_target(selector);

    Ok(state)
}
