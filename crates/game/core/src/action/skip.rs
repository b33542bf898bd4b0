use crate::engine::RoundReducer;
use crate::env::GameEnv;
use crate::state::{GameState, RoundError};

use super::{ActionTransition, TransitionEvent};

/// The player gave up on the current target. Counts as an error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SkipRegionAction;

impl ActionTransition for SkipRegionAction {
    type Error = RoundError;

    fn apply(
        &self,
        state: &mut GameState,
        env: &GameEnv<'_>,
    ) -> Result<TransitionEvent, Self::Error> {
        if !state.is_active() {
            return Ok(TransitionEvent::Ignored);
        }

        let selector = env.selector()?;
        let now = env.clock()?.now();

        let mut round = RoundReducer::new(state);
        round.stamp_start(now);
        let region = round.skip_target(selector);

        Ok(TransitionEvent::Skipped {
            region: region.unwrap_or_default(),
            forced: false,
        })
    }

    fn post_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        state.check_invariants()
    }
}
