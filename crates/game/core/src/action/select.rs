use crate::engine::RoundReducer;
use crate::env::GameEnv;
use crate::state::{GameState, RoundError, STRIKE_LIMIT};

use super::{ActionTransition, TransitionEvent};

/// The player picked `region` on the map.
///
/// Any string other than the exact target counts as a wrong guess; names are
/// not checked against the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectRegionAction<'a> {
    pub region: &'a str,
}

impl<'a> SelectRegionAction<'a> {
    pub fn new(region: &'a str) -> Self {
        Self { region }
    }
}

impl ActionTransition for SelectRegionAction<'_> {
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

        let is_target = state.region_to_find.as_deref() == Some(self.region);
        let last_strike = state.current_guess_errors.saturating_add(1) >= STRIKE_LIMIT;

        let mut round = RoundReducer::new(state);
        round.stamp_start(now);

        if is_target {
            let streak = round.record_correct(self.region);
            let region = round.resolve_target();
            round.draw_next_target(selector);
            return Ok(TransitionEvent::Correct {
                region: region.unwrap_or_default(),
                streak,
            });
        }

        if last_strike {
            let region = round.skip_target(selector);
            return Ok(TransitionEvent::Skipped {
                region: region.unwrap_or_default(),
                forced: true,
            });
        }

        let strikes = round.record_strike(self.region);
        Ok(TransitionEvent::Wrong {
            region: self.region.to_owned(),
            strikes,
        })
    }

    fn post_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        state.check_invariants()
    }
}
