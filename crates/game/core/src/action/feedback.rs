use crate::env::GameEnv;
use crate::error::NeverError;
use crate::state::GameState;

use super::{ActionTransition, TransitionEvent};

/// Clears the transient correct/incorrect/skipped signal and nothing else.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClearFeedbackAction;

impl ActionTransition for ClearFeedbackAction {
    type Error = NeverError;

    fn apply(
        &self,
        state: &mut GameState,
        _env: &GameEnv<'_>,
    ) -> Result<TransitionEvent, Self::Error> {
        state.last_answer_correct = None;
        state.skipped_region = None;
        Ok(TransitionEvent::FeedbackCleared)
    }
}
