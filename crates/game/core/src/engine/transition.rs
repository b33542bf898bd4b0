//! Action transition dispatch and execution logic.

use crate::action::{
    ActionTransition, ClearFeedbackAction, GameAction, ReseedAction, SelectRegionAction,
    SkipRegionAction, TransitionEvent,
};
use crate::env::GameEnv;
use crate::state::GameState;

use super::errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

/// Executes a transition through the three-phase pipeline.
///
/// Phases:
/// 1. `pre_validate` - Check preconditions before mutation
/// 2. `apply` - Mutate the game state and describe what happened
/// 3. `post_validate` - Verify round invariants after mutation
#[inline]
fn drive_transition<T>(
    transition: &T,
    state: &mut GameState,
    env: &GameEnv<'_>,
) -> Result<TransitionEvent, TransitionPhaseError<T::Error>>
where
    T: ActionTransition,
{
    transition
        .pre_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    let event = transition
        .apply(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;

    Ok(event)
}

/// Routes a [`GameAction`] to its transition and runs it against `state`.
pub(super) fn execute_transition(
    action: &GameAction,
    state: &mut GameState,
    env: &GameEnv<'_>,
) -> Result<TransitionEvent, ExecuteError> {
    let settings = state.settings;

    match action {
        GameAction::SelectRegion(region) => {
            drive_transition(&SelectRegionAction::new(region), state, env)
                .map_err(ExecuteError::Select)
        }
        GameAction::SkipRegion => {
            drive_transition(&SkipRegionAction, state, env).map_err(ExecuteError::Skip)
        }
        GameAction::ChangeDifficulty(difficulty) => drive_transition(
            &ReseedAction::new(settings.with_difficulty(*difficulty)),
            state,
            env,
        )
        .map_err(ExecuteError::Reseed),
        GameAction::ChangeContinent(continent) => drive_transition(
            &ReseedAction::new(settings.with_continent(*continent)),
            state,
            env,
        )
        .map_err(ExecuteError::Reseed),
        GameAction::ChangeGameMode(mode) => {
            drive_transition(&ReseedAction::new(settings.with_mode(*mode)), state, env)
                .map_err(ExecuteError::Reseed)
        }
        GameAction::ResetGame => {
            drive_transition(&ReseedAction::new(settings), state, env)
                .map_err(ExecuteError::Reseed)
        }
        GameAction::ClearFeedback => drive_transition(&ClearFeedbackAction, state, env)
            .map_err(|never| match never.error {}),
    }
}
