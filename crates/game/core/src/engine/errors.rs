//! Error types for action execution pipeline.

use crate::action::{ActionTransition, ReseedAction, SelectRegionAction, SkipRegionAction};
use crate::error::{ErrorSeverity, GameError};

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

type SelectError = <SelectRegionAction<'static> as ActionTransition>::Error;
type SkipError = <SkipRegionAction as ActionTransition>::Error;
type ReseedError = <ReseedAction as ActionTransition>::Error;

/// Errors surfaced while executing an action through the game engine.
///
/// When `execute` fails the caller's state value is untouched.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecuteError {
    #[error("select action failed: {0}")]
    Select(TransitionPhaseError<SelectError>),

    #[error("skip action failed: {0}")]
    Skip(TransitionPhaseError<SkipError>),

    #[error("reseed failed: {0}")]
    Reseed(TransitionPhaseError<ReseedError>),
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            ExecuteError::Select(e) => e.error.severity(),
            ExecuteError::Skip(e) => e.error.severity(),
            ExecuteError::Reseed(e) => e.error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            ExecuteError::Select(e) => e.error.error_code(),
            ExecuteError::Skip(e) => e.error.error_code(),
            ExecuteError::Reseed(e) => e.error.error_code(),
        }
    }
}
