//! Unified error types surfaced by the session API.
//!
//! Wraps content loading and engine failures so clients can bubble them up
//! with consistent context.
use quiz_core::{ErrorSeverity, ExecuteError, GameError, InitializationError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SessionError>;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to load quiz content")]
    Content(#[source] anyhow::Error),

    #[error("failed to seed round")]
    InitialState(#[source] InitializationError),

    #[error(transparent)]
    Execute(#[from] ExecuteError),
}

impl SessionError {
    /// Severity of the underlying rules error; content failures are fatal.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SessionError::Content(_) => ErrorSeverity::Fatal,
            SessionError::InitialState(err) => err.severity(),
            SessionError::Execute(err) => err.severity(),
        }
    }
}
