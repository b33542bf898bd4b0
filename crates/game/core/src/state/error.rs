//! State management errors.

use crate::catalog::CatalogError;
use crate::env::OracleError;
use crate::error::{ErrorSeverity, GameError};

/// Errors raised while seeding a new round.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InitializationError {
    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl GameError for InitializationError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            InitializationError::Oracle(err) => err.severity(),
            InitializationError::Catalog(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            InitializationError::Oracle(err) => err.error_code(),
            InitializationError::Catalog(err) => err.error_code(),
        }
    }
}

/// Errors raised while advancing a round.
///
/// Everything except `Oracle` is an invariant violation detected after a
/// transition, which means a bug in the rules rather than bad input.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundError {
    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error("target {0:?} is still in the remaining pool")]
    TargetStillRemaining(String),

    #[error("target {0:?} was already resolved")]
    TargetAlreadyFound(String),

    #[error("region {0:?} resolved twice")]
    DuplicateFound(String),

    #[error("{strikes} strikes on one target (limit {limit})")]
    StrikesExceeded { strikes: u8, limit: u8 },

    #[error("round marked over while regions remain")]
    OverWithRegionsLeft,
}

impl GameError for RoundError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            RoundError::Oracle(err) => err.severity(),
            _ => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use RoundError::*;
        match self {
            Oracle(err) => err.error_code(),
            TargetStillRemaining(_) => "ROUND_TARGET_STILL_REMAINING",
            TargetAlreadyFound(_) => "ROUND_TARGET_ALREADY_FOUND",
            DuplicateFound(_) => "ROUND_DUPLICATE_FOUND",
            StrikesExceeded { .. } => "ROUND_STRIKES_EXCEEDED",
            OverWithRegionsLeft => "ROUND_OVER_WITH_REGIONS_LEFT",
        }
    }
}
