//! Common error infrastructure for quiz-core.
//!
//! Domain-specific errors (`CatalogError`, `RoundError`, `InitializationError`)
//! live next to the code that raises them; this module only provides the shared
//! classification used by runtime layers for logging and recovery decisions.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Validation**: bad input or configuration; retrying unchanged will fail again
/// - **Internal**: a rule invariant was broken; indicates a bug
/// - **Fatal**: the engine cannot run at all (missing oracle)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input or configuration, should not retry without changes.
    ///
    /// Examples: continent with no regions in the dataset.
    Validation,

    /// Unexpected state inconsistency.
    ///
    /// Examples: target present in the remaining pool after a transition.
    Internal,

    /// Engine cannot proceed.
    ///
    /// Examples: selector oracle missing from the environment.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all quiz-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Error type for actions that never fail.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("this error should never be constructed")]
pub enum NeverError {}

impl GameError for NeverError {
    fn severity(&self) -> ErrorSeverity {
        match *self {}
    }

    fn error_code(&self) -> &'static str {
        match *self {}
    }
}
