//! Configuration oracle for exposing game configuration to the engine.

/// Provides access to rule parameters.
pub trait ConfigOracle: Send + Sync {
    /// Number of regions kept for a Quick round.
    fn quick_round_size(&self) -> usize;
}
