//! Deterministic quiz rules and data types shared across clients.
//!
//! `quiz-core` defines the canonical rules (catalog filter, actions, engine,
//! round state) and exposes pure APIs that can be reused by the runtime and
//! by offline tools. All state transitions flow through
//! [`engine::GameEngine`], and supporting crates depend on the types
//! re-exported here.
pub mod action;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod score;
pub mod state;

pub use action::{ActionTransition, GameAction, TransitionEvent};
pub use catalog::{CatalogError, MIN_PLAYABLE_REGIONS, build_round_catalog, filter_regions};
pub use config::GameConfig;
pub use engine::{ExecuteError, ExecutionOutcome, GameEngine, TransitionPhase, TransitionPhaseError};
pub use env::{
    CatalogOracle, ClockOracle, ConfigOracle, Env, FixedClock, GameEnv, OracleError, PcgSelector,
    RegionRecord, ScriptedSelector, SelectorOracle, StaticCatalog,
};
pub use error::{ErrorSeverity, GameError};
pub use score::ScoreSubmission;
pub use state::{
    Continent, Difficulty, GameMode, GameState, InitializationError, RoundError, RoundSettings,
    STRIKE_LIMIT, Timestamp,
};
