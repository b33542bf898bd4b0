//! Session orchestration for the quiz engine.
//!
//! This crate wires content loading, the system clock and the random selector
//! into a [`QuizSession`] that clients drive one action at a time.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the session and its feedback timer bookkeeping
//! - [`config`] reads session settings from the environment
//! - [`record`] keeps the replayable action log
//! - [`clock`] provides the wall-clock oracle
pub mod clock;
pub mod config;
pub mod error;
pub mod record;
pub mod session;

pub use clock::SystemClock;
pub use config::RuntimeConfig;
pub use error::{Result, SessionError};
pub use record::SessionRecord;
pub use session::QuizSession;
