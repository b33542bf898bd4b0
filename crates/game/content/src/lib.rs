//! Data-driven quiz content and loaders.
//!
//! This crate ships the built-in region dataset and default rules, and
//! provides loaders for RON/TOML data files:
//! - Region dataset (data-driven via RON)
//! - Quiz configuration (data-driven via TOML)
//!
//! Content is consumed by runtime oracles and never appears in game state.
//!
//! All loaders use quiz-core types directly with serde for RON/TOML deserialization.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, LoadResult, RegionLoader};
