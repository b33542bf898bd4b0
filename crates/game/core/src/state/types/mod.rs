//! Value types carried inside [`GameState`](super::GameState).
mod settings;
mod timestamp;

pub use settings::{Continent, Difficulty, GameMode, RoundSettings};
pub use timestamp::Timestamp;
