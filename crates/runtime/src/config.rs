//! Runtime configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use quiz_core::{Continent, Difficulty, GameMode, RoundSettings};

/// Session-level knobs that sit outside the quiz rules.
///
/// Rule tuning (`GameConfig`) comes from `quiz.toml`; this struct only says
/// where to find it and how to start the first round.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Directory holding `regions.ron` / `quiz.toml`; embedded data when `None`.
    pub data_dir: Option<PathBuf>,
    /// Seed of the first round; random when `None`.
    pub seed: Option<u64>,
    pub session_id: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub continent: Option<Continent>,
    pub mode: Option<GameMode>,
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `GEOQUIZ_DATA_DIR` - Directory with content files (default: embedded data)
    /// - `GEOQUIZ_SEED` - Seed of the first round (default: random)
    /// - `GEOQUIZ_SESSION_ID` - Session identifier for log files (default: auto-generated)
    /// - `GEOQUIZ_DIFFICULTY` - `easy`, `medium` or `hard` (default: from quiz.toml)
    /// - `GEOQUIZ_CONTINENT` - e.g. `europe`, `north-america` (default: from quiz.toml)
    /// - `GEOQUIZ_MODE` - `quick` or `full` (default: from quiz.toml)
    ///
    /// Unparsable values are ignored.
    pub fn from_env() -> Self {
        Self {
            data_dir: env::var_os("GEOQUIZ_DATA_DIR").map(PathBuf::from),
            seed: read_env("GEOQUIZ_SEED"),
            session_id: env::var("GEOQUIZ_SESSION_ID")
                .ok()
                .filter(|id| !id.trim().is_empty()),
            difficulty: read_env("GEOQUIZ_DIFFICULTY"),
            continent: read_env("GEOQUIZ_CONTINENT"),
            mode: read_env("GEOQUIZ_MODE"),
        }
    }

    /// Applies the overrides on top of `defaults`.
    pub fn settings(&self, defaults: RoundSettings) -> RoundSettings {
        RoundSettings {
            difficulty: self.difficulty.unwrap_or(defaults.difficulty),
            continent: self.continent.unwrap_or(defaults.continent),
            mode: self.mode.unwrap_or(defaults.mode),
        }
    }

    /// Returns the configured seed or draws a fresh one.
    pub fn seed_or_random(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}
