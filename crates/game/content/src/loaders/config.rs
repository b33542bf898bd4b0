//! Quiz configuration loader.

use std::path::Path;

use quiz_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

const BUILTIN_CONFIG: &str = include_str!("../../data/quiz.toml");

/// Loader for quiz configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing GameConfig
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Load the default `quiz.toml` compiled into this crate.
    pub fn builtin() -> LoadResult<GameConfig> {
        Self::parse(BUILTIN_CONFIG)
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.quick_round_size == 0 {
            anyhow::bail!("quick_round_size must be at least 1");
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::{Continent, Difficulty, GameMode};

    #[test]
    fn builtin_matches_defaults() {
        assert_eq!(ConfigLoader::builtin().unwrap(), GameConfig::default());
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config = ConfigLoader::parse(
            r#"
            quick_round_size = 5

            [default_settings]
            continent = "Europe"
            mode = "Quick"
            "#,
        )
        .unwrap();

        assert_eq!(config.quick_round_size, 5);
        assert_eq!(config.feedback_delay_ms, GameConfig::FEEDBACK_DELAY_MS);
        assert_eq!(config.default_settings.difficulty, Difficulty::Medium);
        assert_eq!(config.default_settings.continent, Continent::Europe);
        assert_eq!(config.default_settings.mode, GameMode::Quick);
    }

    #[test]
    fn zero_round_size_is_rejected() {
        let err = ConfigLoader::parse("quick_round_size = 0").unwrap_err();
        assert!(err.to_string().contains("quick_round_size"));
    }

    #[test]
    fn strike_limit_is_not_configurable() {
        for content in ["strike_limit = 5", "strike_limit = 3"] {
            let err = ConfigLoader::parse(content).unwrap_err();
            assert!(err.to_string().contains("strike_limit"), "{err}");
        }
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quiz.toml");
        std::fs::write(&path, "feedback_delay_ms = 250\n").unwrap();

        let config = ConfigLoader::load(&path).unwrap();
        assert_eq!(config.feedback_delay_ms, 250);
        assert_eq!(config.skip_feedback_delay_ms, 2_000);
    }
}
