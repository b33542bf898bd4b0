//! Content factory for building oracles from data files.

use std::path::{Path, PathBuf};

use quiz_core::{GameConfig, RegionRecord, StaticCatalog};

use crate::loaders::{ConfigLoader, LoadResult, RegionLoader};

/// Content factory that loads quiz content from a data directory.
///
/// Files missing from the directory are replaced by the copies embedded in
/// this crate; files that exist but fail to parse are errors.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── quiz.toml
/// └── regions.ron
/// ```
pub struct ContentFactory {
    data_dir: Option<PathBuf>,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    ///
    /// # Arguments
    ///
    /// * `data_dir` - Path to the directory containing data files
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: Some(data_dir.into()),
        }
    }

    /// Creates a factory that only serves the embedded content.
    pub fn embedded() -> Self {
        Self { data_dir: None }
    }

    /// Load quiz configuration from `quiz.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        match self.existing("quiz.toml") {
            Some(path) => ConfigLoader::load(&path),
            None => ConfigLoader::builtin(),
        }
    }

    /// Load the region dataset from `regions.ron`.
    pub fn load_regions(&self) -> LoadResult<Vec<RegionRecord>> {
        match self.existing("regions.ron") {
            Some(path) => RegionLoader::load(&path),
            None => RegionLoader::builtin(),
        }
    }

    /// Load the region dataset wrapped as a catalog oracle.
    pub fn load_catalog(&self) -> LoadResult<StaticCatalog> {
        self.load_regions().map(StaticCatalog::new)
    }

    /// Returns the data directory path, if any.
    pub fn data_dir(&self) -> Option<&Path> {
        self.data_dir.as_deref()
    }

    fn existing(&self, file_name: &str) -> Option<PathBuf> {
        let path = self.data_dir.as_ref()?.join(file_name);
        path.is_file().then_some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::CatalogOracle;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Some(Path::new("/tmp/data")));
        assert_eq!(ContentFactory::embedded().data_dir(), None);
    }

    #[test]
    fn empty_directory_falls_back_to_embedded() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path());

        assert_eq!(factory.load_config().unwrap(), GameConfig::default());
        assert_eq!(
            factory.load_regions().unwrap(),
            RegionLoader::builtin().unwrap()
        );
    }

    #[test]
    fn directory_files_take_precedence() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("regions.ron"),
            r#"(regions: [(name: "Malta", population: 520000, continent: Europe)])"#,
        )
        .unwrap();
        std::fs::write(dir.path().join("quiz.toml"), "quick_round_size = 5\n").unwrap();

        let factory = ContentFactory::new(dir.path());
        assert_eq!(factory.load_catalog().unwrap().records().len(), 1);
        assert_eq!(factory.load_config().unwrap().quick_round_size, 5);
    }

    #[test]
    fn broken_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("regions.ron"), "not ron").unwrap();

        assert!(ContentFactory::new(dir.path()).load_regions().is_err());
    }
}
