//! Content loaders for reading quiz data from files.
//!
//! Each loader parses one file format into quiz-core types and validates it.
//! Embedded copies of the default files are available through the
//! `builtin()` constructors.

pub mod config;
pub mod factory;
pub mod regions;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use regions::RegionLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
