//! Region dataset loader.

use std::collections::HashSet;
use std::path::Path;

use anyhow::Context;
use quiz_core::{Continent, RegionRecord};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

const BUILTIN_REGIONS: &str = include_str!("../../data/regions.ron");

/// Region dataset structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionFile {
    pub regions: Vec<RegionRecord>,
}

/// Loader for the region dataset from RON files.
pub struct RegionLoader;

impl RegionLoader {
    /// Load the region dataset from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing a RegionFile
    pub fn load(path: &Path) -> LoadResult<Vec<RegionRecord>> {
        let content = read_file(path)?;
        Self::parse(&content, &path.display().to_string())
    }

    /// Load the dataset compiled into this crate.
    pub fn builtin() -> LoadResult<Vec<RegionRecord>> {
        Self::parse(BUILTIN_REGIONS, "builtin regions.ron")
    }

    /// Parse and validate RON source; `origin` only labels error messages.
    pub fn parse(content: &str, origin: &str) -> LoadResult<Vec<RegionRecord>> {
        let file: RegionFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse region RON at {}: {}", origin, e))?;

        validate(&file.regions).with_context(|| format!("Invalid region data in {origin}"))?;
        Ok(file.regions)
    }
}

fn validate(regions: &[RegionRecord]) -> LoadResult<()> {
    if regions.is_empty() {
        anyhow::bail!("dataset contains no regions");
    }

    let mut seen = HashSet::with_capacity(regions.len());
    for region in regions {
        if region.name.trim().is_empty() {
            anyhow::bail!("region with empty name");
        }
        if region.continent == Continent::World {
            anyhow::bail!("region {:?} must be tagged with a continent", region.name);
        }
        if !seen.insert(region.name.as_str()) {
            anyhow::bail!("duplicate region {:?}", region.name);
        }
    }

    Ok(())
}
