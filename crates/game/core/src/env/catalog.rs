//! Region dataset oracle.

use crate::state::Continent;

/// One entry of the geographic dataset.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegionRecord {
    /// Display name; the exact string the player must select.
    pub name: String,
    /// Population estimate used by the difficulty floor.
    pub population: u64,
    /// Continent / country-group tag.
    pub continent: Continent,
}

impl RegionRecord {
    pub fn new(name: impl Into<String>, population: u64, continent: Continent) -> Self {
        Self {
            name: name.into(),
            population,
            continent,
        }
    }
}

/// Read-only access to the already-loaded region dataset.
///
/// Implementations never load or parse data on demand; the caller injects a
/// fully materialized catalog before the first round is seeded.
pub trait CatalogOracle: Send + Sync {
    /// Returns every record in dataset order.
    fn records(&self) -> &[RegionRecord];
}

/// Catalog backed by an owned vector of records.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StaticCatalog {
    records: Vec<RegionRecord>,
}

impl StaticCatalog {
    pub fn new(records: Vec<RegionRecord>) -> Self {
        Self { records }
    }

    /// Builds a catalog where every name shares one continent and population.
    ///
    /// Convenient for fixtures that only care about names.
    pub fn from_names<I, N>(names: I, population: u64, continent: Continent) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        Self::new(
            names
                .into_iter()
                .map(|name| RegionRecord::new(name, population, continent))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl CatalogOracle for StaticCatalog {
    fn records(&self) -> &[RegionRecord] {
        &self.records
    }
}
