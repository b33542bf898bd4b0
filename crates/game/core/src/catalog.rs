//! Region catalog filtering.
//!
//! Turns the static dataset into the ordered list of names a round is played
//! on. The filter never mutates the dataset and never keeps a cache: the
//! caller passes the records in every time.

use crate::env::{RegionRecord, SelectorOracle, shuffle};
use crate::error::{ErrorSeverity, GameError};
use crate::state::{Continent, Difficulty, GameMode, RoundSettings};

/// Below this many names a continent filter falls back to ignoring population.
pub const MIN_PLAYABLE_REGIONS: usize = 2;

/// Errors raised while building a round catalog.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CatalogError {
    /// No record matched the continent filter, even without a population floor.
    #[error("no regions available for {difficulty} / {continent}")]
    Empty {
        difficulty: Difficulty,
        continent: Continent,
    },
}

impl GameError for CatalogError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            CatalogError::Empty { .. } => "CATALOG_EMPTY",
        }
    }
}

/// Returns eligible region names in dataset order.
///
/// Records outside `continent` are dropped first, then the population floor
/// of `difficulty` is applied. If fewer than [`MIN_PLAYABLE_REGIONS`] names
/// survive, the floor is ignored and every name in the continent is returned.
pub fn filter_regions(
    records: &[RegionRecord],
    difficulty: Difficulty,
    continent: Continent,
) -> Vec<String> {
    let threshold = difficulty.population_threshold();
    let in_group = || records.iter().filter(move |r| continent.admits(r.continent));

    let eligible: Vec<String> = in_group()
        .filter(|r| r.population >= threshold)
        .map(|r| r.name.clone())
        .collect();

    if eligible.len() >= MIN_PLAYABLE_REGIONS {
        return eligible;
    }

    in_group().map(|r| r.name.clone()).collect()
}

/// Builds the catalog for one round.
///
/// Applies [`filter_regions`], then in Quick mode shuffles and truncates to
/// `quick_round_size` when the filtered set is larger.
///
/// # Errors
///
/// Returns [`CatalogError::Empty`] when nothing matches the continent.
pub fn build_round_catalog<S>(
    records: &[RegionRecord],
    settings: RoundSettings,
    quick_round_size: usize,
    selector: &S,
    seed: u64,
) -> Result<Vec<String>, CatalogError>
where
    S: SelectorOracle + ?Sized,
{
    let mut names = filter_regions(records, settings.difficulty, settings.continent);

    if names.is_empty() {
        return Err(CatalogError::Empty {
            difficulty: settings.difficulty,
            continent: settings.continent,
        });
    }

    if settings.mode == GameMode::Quick && names.len() > quick_round_size {
        shuffle(selector, seed, &mut names);
        names.truncate(quick_round_size);
    }

    Ok(names)
}
