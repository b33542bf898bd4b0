//! Traits describing read-only collaborators of the reducer.
//!
//! Oracles expose the region dataset, random selection, wall-clock time and
//! tunable rules. The [`Env`] aggregate bundles them so the engine can reach
//! everything it needs without owning or caching any of it.
mod catalog;
mod clock;
mod config;
mod error;
mod rng;

pub use catalog::{CatalogOracle, RegionRecord, StaticCatalog};
pub use clock::{ClockOracle, FixedClock};
pub use config::ConfigOracle;
pub use error::OracleError;
pub use rng::{PcgSelector, ScriptedSelector, SelectorOracle, compute_seed, shuffle};

pub(crate) use rng::{CONTEXT_RESEED, CONTEXT_SHUFFLE, CONTEXT_TARGET};

/// Aggregates read-only oracles required by the reducer and action pipeline.
pub struct Env<'a, D, S, K, C>
where
    D: CatalogOracle + ?Sized,
    S: SelectorOracle + ?Sized,
    K: ClockOracle + ?Sized,
    C: ConfigOracle + ?Sized,
{
    catalog: Option<&'a D>,
    selector: Option<&'a S>,
    clock: Option<&'a K>,
    config: Option<&'a C>,
}

impl<D, S, K, C> Clone for Env<'_, D, S, K, C>
where
    D: CatalogOracle + ?Sized,
    S: SelectorOracle + ?Sized,
    K: ClockOracle + ?Sized,
    C: ConfigOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<D, S, K, C> Copy for Env<'_, D, S, K, C>
where
    D: CatalogOracle + ?Sized,
    S: SelectorOracle + ?Sized,
    K: ClockOracle + ?Sized,
    C: ConfigOracle + ?Sized,
{
}

pub type GameEnv<'a> = Env<
    'a,
    dyn CatalogOracle + 'a,
    dyn SelectorOracle + 'a,
    dyn ClockOracle + 'a,
    dyn ConfigOracle + 'a,
>;

impl<'a, D, S, K, C> Env<'a, D, S, K, C>
where
    D: CatalogOracle + ?Sized,
    S: SelectorOracle + ?Sized,
    K: ClockOracle + ?Sized,
    C: ConfigOracle + ?Sized,
{
    pub fn new(
        catalog: Option<&'a D>,
        selector: Option<&'a S>,
        clock: Option<&'a K>,
        config: Option<&'a C>,
    ) -> Self {
        Self {
            catalog,
            selector,
            clock,
            config,
        }
    }

    pub fn with_all(catalog: &'a D, selector: &'a S, clock: &'a K, config: &'a C) -> Self {
        Self::new(Some(catalog), Some(selector), Some(clock), Some(config))
    }

    /// Returns the CatalogOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::CatalogNotAvailable` if no catalog oracle was provided.
    pub fn catalog(&self) -> Result<&'a D, OracleError> {
        self.catalog.ok_or(OracleError::CatalogNotAvailable)
    }

    /// Returns the SelectorOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::SelectorNotAvailable` if no selector oracle was provided.
    pub fn selector(&self) -> Result<&'a S, OracleError> {
        self.selector.ok_or(OracleError::SelectorNotAvailable)
    }

    /// Returns the ClockOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ClockNotAvailable` if no clock oracle was provided.
    pub fn clock(&self) -> Result<&'a K, OracleError> {
        self.clock.ok_or(OracleError::ClockNotAvailable)
    }

    /// Returns the ConfigOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ConfigNotAvailable` if no config oracle was provided.
    pub fn config(&self) -> Result<&'a C, OracleError> {
        self.config.ok_or(OracleError::ConfigNotAvailable)
    }
}

impl<'a, D, S, K, C> Env<'a, D, S, K, C>
where
    D: CatalogOracle + 'a,
    S: SelectorOracle + 'a,
    K: ClockOracle + 'a,
    C: ConfigOracle + 'a,
{
    /// Converts this environment into a trait-object based `GameEnv` (consumes self).
    pub fn into_game_env(self) -> GameEnv<'a> {
        let catalog: Option<&'a dyn CatalogOracle> = self.catalog.map(|catalog| catalog as _);
        let selector: Option<&'a dyn SelectorOracle> = self.selector.map(|selector| selector as _);
        let clock: Option<&'a dyn ClockOracle> = self.clock.map(|clock| clock as _);
        let config: Option<&'a dyn ConfigOracle> = self.config.map(|config| config as _);
        Env::new(catalog, selector, clock, config)
    }
}
