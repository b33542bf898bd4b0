//! Authoritative round state representation.
//!
//! [`GameState`] is a plain value. The engine never mutates the value it is
//! handed; every transition clones it, applies the action to the clone and
//! returns the result, so callers can keep old values for undo or replay.
mod error;
mod metrics;
pub mod types;

use std::collections::HashSet;

pub use error::{InitializationError, RoundError};
pub use types::{Continent, Difficulty, GameMode, RoundSettings, Timestamp};

/// Wrong guesses on one target that force a skip.
///
/// Fixed by the rules, so `current_guess_errors` stays below it.
pub const STRIKE_LIMIT: u8 = 3;

/// Canonical snapshot of one quiz round.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// Names neither resolved nor currently targeted, in catalog order.
    pub regions_remaining: Vec<String>,
    /// Active target; `None` once the round is exhausted.
    pub region_to_find: Option<String>,
    /// Last name the player selected, for transient highlighting.
    pub selected_region: Option<String>,
    /// Resolved names (found or skipped), most recent first.
    pub regions_found: Vec<String>,

    pub settings: RoundSettings,

    pub score: u32,
    pub errors: u32,
    /// Wrong guesses against the current target.
    pub current_guess_errors: u8,
    pub streak: u32,
    pub best_streak: u32,
    pub game_over: bool,

    /// Outcome of the most recent resolution; `None` when there is nothing to show.
    pub last_answer_correct: Option<bool>,
    /// Region that was just force-skipped, paired with `last_answer_correct == Some(false)`.
    pub skipped_region: Option<String>,
    /// Set by the first Select/Skip of the round.
    pub start_time: Option<Timestamp>,

    /// RNG seed for deterministic target selection.
    ///
    /// Fixed when the round is seeded. Combined with `draws` to derive a unique
    /// seed for every random draw.
    pub round_seed: u64,
    /// Number of random draws made so far in this round.
    pub draws: u64,
}

impl GameState {
    /// Creates a round with no regions and no target.
    ///
    /// Used as the starting point for seeding; a state in this shape is only
    /// observable after a round ends.
    pub fn empty(settings: RoundSettings, round_seed: u64) -> Self {
        Self {
            regions_remaining: Vec::new(),
            region_to_find: None,
            selected_region: None,
            regions_found: Vec::new(),
            settings,
            score: 0,
            errors: 0,
            current_guess_errors: 0,
            streak: 0,
            best_streak: 0,
            game_over: false,
            last_answer_correct: None,
            skipped_region: None,
            start_time: None,
            round_seed,
            draws: 0,
        }
    }

    /// Returns true while a target is waiting to be resolved.
    pub fn is_active(&self) -> bool {
        !self.game_over && self.region_to_find.is_some()
    }

    /// Number of regions resolved through a skip (forced or explicit).
    pub fn skipped_count(&self) -> u32 {
        (self.regions_found.len() as u32).saturating_sub(self.score)
    }

    /// Checks the structural invariants of a round.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant as a [`RoundError`].
    pub fn check_invariants(&self) -> Result<(), RoundError> {
        if let Some(target) = &self.region_to_find {
            if self.regions_remaining.contains(target) {
                return Err(RoundError::TargetStillRemaining(target.clone()));
            }
            if self.regions_found.contains(target) {
                return Err(RoundError::TargetAlreadyFound(target.clone()));
            }
        }

        let mut seen = HashSet::with_capacity(self.regions_found.len());
        for name in &self.regions_found {
            if !seen.insert(name.as_str()) {
                return Err(RoundError::DuplicateFound(name.clone()));
            }
        }

        if self.current_guess_errors >= STRIKE_LIMIT {
            return Err(RoundError::StrikesExceeded {
                strikes: self.current_guess_errors,
                limit: STRIKE_LIMIT,
            });
        }

        if self.game_over && (self.region_to_find.is_some() || !self.regions_remaining.is_empty())
        {
            return Err(RoundError::OverWithRegionsLeft);
        }

        Ok(())
    }
}
