//! End-of-round score record.
//!
//! The core only builds the record; sending it anywhere is up to the caller.

use std::cmp::Ordering;

use crate::state::{Continent, Difficulty, GameMode, GameState, Timestamp};

/// Summary of a finished round, in the shape a leaderboard stores it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreSubmission {
    pub score: u32,
    pub errors: u32,
    pub best_streak: u32,
    pub total_regions: usize,
    pub difficulty: Difficulty,
    pub continent: Continent,
    pub game_mode: GameMode,
    pub duration_secs: u64,
}

impl ScoreSubmission {
    /// Builds the record for a finished round.
    ///
    /// Returns `None` while the round is still running.
    pub fn from_state(state: &GameState, now: Timestamp) -> Option<Self> {
        if !state.game_over {
            return None;
        }

        Some(Self {
            score: state.score,
            errors: state.errors,
            best_streak: state.best_streak,
            total_regions: state.total_regions(),
            difficulty: state.settings.difficulty,
            continent: state.settings.continent,
            game_mode: state.settings.mode,
            duration_secs: state.duration_secs(now),
        })
    }

    /// Leaderboard order: higher score first, then fewer errors, then faster.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .cmp(&self.score)
            .then(self.errors.cmp(&other.errors))
            .then(self.duration_secs.cmp(&other.duration_secs))
    }
}
