//! Action domain.
//!
//! [`GameAction`] is the closed set of inputs a caller can dispatch. Each
//! variant is routed by the engine to a concrete transition type implementing
//! [`ActionTransition`]:
//!
//! - `select`: [`SelectRegionAction`] (correct match, strike, or forced skip)
//! - `skip`: [`SkipRegionAction`]
//! - `reseed`: [`ReseedAction`] (reset and every settings change)
//! - `feedback`: [`ClearFeedbackAction`]

mod feedback;
mod reseed;
mod select;
mod skip;

pub use feedback::ClearFeedbackAction;
pub use reseed::ReseedAction;
pub use select::SelectRegionAction;
pub use skip::SkipRegionAction;

pub(crate) use reseed::seed_round;

use crate::env::GameEnv;
use crate::state::{Continent, Difficulty, GameMode, GameState, RoundSettings};

/// One user-facing input to the reducer.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum GameAction {
    /// The player picked a region on the map.
    SelectRegion(String),
    /// The player gave up on the current target.
    SkipRegion,
    ChangeDifficulty(Difficulty),
    ChangeContinent(Continent),
    ChangeGameMode(GameMode),
    /// Start over with the same settings.
    ResetGame,
    /// Dispatched by the caller's feedback timer.
    ClearFeedback,
}

impl GameAction {
    pub fn select(region: impl Into<String>) -> Self {
        GameAction::SelectRegion(region.into())
    }

    /// Returns true for actions that replace the round wholesale.
    pub fn reseeds(&self) -> bool {
        matches!(
            self,
            GameAction::ChangeDifficulty(_)
                | GameAction::ChangeContinent(_)
                | GameAction::ChangeGameMode(_)
                | GameAction::ResetGame
        )
    }
}

/// What a transition did, for logging and presentation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionEvent {
    /// The target was found; `streak` is the streak after this guess.
    Correct { region: String, streak: u32 },
    /// A wrong guess that still leaves attempts on the target.
    Wrong { region: String, strikes: u8 },
    /// The target was resolved without being found.
    ///
    /// `forced` is true when the strike limit triggered the skip.
    Skipped { region: String, forced: bool },
    /// A fresh round was seeded.
    RoundStarted {
        settings: RoundSettings,
        total_regions: usize,
    },
    FeedbackCleared,
    /// Select/Skip arrived with no active target; state unchanged.
    Ignored,
}

/// Defines how a concrete action variant mutates game state.
///
/// The engine calls the hooks in order on a private copy of the state;
/// an error from any hook discards that copy.
pub trait ActionTransition {
    type Error;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action by mutating the game state directly.
    fn apply(
        &self,
        state: &mut GameState,
        env: &GameEnv<'_>,
    ) -> Result<TransitionEvent, Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }
}
