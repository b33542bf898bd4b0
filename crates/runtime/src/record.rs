//! Replayable log of a session.

use quiz_core::{GameAction, RoundSettings};
use serde::{Deserialize, Serialize};

/// Everything needed to rebuild a session's state with the same oracles.
///
/// Only `start_time` depends on the clock; every other field of the rebuilt
/// state is a pure function of the record and the catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Seed of the first round.
    pub seed: u64,
    /// Settings of the first round.
    pub settings: RoundSettings,
    /// Every action that executed successfully, in dispatch order.
    pub actions: Vec<GameAction>,
}

impl SessionRecord {
    pub fn new(seed: u64, settings: RoundSettings) -> Self {
        Self {
            seed,
            settings,
            actions: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
