use crate::env::ConfigOracle;
use crate::state::RoundSettings;

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct GameConfig {
    /// Number of regions drawn for a Quick round.
    pub quick_round_size: usize,
    /// How long correct/incorrect feedback stays visible, in milliseconds.
    pub feedback_delay_ms: u64,
    /// How long skip feedback stays visible, in milliseconds.
    ///
    /// Longer than `feedback_delay_ms` so a renderer can reveal the skipped region.
    pub skip_feedback_delay_ms: u64,
    /// Settings used for the first round of a session.
    pub default_settings: RoundSettings,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    pub const QUICK_ROUND_SIZE: usize = 10;
    pub const FEEDBACK_DELAY_MS: u64 = 500;
    pub const SKIP_FEEDBACK_DELAY_MS: u64 = 2_000;

    pub fn new() -> Self {
        Self {
            quick_round_size: Self::QUICK_ROUND_SIZE,
            feedback_delay_ms: Self::FEEDBACK_DELAY_MS,
            skip_feedback_delay_ms: Self::SKIP_FEEDBACK_DELAY_MS,
            default_settings: RoundSettings::default(),
        }
    }

    pub fn with_quick_round_size(mut self, quick_round_size: usize) -> Self {
        self.quick_round_size = quick_round_size;
        self
    }

    /// Returns how long feedback for the last resolution should stay visible.
    ///
    /// `None` when there is no pending feedback.
    pub fn pending_feedback_ms(
        &self,
        last_answer_correct: Option<bool>,
        skipped: bool,
    ) -> Option<u64> {
        last_answer_correct?;
        Some(if skipped {
            self.skip_feedback_delay_ms
        } else {
            self.feedback_delay_ms
        })
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigOracle for GameConfig {
    fn quick_round_size(&self) -> usize {
        self.quick_round_size
    }
}
