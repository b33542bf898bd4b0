//! Read-side values derived from [`GameState`]; never stored.

use super::{GameState, Timestamp};

impl GameState {
    /// Size of the round catalog: resolved + remaining + current target.
    pub fn total_regions(&self) -> usize {
        self.regions_found.len()
            + self.regions_remaining.len()
            + usize::from(self.region_to_find.is_some())
    }

    /// Fraction of the round resolved, in `0.0..=1.0`.
    pub fn progress(&self) -> f64 {
        match self.total_regions() {
            0 => 0.0,
            total => self.regions_found.len() as f64 / total as f64,
        }
    }

    /// Whole seconds from the first action to `now`, once the round is over.
    ///
    /// Zero while the round is still running or if it never started.
    pub fn duration_secs(&self, now: Timestamp) -> u64 {
        match self.start_time {
            Some(start) if self.game_over => start.whole_secs_until(now),
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::state::{GameState, RoundSettings, Timestamp};

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn total_counts_found_remaining_and_target() {
        let mut state = GameState::empty(RoundSettings::default(), 0);
        state.regions_found = names(&["A"]);
        state.regions_remaining = names(&["B", "C"]);
        state.region_to_find = Some("D".into());
        assert_eq!(state.total_regions(), 4);
        assert!((state.progress() - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_round_has_zero_progress() {
        let state = GameState::empty(RoundSettings::default(), 0);
        assert_eq!(state.total_regions(), 0);
        assert_eq!(state.progress(), 0.0);
    }

    #[test]
    fn duration_only_counts_after_game_over() {
        let mut state = GameState::empty(RoundSettings::default(), 0);
        let now = Timestamp(12_999);
        assert_eq!(state.duration_secs(now), 0);

        state.start_time = Some(Timestamp(1_000));
        assert_eq!(state.duration_secs(now), 0);

        state.game_over = true;
        assert_eq!(state.duration_secs(now), 11);
        assert_eq!(state.duration_secs(Timestamp(500)), 0);
    }
}
