use crate::env::{CONTEXT_TARGET, SelectorOracle, compute_seed};
use crate::state::{GameState, Timestamp};

/// Wraps mutable access to [`GameState`] with the round-level sub-steps that
/// the Select and Skip transitions are composed of.
pub struct RoundReducer<'a> {
    state: &'a mut GameState,
}

impl<'a> RoundReducer<'a> {
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    /// Records the start of the round if this is its first action.
    pub fn stamp_start(&mut self, now: Timestamp) {
        self.state.start_time.get_or_insert(now);
    }

    /// Scores a correct guess and returns the new streak.
    ///
    /// A correct guess after strikes on the same target restarts the streak at 1.
    pub fn record_correct(&mut self, region: &str) -> u32 {
        let state = &mut *self.state;
        let streak = if state.current_guess_errors > 0 {
            1
        } else {
            state.streak + 1
        };

        state.streak = streak;
        state.best_streak = state.best_streak.max(streak);
        state.score += 1;
        state.current_guess_errors = 0;
        state.last_answer_correct = Some(true);
        state.skipped_region = None;
        state.selected_region = Some(region.to_owned());
        streak
    }

    /// Records a wrong guess that leaves attempts on the target; returns the strike count.
    pub fn record_strike(&mut self, region: &str) -> u8 {
        let state = &mut *self.state;
        state.errors += 1;
        state.streak = 0;
        state.current_guess_errors += 1;
        state.last_answer_correct = Some(false);
        state.skipped_region = None;
        state.selected_region = Some(region.to_owned());
        state.current_guess_errors
    }

    /// Resolves the target as an error and moves on; returns the skipped name.
    pub fn skip_target<S>(&mut self, selector: &S) -> Option<String>
    where
        S: SelectorOracle + ?Sized,
    {
        let skipped = self.resolve_target()?;

        let state = &mut *self.state;
        state.errors += 1;
        state.streak = 0;
        state.current_guess_errors = 0;
        state.last_answer_correct = Some(false);
        state.skipped_region = Some(skipped.clone());
        state.selected_region = None;

        self.draw_next_target(selector);
        Some(skipped)
    }

    /// Moves the current target to the front of `regions_found`.
    pub fn resolve_target(&mut self) -> Option<String> {
        let target = self.state.region_to_find.take()?;
        self.state.regions_found.insert(0, target.clone());
        Some(target)
    }

    /// Draws the next target out of the remaining pool, or ends the round.
    ///
    /// The drawn name is removed from the pool before it becomes the target.
    pub fn draw_next_target<S>(&mut self, selector: &S) -> Option<&str>
    where
        S: SelectorOracle + ?Sized,
    {
        let state = &mut *self.state;

        if state.regions_remaining.is_empty() {
            state.region_to_find = None;
            state.game_over = true;
            return None;
        }

        let seed = compute_seed(state.round_seed, state.draws, CONTEXT_TARGET);
        state.draws += 1;

        let index = selector.pick(seed, &state.regions_remaining);
        let next = state.regions_remaining.remove(index);
        state.region_to_find = Some(next);
        state.region_to_find.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ScriptedSelector;
    use crate::state::RoundSettings;

    fn state_with_pool(pool: &[&str]) -> GameState {
        let mut state = GameState::empty(RoundSettings::default(), 11);
        state.regions_remaining = pool.iter().map(|s| s.to_string()).collect();
        state
    }

    #[test]
    fn draw_removes_target_from_pool() {
        let mut state = state_with_pool(&["A", "B", "C"]);
        let selector = ScriptedSelector::new(["B"]);

        let drawn = RoundReducer::new(&mut state)
            .draw_next_target(&selector)
            .map(str::to_owned);

        assert_eq!(drawn.as_deref(), Some("B"));
        assert_eq!(state.regions_remaining, vec!["A", "C"]);
        assert_eq!(state.draws, 1);
    }

    #[test]
    fn draw_from_empty_pool_ends_round() {
        let mut state = state_with_pool(&[]);
        state.region_to_find = Some("A".into());

        assert!(
            RoundReducer::new(&mut state)
                .draw_next_target(&ScriptedSelector::first())
                .is_none()
        );
        assert!(state.game_over);
        assert_eq!(state.region_to_find, None);
        assert_eq!(state.draws, 0);
    }

    #[test]
    fn start_is_stamped_once() {
        let mut state = state_with_pool(&[]);
        let mut round = RoundReducer::new(&mut state);
        round.stamp_start(Timestamp(5));
        round.stamp_start(Timestamp(9));
        assert_eq!(round.state().start_time, Some(Timestamp(5)));
    }

    #[test]
    fn correct_after_strike_restarts_streak_at_one() {
        let mut state = state_with_pool(&[]);
        state.streak = 4;
        state.best_streak = 4;
        state.current_guess_errors = 1;

        let streak = RoundReducer::new(&mut state).record_correct("A");

        assert_eq!(streak, 1);
        assert_eq!(state.best_streak, 4);
        assert_eq!(state.current_guess_errors, 0);
        assert_eq!(state.last_answer_correct, Some(true));
    }

    #[test]
    fn skip_prepends_target_and_counts_error() {
        let mut state = state_with_pool(&["B"]);
        state.region_to_find = Some("A".into());
        state.regions_found = vec!["Z".into()];
        state.streak = 2;

        let skipped = RoundReducer::new(&mut state).skip_target(&ScriptedSelector::first());

        assert_eq!(skipped.as_deref(), Some("A"));
        assert_eq!(state.regions_found, vec!["A", "Z"]);
        assert_eq!(state.region_to_find.as_deref(), Some("B"));
        assert_eq!(state.errors, 1);
        assert_eq!(state.streak, 0);
        assert_eq!(state.skipped_region.as_deref(), Some("A"));
        assert_eq!(state.last_answer_correct, Some(false));
    }
}
