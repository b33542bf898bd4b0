//! Property tests over random action sequences.
//!
//! Every sequence runs against a seeded `PcgSelector`, so failures shrink to
//! a reproducible (seed, actions) pair.

use proptest::prelude::*;
use quiz_core::{
    Continent, Difficulty, Env, FixedClock, GameAction, GameConfig, GameEngine, GameMode,
    GameState, PcgSelector, RoundSettings, StaticCatalog,
};

const NAMES: [&str; 6] = ["Alba", "Bree", "Cora", "Dune", "Eyre", "Fife"];

struct World {
    catalog: StaticCatalog,
    selector: PcgSelector,
    clock: FixedClock,
    config: GameConfig,
}

impl World {
    fn new(names: impl IntoIterator<Item = String>) -> Self {
        Self {
            catalog: StaticCatalog::from_names(names, 80_000_000, Continent::Europe),
            selector: PcgSelector,
            clock: FixedClock::at_millis(0),
            config: GameConfig::default(),
        }
    }

    fn engine(&self) -> GameEngine<'_> {
        GameEngine::new(
            Env::with_all(&self.catalog, &self.selector, &self.clock, &self.config)
                .into_game_env(),
        )
    }
}

fn full_round() -> RoundSettings {
    RoundSettings::new(Difficulty::Easy, Continent::World, GameMode::Full)
}

fn play_action() -> impl Strategy<Value = GameAction> {
    prop_oneof![
        6 => (0..NAMES.len()).prop_map(|i| GameAction::select(NAMES[i])),
        2 => Just(GameAction::select("Nowhere")),
        1 => Just(GameAction::SkipRegion),
        1 => Just(GameAction::ClearFeedback),
    ]
}

/// The action a perfect player would send next.
fn answer(state: &GameState) -> GameAction {
    GameAction::select(state.region_to_find.clone().unwrap_or_default())
}

proptest! {
    #[test]
    fn invariants_hold_for_any_play(
        seed in any::<u64>(),
        actions in prop::collection::vec(play_action(), 0..60),
    ) {
        let world = World::new(NAMES.map(String::from));
        let engine = world.engine();
        let mut state = engine.initial_state(full_round(), seed).unwrap();

        for action in &actions {
            let next = engine.execute(&state, action).unwrap().state;

            prop_assert!(next.current_guess_errors <= 2);
            prop_assert!(next.best_streak >= state.best_streak);
            prop_assert!(next.score >= state.score);
            prop_assert!(next.errors >= state.errors);
            prop_assert_eq!(next.total_regions(), NAMES.len());
            prop_assert_eq!(next.check_invariants(), Ok(()));
            if let Some(target) = &next.region_to_find {
                prop_assert!(!next.regions_remaining.contains(target));
                prop_assert!(!next.regions_found.contains(target));
            }

            state = next;
        }
    }

    #[test]
    fn finished_round_ignores_play(
        seed in any::<u64>(),
        actions in prop::collection::vec(play_action(), 1..20),
    ) {
        let world = World::new(NAMES.map(String::from));
        let engine = world.engine();
        let mut state = engine.initial_state(full_round(), seed).unwrap();
        while !state.game_over {
            state = engine.execute(&state, &GameAction::SkipRegion).unwrap().state;
        }
        let state = engine.execute(&state, &GameAction::ClearFeedback).unwrap().state;

        for action in actions.iter().filter(|a| !matches!(a, GameAction::ClearFeedback)) {
            prop_assert_eq!(&engine.execute(&state, action).unwrap().state, &state);
        }
    }

    #[test]
    fn perfect_play_scores_every_region(seed in any::<u64>(), count in 1usize..40) {
        let world = World::new((0..count).map(|i| format!("Region {i}")));
        let engine = world.engine();
        let mut state = engine.initial_state(full_round(), seed).unwrap();

        for _ in 0..count {
            prop_assert!(!state.game_over);
            state = engine.execute(&state, &answer(&state)).unwrap().state;
        }

        prop_assert!(state.game_over);
        prop_assert_eq!(state.score as usize, count);
        prop_assert_eq!(state.errors, 0);
        prop_assert_eq!(state.best_streak as usize, count);
        prop_assert_eq!(state.regions_found.len(), count);
    }

    #[test]
    fn quick_round_draws_ten_of_fifty(seed in any::<u64>()) {
        let world = World::new((0..50).map(|i| format!("Region {i}")));
        let settings = full_round().with_mode(GameMode::Quick);
        let state = world.engine().initial_state(settings, seed).unwrap();

        prop_assert_eq!(state.total_regions(), 10);
        let mut names: Vec<&String> = state
            .regions_remaining
            .iter()
            .chain(state.region_to_find.as_ref())
            .collect();
        names.sort();
        names.dedup();
        prop_assert_eq!(names.len(), 10);
    }

    #[test]
    fn same_seed_replays_same_round(
        seed in any::<u64>(),
        actions in prop::collection::vec(play_action(), 0..30),
    ) {
        let world = World::new(NAMES.map(String::from));
        let engine = world.engine();

        let run = || {
            let mut state = engine.initial_state(full_round(), seed).unwrap();
            for action in &actions {
                state = engine.execute(&state, action).unwrap().state;
            }
            state
        };

        prop_assert_eq!(run(), run());
    }
}
