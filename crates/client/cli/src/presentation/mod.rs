//! Text rendering for the line-based client.
//!
//! Every function here is a pure `&GameState -> String` view; the app decides
//! when to print.

use quiz_core::{Continent, Difficulty, GameMode, GameState, TransitionEvent};

use crate::input::choices;

/// One-line summary of the round.
pub fn status_line(state: &GameState) -> String {
    let settings = state.settings;
    let found = state.regions_found.len();
    let total = state.total_regions();

    let target = match (&state.region_to_find, state.game_over) {
        (Some(target), _) => format!("Find: {target}"),
        (None, true) => "Round complete".to_owned(),
        (None, false) => "No target".to_owned(),
    };

    format!(
        "{target} | score {} | errors {} | streak {} (best {}) | {found}/{total} ({:.0}%) | {} / {} / {}",
        state.score,
        state.errors,
        state.streak,
        state.best_streak,
        state.progress() * 100.0,
        settings.difficulty,
        settings.continent,
        settings.mode,
    )
}

/// Feedback for the most recent resolution, while it is still pending.
pub fn feedback_line(state: &GameState) -> Option<String> {
    match (state.last_answer_correct?, &state.skipped_region) {
        (true, _) => Some(format!("✓ Correct! Streak: {}", state.streak)),
        (false, Some(region)) => Some(format!("→ Skipped. It was {region}.")),
        (false, None) => {
            let picked = state.selected_region.as_deref().unwrap_or("that");
            Some(format!(
                "✗ Not {picked}. Strike {}.",
                state.current_guess_errors
            ))
        }
    }
}

/// Describes what a transition did, where the state alone is not enough.
pub fn event_line(event: &TransitionEvent) -> Option<String> {
    match event {
        TransitionEvent::RoundStarted {
            settings,
            total_regions,
        } => Some(format!(
            "New round: {} / {} / {} with {total_regions} regions.",
            settings.difficulty, settings.continent, settings.mode
        )),
        TransitionEvent::Skipped { forced: true, .. } => {
            Some("Too many wrong guesses, moving on.".to_owned())
        }
        TransitionEvent::Ignored => Some("The round is over. Try :reset.".to_owned()),
        _ => None,
    }
}

/// Remaining candidates (current target included), sorted by name.
///
/// Stands in for the clickable map.
pub fn region_list(state: &GameState) -> String {
    let mut names: Vec<&str> = state
        .regions_remaining
        .iter()
        .chain(state.region_to_find.as_ref())
        .map(String::as_str)
        .collect();
    names.sort_unstable();

    if names.is_empty() {
        return "No regions left.".to_owned();
    }
    format!("{} regions in play:\n  {}", names.len(), names.join("\n  "))
}

pub fn help_text() -> String {
    format!(
        "Type a region name to guess it, or a command:\n\
         \x20 :skip                 give up on the current region\n\
         \x20 :difficulty <level>   {}\n\
         \x20 :continent <name>     {}\n\
         \x20 :mode <mode>          {}\n\
         \x20 :reset                start over with the same settings\n\
         \x20 :list                 show the regions still in play\n\
         \x20 :quit                 leave",
        choices::<Difficulty>(),
        choices::<Continent>(),
        choices::<GameMode>(),
    )
}
