//! End-to-end scenario playback tests
//!
//! Drives the full pipeline: keystrokes through the debouncer, effective
//! queries against the gazetteer, results through the reconciler, and the
//! resulting plans onto a recording surface.

use std::io::Write;
use std::time::Duration;

use cli_lib::player;
use cli_lib::scenario::{Scenario, ScenarioStep};

/// Generous quiet window so keystroke timing is stable under load
const QUIET: Duration = Duration::from_millis(80);

#[tokio::test]
async fn test_builtin_scenario_ends_with_route_shown() {
    let playback = player::play(&Scenario::builtin(), QUIET).await;

    // The keystroke burst must collapse into a single effective search.
    let searches: Vec<_> = playback
        .plans
        .iter()
        .filter(|p| p.trigger.starts_with("search \""))
        .collect();
    assert_eq!(searches.len(), 1, "burst should debounce to one search");
    assert_eq!(searches[0].trigger, "search \"coffee\"");

    // Both coffee bars displayed, the tapped one selected, route shown.
    assert_eq!(playback.surface.points.len(), 2);
    assert_eq!(playback.state.selected.as_deref(), Some("verve-coffee-dtla"));
    assert!(playback.surface.route.is_some());
    assert_eq!(playback.surface.route, playback.state.route);
}

#[tokio::test]
async fn test_scenario_file_drives_playback() {
    let scenario = Scenario {
        steps: vec![
            ScenarioStep::Type {
                entries: vec!["getty".to_string()],
            },
            ScenarioStep::Select {
                id: "the-getty".to_string(),
            },
        ],
    };

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(serde_json::to_string(&scenario).unwrap().as_bytes())
        .unwrap();

    let loaded = Scenario::from_file(file.path()).unwrap();
    let playback = player::play(&loaded, QUIET).await;

    assert!(playback.state.is_displayed("the-getty"));
    assert_eq!(playback.state.selected.as_deref(), Some("the-getty"));
    assert_eq!(playback.surface.selected.as_deref(), Some("the-getty"));
}

#[tokio::test]
async fn test_clear_route_step_clears_the_surface() {
    let scenario = Scenario {
        steps: vec![
            ScenarioStep::Source {
                place: "Union Station".to_string(),
            },
            ScenarioStep::Destination {
                place: "Dodger Stadium".to_string(),
            },
            ScenarioStep::ClearRoute,
        ],
    };

    let playback = player::play(&scenario, QUIET).await;

    assert!(playback.plans.iter().any(|p| p.trigger == "route computed"));
    assert!(playback.surface.route.is_none());
    assert!(playback.state.route.is_none());
}

#[tokio::test]
async fn test_unknown_place_leaves_state_untouched() {
    let scenario = Scenario {
        steps: vec![ScenarioStep::Source {
            place: "Atlantis".to_string(),
        }],
    };

    let playback = player::play(&scenario, QUIET).await;

    let plan = playback
        .plans
        .iter()
        .find(|p| p.trigger.contains("no match"))
        .expect("missing place should be recorded");
    assert!(plan.mutations.is_empty());
    assert!(playback.surface.route.is_none());
}
