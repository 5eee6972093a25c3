//! Plays a scenario through the debouncer and reconciler
//!
//! This is the demo's event loop: keystrokes go through the debouncer,
//! effective queries hit the gazetteer, and every result is folded into
//! display state by the reconciler, with each mutation plan applied to a
//! recording surface.

use std::time::Duration;

use geo::NamedPoint;
use serde::Serialize;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use reconcile::{
    DisplayState, MapMutation, MapSurface, Reconciler, RecordingSurface, Update,
};
use search::{
    DebounceConfig, Debouncer, LocationProvider, QueryGate, RoutingProvider, SearchProvider,
    SearchQuery,
};

use crate::gazetteer::Gazetteer;
use crate::scenario::{Scenario, ScenarioStep};

/// One reconciliation pass and what triggered it
#[derive(Debug, Clone, Serialize)]
pub struct PlanRecord {
    /// Human-readable trigger, e.g. `search "coffee"` or `route computed`
    pub trigger: String,
    pub mutations: Vec<MapMutation>,
}

/// Everything a played scenario produced
#[derive(Debug)]
pub struct Playback {
    pub plans: Vec<PlanRecord>,
    pub surface: RecordingSurface,
    pub state: DisplayState,
}

/// Drive a scenario end to end against the built-in gazetteer.
///
/// `quiet_window` is the debounce window used for keystroke bursts; the
/// player waits it out after each burst so effective queries are observed
/// deterministically.
pub async fn play(scenario: &Scenario, quiet_window: Duration) -> Playback {
    let gazetteer = Gazetteer::los_angeles();
    let reconciler = Reconciler::with_defaults();
    let gate = QueryGate::new();

    let (tx, mut rx) = mpsc::channel(16);
    let debouncer = Debouncer::new(
        DebounceConfig { quiet_window },
        tx,
    );

    let mut surface = RecordingSurface::new();
    let mut state = match gazetteer.current_location().await {
        Ok(location) => DisplayState::centered_on(location),
        Err(_) => DisplayState::new(),
    };
    let mut plans = Vec::new();

    let mut source = None;
    let mut destination = None;

    let mut fold = |trigger: String, update: Update, state: &mut DisplayState| {
        let outcome = reconciler.reconcile(state, update);
        for mutation in &outcome.mutations {
            surface.apply(mutation);
        }
        *state = outcome.state;
        plans.push(PlanRecord {
            trigger,
            mutations: outcome.mutations,
        });
    };

    for step in &scenario.steps {
        match step {
            ScenarioStep::Type { entries } => {
                // Keystrokes land well inside the quiet window, so only
                // the last entry of the burst survives debouncing.
                for entry in entries {
                    debouncer.submit(SearchQuery::new(entry.clone()));
                    tokio::time::sleep(quiet_window / 5).await;
                }
                tokio::time::sleep(quiet_window * 3).await;

                while let Ok(query) = rx.try_recv() {
                    if query.is_blank() {
                        fold(
                            "search skipped (blank query)".to_string(),
                            Update::default(),
                            &mut state,
                        );
                        continue;
                    }
                    let tag = gate.issue();
                    match gazetteer.search(&query).await {
                        Ok(results) => {
                            // A newer request would make this response stale.
                            if gate.is_current(tag) {
                                fold(
                                    format!("search \"{}\"", query.text),
                                    Update::results(results),
                                    &mut state,
                                );
                            } else {
                                debug!(text = %query.text, "discarding superseded response");
                            }
                        }
                        Err(e) => {
                            // Failed searches leave the prior state intact.
                            warn!(error = %e, "search failed");
                            fold(format!("search failed: {e}"), Update::default(), &mut state);
                        }
                    }
                }
            }
            ScenarioStep::Select { id } => {
                fold(format!("select \"{id}\""), Update::select(id.clone()), &mut state);
            }
            ScenarioStep::Source { place } => match gazetteer.lookup(place) {
                Some(point) => {
                    source = Some(point);
                    route_if_ready(&gazetteer, &source, &destination, &mut fold, &mut state).await;
                }
                None => fold(format!("no match for \"{place}\""), Update::default(), &mut state),
            },
            ScenarioStep::Destination { place } => match gazetteer.lookup(place) {
                Some(point) => {
                    destination = Some(point);
                    route_if_ready(&gazetteer, &source, &destination, &mut fold, &mut state).await;
                }
                None => fold(format!("no match for \"{place}\""), Update::default(), &mut state),
            },
            ScenarioStep::ClearRoute => {
                source = None;
                destination = None;
                fold("clear route".to_string(), Update::clear_route(), &mut state);
            }
        }
    }

    Playback {
        plans,
        surface,
        state,
    }
}

/// Request a route once both endpoints are set, folding the outcome.
///
/// Routing failures keep the shown route untouched.
async fn route_if_ready(
    gazetteer: &Gazetteer,
    source: &Option<NamedPoint>,
    destination: &Option<NamedPoint>,
    fold: &mut impl FnMut(String, Update, &mut DisplayState),
    state: &mut DisplayState,
) {
    let (Some(from), Some(to)) = (source.as_ref(), destination.as_ref()) else {
        return;
    };

    match gazetteer.route(from, to).await {
        Ok(route) => fold("route computed".to_string(), Update::route(route), state),
        Err(e) => {
            warn!(error = %e, "routing failed");
            fold(format!("routing failed: {e}"), Update::default(), state);
        }
    }
}
