//! Folding newly known inputs into display state and a mutation plan

use geo::{Region, Route};
use search::SearchResultSet;
use tracing::debug;

use crate::diff::AnnotationDiff;
use crate::mutation::MapMutation;
use crate::state::DisplayState;

/// Region policy for computed bounding regions
#[derive(Debug, Clone)]
pub struct ReconcilerConfig {
    /// Minimum span (degrees), so a single point never yields a
    /// degenerate zero-size region (default: 0.01)
    pub min_span: f64,
    /// Scale factor applied to bounding spans (default: 1.1)
    pub padding: f64,
}

impl Default for ReconcilerConfig {
    fn default() -> Self {
        Self {
            min_span: 0.01,
            padding: 1.1,
        }
    }
}

/// A change to the selected point
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionChange {
    Select(String),
    Clear,
}

/// A change to the shown route
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RouteChange {
    #[default]
    Unchanged,
    /// Show this route, implicitly clearing any prior one
    Route(Route),
    Clear,
}

/// What just became known, to be folded into display state.
///
/// Provider failures must not be turned into an `Update`: callers keep the
/// prior state and surface a transient indicator instead.
#[derive(Debug, Clone, Default)]
pub struct Update {
    pub results: Option<SearchResultSet>,
    pub selection: Option<SelectionChange>,
    pub route: RouteChange,
}

impl Update {
    pub fn results(set: SearchResultSet) -> Self {
        Self {
            results: Some(set),
            ..Self::default()
        }
    }

    pub fn select(id: impl Into<String>) -> Self {
        Self {
            selection: Some(SelectionChange::Select(id.into())),
            ..Self::default()
        }
    }

    pub fn route(route: Route) -> Self {
        Self {
            route: RouteChange::Route(route),
            ..Self::default()
        }
    }

    pub fn clear_route() -> Self {
        Self {
            route: RouteChange::Clear,
            ..Self::default()
        }
    }
}

/// Result of one reconciliation pass
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciliation {
    pub state: DisplayState,
    pub mutations: Vec<MapMutation>,
}

/// The single authority turning updates into ordered mutation plans.
///
/// Pure: applying the returned mutations to any surface consistent with the
/// old state produces a surface consistent with the returned state.
/// Reconciling the same inputs twice yields an empty plan the second time.
pub struct Reconciler {
    config: ReconcilerConfig,
}

impl Reconciler {
    pub fn new(config: ReconcilerConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(ReconcilerConfig::default())
    }

    /// Fold an update into `state`, returning the next state and the
    /// ordered mutations a surface must apply. Never fails.
    pub fn reconcile(&self, state: &DisplayState, update: Update) -> Reconciliation {
        let mut next = state.clone();
        let mut mutations = Vec::new();

        if let Some(results) = update.results {
            self.apply_results(&mut next, &mut mutations, results);
        }

        self.apply_selection(&mut next, &mut mutations, update.selection);
        self.apply_route(&mut next, &mut mutations, update.route);

        debug!(count = mutations.len(), "reconciled update");
        Reconciliation {
            state: next,
            mutations,
        }
    }

    fn apply_results(
        &self,
        next: &mut DisplayState,
        mutations: &mut Vec<MapMutation>,
        results: SearchResultSet,
    ) {
        // Results must apply in non-decreasing timestamp order; a late
        // response for a superseded query is dropped, not folded in.
        let stale = next
            .last_applied_ts
            .is_some_and(|last| results.ts_unix_ms < last);
        if stale {
            debug!(ts = results.ts_unix_ms, "dropping stale result set");
            return;
        }

        let delta = AnnotationDiff::between(&next.displayed, &results.points);
        let mutated = !delta.is_empty();

        // Remove before add: replaced identifiers never coexist.
        if !delta.to_remove.is_empty() {
            mutations.push(MapMutation::RemovePoints(delta.to_remove));
        }
        if !delta.to_add.is_empty() {
            mutations.push(MapMutation::AddPoints(delta.to_add));
        }

        next.displayed = results.points;
        next.last_applied_ts = Some(results.ts_unix_ms);

        // A selected point that just left the displayed set clears the
        // selection without a mutation: the surface drops the selection
        // together with the removed annotation.
        if let Some(selected) = next.selected.as_deref() {
            if !next.is_displayed(selected) {
                next.selected = None;
            }
        }

        if mutated && !next.displayed.is_empty() {
            let coordinates = next.displayed_coordinates();
            if let Some(region) =
                Region::bounding(&coordinates, self.config.min_span, self.config.padding)
            {
                next.region = Some(region);
                mutations.push(MapMutation::SetRegion(region));
            }
        }
    }

    fn apply_selection(
        &self,
        next: &mut DisplayState,
        mutations: &mut Vec<MapMutation>,
        selection: Option<SelectionChange>,
    ) {
        match selection {
            Some(SelectionChange::Select(id)) => {
                let unchanged = next.selected.as_deref() == Some(id.as_str());
                if unchanged {
                    return;
                }
                // Selecting an id that is not displayed is a silent no-op.
                if next.is_displayed(&id) {
                    next.selected = Some(id.clone());
                    mutations.push(MapMutation::Select(id));
                } else {
                    debug!(%id, "ignoring selection of undisplayed point");
                }
            }
            Some(SelectionChange::Clear) => {
                next.selected = None;
            }
            None => {}
        }
    }

    fn apply_route(
        &self,
        next: &mut DisplayState,
        mutations: &mut Vec<MapMutation>,
        route: RouteChange,
    ) {
        match route {
            RouteChange::Unchanged => {}
            RouteChange::Route(route) => {
                if next.route.as_ref() == Some(&route) {
                    return;
                }
                // At most one route at a time: a new route clears the
                // prior one before showing.
                if next.route.is_some() {
                    mutations.push(MapMutation::ClearRoute);
                }
                next.route = Some(route.clone());
                mutations.push(MapMutation::ShowRoute(route));
            }
            RouteChange::Clear => {
                if next.route.take().is_some() {
                    mutations.push(MapMutation::ClearRoute);
                }
            }
        }
    }
}
