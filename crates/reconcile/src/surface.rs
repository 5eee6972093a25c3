//! Map surface capability interface

use geo::{NamedPoint, Region, Route};

use crate::mutation::MapMutation;

/// A rendering surface capable of applying mutations.
///
/// The engine only emits data; pins, colors, and stroke widths are
/// entirely the surface's concern.
pub trait MapSurface {
    /// Apply one mutation. Surfaces apply each mutation of a plan exactly
    /// once, in plan order.
    fn apply(&mut self, mutation: &MapMutation);
}

/// Surface double that mirrors applied mutations into plain collections.
///
/// Used by tests and the demo CLI to observe what a real surface would
/// end up showing.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub points: Vec<NamedPoint>,
    pub route: Option<Route>,
    pub region: Option<Region>,
    pub selected: Option<String>,
    /// Every mutation ever applied, in order
    pub applied: Vec<MapMutation>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MapSurface for RecordingSurface {
    fn apply(&mut self, mutation: &MapMutation) {
        match mutation {
            MapMutation::AddPoints(points) => self.points.extend(points.iter().cloned()),
            MapMutation::RemovePoints(ids) => self.points.retain(|p| !ids.contains(&p.id)),
            MapMutation::ShowRoute(route) => self.route = Some(route.clone()),
            MapMutation::ClearRoute => self.route = None,
            MapMutation::SetRegion(region) => self.region = Some(*region),
            MapMutation::Select(id) => self.selected = Some(id.clone()),
        }
        self.applied.push(mutation.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reconciler::{Reconciler, Update};
    use crate::state::DisplayState;
    use geo::Coordinate;
    use search::{SearchQuery, SearchResultSet};

    fn point(id: &str, lat: f64, lon: f64) -> NamedPoint {
        NamedPoint::new(id, Coordinate::new(lat, lon).unwrap())
    }

    #[test]
    fn test_applying_a_plan_matches_reconciled_state() {
        let reconciler = Reconciler::with_defaults();
        let mut surface = RecordingSurface::new();
        let mut state = DisplayState::new();

        let updates = vec![
            Update::results(SearchResultSet::with_timestamp(
                SearchQuery::new("coffee"),
                vec![point("a", 34.0, -118.0), point("b", 34.1, -118.1)],
                10,
            )),
            Update::select("b"),
            Update::results(SearchResultSet::with_timestamp(
                SearchQuery::new("tea"),
                vec![point("b", 34.1, -118.1), point("c", 33.9, -118.4)],
                20,
            )),
        ];

        for update in updates {
            let outcome = reconciler.reconcile(&state, update);
            for mutation in &outcome.mutations {
                surface.apply(mutation);
            }
            state = outcome.state;
        }

        let surface_ids: Vec<&str> = surface.points.iter().map(|p| p.id.as_str()).collect();
        let state_ids: Vec<&str> = state.displayed.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(surface_ids, state_ids);
        assert_eq!(surface.region, state.region);
        assert_eq!(surface.route, state.route);
    }
}
