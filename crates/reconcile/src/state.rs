//! Display state snapshot owned by the reconciler's caller

use geo::{Coordinate, NamedPoint, Region, Route};
use serde::{Deserialize, Serialize};

/// Span (degrees) of the fallback region around a device location
const FALLBACK_SPAN_DEGREES: f64 = 0.1;

/// Snapshot of what a map surface currently shows.
///
/// Owned and replaced by the single caller that drives reconciliation; the
/// engine itself holds no state between calls.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DisplayState {
    pub region: Option<Region>,
    /// Displayed points in insertion order; ids are unique within the set
    pub displayed: Vec<NamedPoint>,
    /// The shown route, at most one at a time
    pub route: Option<Route>,
    /// Identifier of the selected point, when one is selected
    pub selected: Option<String>,
    /// Timestamp of the last applied result set, for staleness checks
    pub last_applied_ts: Option<u64>,
}

impl DisplayState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial state centered on a known device location
    pub fn centered_on(location: Coordinate) -> Self {
        Self {
            region: Region::bounding(&[location], FALLBACK_SPAN_DEGREES, 1.0),
            ..Self::default()
        }
    }

    /// Whether a point with this id is currently displayed
    pub fn is_displayed(&self, id: &str) -> bool {
        self.displayed.iter().any(|p| p.id == id)
    }

    /// Coordinates of all displayed points, in display order
    pub fn displayed_coordinates(&self) -> Vec<Coordinate> {
        self.displayed.iter().map(|p| p.coordinate).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_on_uses_fallback_span() {
        let here = Coordinate::new(34.0522, -118.2437).unwrap();
        let state = DisplayState::centered_on(here);

        let region = state.region.expect("fallback region");
        assert_eq!(region.center, here);
        assert_eq!(region.span.lat_delta(), FALLBACK_SPAN_DEGREES);
        assert!(state.displayed.is_empty());
        assert!(state.route.is_none());
    }
}
