//! Human-readable route summary labels

use crate::route::Route;
use serde::Serialize;

/// Meters-to-miles factor used by the route display
const MILES_PER_METER: f64 = 0.00062137;

/// Format a distance in meters as miles with two decimal places.
///
/// Negative or NaN distances clamp to zero.
pub fn format_distance(meters: f64) -> String {
    let meters = if meters.is_nan() { 0.0 } else { meters.max(0.0) };
    format!("{:.2} mi", meters * MILES_PER_METER)
}

/// Format a duration in seconds as "H hr M min" from one hour up,
/// "M min" below.
///
/// Exactly 3600 seconds takes the long form ("1 hr 0 min").
/// Negative or NaN durations clamp to zero.
pub fn format_duration(seconds: f64) -> String {
    let seconds = if seconds.is_nan() { 0.0 } else { seconds.max(0.0) };
    if seconds >= 3600.0 {
        let hours = (seconds / 3600.0).floor() as u64;
        let minutes = ((seconds % 3600.0) / 60.0).floor() as u64;
        format!("{} hr {} min", hours, minutes)
    } else {
        format!("{} min", (seconds / 60.0).floor() as u64)
    }
}

/// Display labels for a route header
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteSummary {
    pub name: String,
    pub distance: String,
    pub duration: String,
}

impl RouteSummary {
    pub fn of(route: &Route) -> Self {
        Self {
            name: route.name.clone(),
            distance: format_distance(route.distance_meters),
            duration: format_duration(route.duration_seconds),
        }
    }
}
