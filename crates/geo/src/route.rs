//! Route data returned by a directions provider

use crate::coord::Coordinate;
use serde::{Deserialize, Serialize};

/// One turn-by-turn instruction along a route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStep {
    pub instructions: String,
    pub distance_meters: f64,
}

/// A computed driving route between two points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Route name (usually the dominant road)
    pub name: String,
    /// Ordered points tracing the route geometry
    pub polyline: Vec<Coordinate>,
    pub distance_meters: f64,
    pub duration_seconds: f64,
    /// Ordered turn-by-turn steps
    pub steps: Vec<RouteStep>,
}
