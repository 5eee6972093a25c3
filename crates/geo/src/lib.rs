//! Geographic value types for the map reconciliation engine
//!
//! This crate provides:
//! - Coordinate / Span / Region primitives with validated constructors
//! - NamedPoint (stable-keyed map annotation)
//! - Route and RouteStep data
//! - Human-readable route summary labels

pub mod coord;
pub mod point;
pub mod route;
pub mod summary;

// Re-exports
pub use coord::{Coordinate, GeoError, Region, Span};
pub use point::NamedPoint;
pub use route::{Route, RouteStep};
pub use summary::{format_distance, format_duration, RouteSummary};
