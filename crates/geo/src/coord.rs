//! Coordinate, span, and region primitives

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Valid latitude range in decimal degrees
pub const MIN_LAT: f64 = -90.0;
pub const MAX_LAT: f64 = 90.0;

/// Valid longitude range in decimal degrees
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// Errors from constructing geographic values out of range
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoError {
    /// Latitude is outside [-90, 90]
    #[error("invalid latitude: {0} (must be between {MIN_LAT} and {MAX_LAT})")]
    InvalidLatitude(f64),
    /// Longitude is outside [-180, 180]
    #[error("invalid longitude: {0} (must be between {MIN_LON} and {MAX_LON})")]
    InvalidLongitude(f64),
    /// Span deltas must both be positive
    #[error("invalid span: {lat_delta} x {lon_delta} (deltas must be positive)")]
    InvalidSpan { lat_delta: f64, lon_delta: f64 },
}

/// A point on the globe in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    lat: f64,
    lon: f64,
}

impl Coordinate {
    /// Create a coordinate, validating both components are in range
    pub fn new(lat: f64, lon: f64) -> Result<Self, GeoError> {
        if !(MIN_LAT..=MAX_LAT).contains(&lat) || lat.is_nan() {
            return Err(GeoError::InvalidLatitude(lat));
        }
        if !(MIN_LON..=MAX_LON).contains(&lon) || lon.is_nan() {
            return Err(GeoError::InvalidLongitude(lon));
        }
        Ok(Self { lat, lon })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }
}

/// Extent of a region: latitude and longitude deltas in degrees, both positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    lat_delta: f64,
    lon_delta: f64,
}

impl Span {
    /// Create a span, validating both deltas are positive
    pub fn new(lat_delta: f64, lon_delta: f64) -> Result<Self, GeoError> {
        if lat_delta <= 0.0 || lon_delta <= 0.0 || lat_delta.is_nan() || lon_delta.is_nan() {
            return Err(GeoError::InvalidSpan {
                lat_delta,
                lon_delta,
            });
        }
        Ok(Self {
            lat_delta,
            lon_delta,
        })
    }

    pub fn lat_delta(&self) -> f64 {
        self.lat_delta
    }

    pub fn lon_delta(&self) -> f64 {
        self.lon_delta
    }
}

/// A map viewport: a center coordinate plus a span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub center: Coordinate,
    pub span: Span,
}

impl Region {
    pub fn new(center: Coordinate, span: Span) -> Self {
        Self { center, span }
    }

    /// Whether the coordinate falls inside this region (inclusive edges)
    pub fn contains(&self, coordinate: &Coordinate) -> bool {
        let half_lat = self.span.lat_delta / 2.0;
        let half_lon = self.span.lon_delta / 2.0;
        (coordinate.lat - self.center.lat).abs() <= half_lat
            && (coordinate.lon - self.center.lon).abs() <= half_lon
    }

    /// Smallest region containing all points, spans scaled by `padding`
    /// and floored at `min_span` so a single point never produces a
    /// degenerate zero-size region.
    ///
    /// Returns `None` for an empty point list.
    pub fn bounding(points: &[Coordinate], min_span: f64, padding: f64) -> Option<Region> {
        let first = points.first()?;
        let mut min_lat = first.lat;
        let mut max_lat = first.lat;
        let mut min_lon = first.lon;
        let mut max_lon = first.lon;

        for point in &points[1..] {
            min_lat = min_lat.min(point.lat);
            max_lat = max_lat.max(point.lat);
            min_lon = min_lon.min(point.lon);
            max_lon = max_lon.max(point.lon);
        }

        let center = Coordinate {
            lat: (min_lat + max_lat) / 2.0,
            lon: (min_lon + max_lon) / 2.0,
        };
        // Floored spans are always positive, so the Span invariant holds.
        let span = Span {
            lat_delta: ((max_lat - min_lat) * padding).max(min_span),
            lon_delta: ((max_lon - min_lon) * padding).max(min_span),
        };

        Some(Region { center, span })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).unwrap()
    }

    #[test]
    fn test_coordinate_in_range() {
        assert!(Coordinate::new(34.0522, -118.2437).is_ok());
        assert!(Coordinate::new(90.0, 180.0).is_ok());
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn test_coordinate_out_of_range() {
        assert_eq!(
            Coordinate::new(90.1, 0.0),
            Err(GeoError::InvalidLatitude(90.1))
        );
        assert_eq!(
            Coordinate::new(0.0, -180.5),
            Err(GeoError::InvalidLongitude(-180.5))
        );
        assert!(Coordinate::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_span_must_be_positive() {
        assert!(Span::new(0.1, 0.1).is_ok());
        assert!(Span::new(0.0, 0.1).is_err());
        assert!(Span::new(0.1, -0.1).is_err());
    }

    #[test]
    fn test_region_contains() {
        let region = Region::new(coord(34.0, -118.0), Span::new(1.0, 1.0).unwrap());
        assert!(region.contains(&coord(34.0, -118.0)));
        assert!(region.contains(&coord(34.5, -117.5)));
        assert!(!region.contains(&coord(34.6, -118.0)));
        assert!(!region.contains(&coord(34.0, -116.0)));
    }

    #[test]
    fn test_bounding_single_point_gets_min_span() {
        let region = Region::bounding(&[coord(34.0522, -118.2437)], 0.01, 1.1).unwrap();
        assert_eq!(region.center, coord(34.0522, -118.2437));
        assert_eq!(region.span.lat_delta(), 0.01);
        assert_eq!(region.span.lon_delta(), 0.01);
    }

    #[test]
    fn test_bounding_contains_all_points() {
        let points = vec![
            coord(34.0522, -118.2437),
            coord(34.1016, -118.3267),
            coord(33.9416, -118.4085),
        ];
        let region = Region::bounding(&points, 0.01, 1.1).unwrap();
        for point in &points {
            assert!(region.contains(point), "region should contain {point:?}");
        }
    }

    #[test]
    fn test_bounding_empty_is_none() {
        assert!(Region::bounding(&[], 0.01, 1.1).is_none());
    }
}
