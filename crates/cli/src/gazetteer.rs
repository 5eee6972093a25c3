//! Built-in demo provider: a fixed Los Angeles gazetteer
//!
//! Backs all three provider traits so the demo runs without network access.
//! Matching is case-insensitive substring over label, address, and id;
//! routes are synthesized from straight-line distance at an average
//! driving speed.

use async_trait::async_trait;
use geo::{Coordinate, NamedPoint, Route, RouteStep};
use search::{
    LocationProvider, ProviderError, RoutingProvider, SearchProvider, SearchQuery, SearchResultSet,
};
use tracing::debug;

/// Mean Earth radius in meters
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Average demo driving speed (m/s), roughly 36 mph
const AVERAGE_SPEED_MPS: f64 = 16.0;

/// Downtown Los Angeles, the demo's fixed device location
const HOME_LAT: f64 = 34.0522;
const HOME_LON: f64 = -118.2437;

/// Great-circle distance between two coordinates, in meters
pub fn haversine_meters(a: &Coordinate, b: &Coordinate) -> f64 {
    let phi_a = a.lat().to_radians();
    let phi_b = b.lat().to_radians();
    let d_phi = (b.lat() - a.lat()).to_radians();
    let d_lambda = (b.lon() - a.lon()).to_radians();

    let h = (d_phi / 2.0).sin().powi(2)
        + phi_a.cos() * phi_b.cos() * (d_lambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * h.sqrt().asin()
}

/// A fixed set of places answering search, routing, and location queries
pub struct Gazetteer {
    places: Vec<NamedPoint>,
}

impl Gazetteer {
    /// The demo data set: Los Angeles landmarks and coffee bars
    pub fn los_angeles() -> Self {
        let place = |id: &str, title: &str, address: &str, lat: f64, lon: f64| {
            NamedPoint::new(
                id,
                Coordinate::new(lat, lon).expect("fixture coordinates are valid"),
            )
            .with_title(title)
            .with_address(address)
        };

        Self {
            places: vec![
                place(
                    "union-station",
                    "Union Station",
                    "800 N Alameda St, Los Angeles",
                    34.0556,
                    -118.2365,
                ),
                place(
                    "grand-central-market",
                    "Grand Central Market",
                    "317 S Broadway, Los Angeles",
                    34.0508,
                    -118.2497,
                ),
                place(
                    "griffith-observatory",
                    "Griffith Observatory",
                    "2800 E Observatory Rd, Los Angeles",
                    34.1184,
                    -118.3004,
                ),
                place(
                    "santa-monica-pier",
                    "Santa Monica Pier",
                    "200 Santa Monica Pier, Santa Monica",
                    34.0101,
                    -118.4962,
                ),
                place(
                    "the-getty",
                    "The Getty",
                    "1200 Getty Center Dr, Los Angeles",
                    34.0780,
                    -118.4741,
                ),
                place(
                    "lacma",
                    "Los Angeles County Museum of Art",
                    "5905 Wilshire Blvd, Los Angeles",
                    34.0639,
                    -118.3592,
                ),
                place(
                    "echo-park-lake",
                    "Echo Park Lake",
                    "751 Echo Park Ave, Los Angeles",
                    34.0723,
                    -118.2606,
                ),
                place(
                    "venice-beach-boardwalk",
                    "Venice Beach Boardwalk",
                    "1800 Ocean Front Walk, Venice",
                    33.9850,
                    -118.4695,
                ),
                place(
                    "dodger-stadium",
                    "Dodger Stadium",
                    "1000 Vin Scully Ave, Los Angeles",
                    34.0739,
                    -118.2400,
                ),
                place(
                    "blue-bottle-arts-district",
                    "Blue Bottle Coffee",
                    "582 Mateo St, Los Angeles",
                    34.0407,
                    -118.2326,
                ),
                place(
                    "verve-coffee-dtla",
                    "Verve Coffee Roasters",
                    "833 S Spring St, Los Angeles",
                    34.0417,
                    -118.2552,
                ),
            ],
        }
    }

    /// All places whose label, address, or id contains `text`
    /// (case-insensitive). Blank text matches nothing.
    pub fn find(&self, text: &str) -> Vec<NamedPoint> {
        let needle = text.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        self.places
            .iter()
            .filter(|p| {
                p.label().to_lowercase().contains(&needle)
                    || p.id.contains(&needle)
                    || p.address
                        .as_deref()
                        .is_some_and(|a| a.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect()
    }

    /// Best single match for a place name: an exact label match wins,
    /// otherwise the first substring hit
    pub fn lookup(&self, name: &str) -> Option<NamedPoint> {
        let exact = self
            .places
            .iter()
            .find(|p| p.label().eq_ignore_ascii_case(name.trim()));
        match exact {
            Some(point) => Some(point.clone()),
            None => self.find(name).into_iter().next(),
        }
    }
}

#[async_trait]
impl SearchProvider for Gazetteer {
    async fn search(&self, query: &SearchQuery) -> Result<SearchResultSet, ProviderError> {
        let mut points = self.find(&query.text);
        // A scoped query only returns places inside the given region.
        if let Some(region) = &query.region {
            points.retain(|p| region.contains(&p.coordinate));
        }
        debug!(text = %query.text, hits = points.len(), "gazetteer search");
        Ok(SearchResultSet::new(query.clone(), points))
    }
}

#[async_trait]
impl RoutingProvider for Gazetteer {
    async fn route(
        &self,
        source: &NamedPoint,
        destination: &NamedPoint,
    ) -> Result<Route, ProviderError> {
        if source.id == destination.id {
            return Err(ProviderError::routing(
                "source and destination are the same place",
            ));
        }

        let distance = haversine_meters(&source.coordinate, &destination.coordinate);
        let duration = distance / AVERAGE_SPEED_MPS;
        let midpoint = Coordinate::new(
            (source.coordinate.lat() + destination.coordinate.lat()) / 2.0,
            (source.coordinate.lon() + destination.coordinate.lon()) / 2.0,
        )
        .map_err(|e| ProviderError::routing(e.to_string()))?;

        let steps = vec![
            RouteStep {
                instructions: format!("Head out from {}", source.label()),
                distance_meters: distance * 0.2,
            },
            RouteStep {
                instructions: format!("Continue toward {}", destination.label()),
                distance_meters: distance * 0.6,
            },
            RouteStep {
                instructions: format!("Arrive at {}", destination.label()),
                distance_meters: distance * 0.2,
            },
        ];

        Ok(Route {
            name: format!("{} to {}", source.label(), destination.label()),
            polyline: vec![source.coordinate, midpoint, destination.coordinate],
            distance_meters: distance,
            duration_seconds: duration,
            steps,
        })
    }
}

#[async_trait]
impl LocationProvider for Gazetteer {
    async fn current_location(&self) -> Result<Coordinate, ProviderError> {
        Coordinate::new(HOME_LAT, HOME_LON).map_err(|_| ProviderError::LocationUnavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{Region, Span};

    #[test]
    fn test_find_matches_labels_case_insensitively() {
        let gazetteer = Gazetteer::los_angeles();
        let hits = gazetteer.find("COFFEE");
        let ids: Vec<&str> = hits.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["blue-bottle-arts-district", "verve-coffee-dtla"]);
    }

    #[test]
    fn test_find_blank_matches_nothing() {
        let gazetteer = Gazetteer::los_angeles();
        assert!(gazetteer.find("").is_empty());
        assert!(gazetteer.find("   ").is_empty());
    }

    #[test]
    fn test_lookup_prefers_exact_label() {
        let gazetteer = Gazetteer::los_angeles();
        let hit = gazetteer.lookup("The Getty").unwrap();
        assert_eq!(hit.id, "the-getty");
    }

    #[test]
    fn test_haversine_downtown_to_santa_monica() {
        let downtown = Coordinate::new(34.0522, -118.2437).unwrap();
        let pier = Coordinate::new(34.0101, -118.4962).unwrap();
        let distance = haversine_meters(&downtown, &pier);
        // Roughly 23-24 km as the crow flies.
        assert!(
            (22_000.0..26_000.0).contains(&distance),
            "unexpected distance: {distance}"
        );
    }

    #[tokio::test]
    async fn test_scoped_search_filters_by_region() {
        let gazetteer = Gazetteer::los_angeles();
        // A small region around downtown excludes the west-side museums.
        let downtown = Region::new(
            Coordinate::new(34.05, -118.24).unwrap(),
            Span::new(0.05, 0.05).unwrap(),
        );
        let query = SearchQuery::scoped("los angeles", downtown);

        let results = gazetteer.search(&query).await.unwrap();
        assert!(results.points.iter().all(|p| downtown.contains(&p.coordinate)));
        assert!(results.points.iter().any(|p| p.id == "union-station"));
        assert!(!results.points.iter().any(|p| p.id == "lacma"));
    }

    #[tokio::test]
    async fn test_routing_to_self_fails() {
        let gazetteer = Gazetteer::los_angeles();
        let station = gazetteer.lookup("Union Station").unwrap();
        let err = gazetteer.route(&station, &station).await.unwrap_err();
        assert!(matches!(err, ProviderError::Routing { .. }));
    }

    #[tokio::test]
    async fn test_routes_are_plausible() {
        let gazetteer = Gazetteer::los_angeles();
        let from = gazetteer.lookup("Union Station").unwrap();
        let to = gazetteer.lookup("Santa Monica Pier").unwrap();

        let route = gazetteer.route(&from, &to).await.unwrap();
        assert_eq!(route.polyline.len(), 3);
        assert_eq!(route.steps.len(), 3);
        assert!(route.distance_meters > 0.0);
        assert!(route.duration_seconds > 0.0);

        let step_total: f64 = route.steps.iter().map(|s| s.distance_meters).sum();
        assert!((step_total - route.distance_meters).abs() < 1.0);
    }
}
