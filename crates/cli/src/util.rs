//! Shared output helpers for CLI commands

use geo::{format_distance, format_duration, NamedPoint};
use owo_colors::OwoColorize;
use reconcile::MapMutation;

/// Print a search hit in compact form
pub fn print_point(point: &NamedPoint) {
    let coordinate = format!(
        "({:.4}, {:.4})",
        point.coordinate.lat(),
        point.coordinate.lon()
    );
    match &point.address {
        Some(address) => println!(
            "{}  {}  {}",
            point.label().yellow(),
            address.dimmed(),
            coordinate
        ),
        None => println!("{}  {}", point.label().yellow(), coordinate),
    }
}

/// One-line description of a mutation for plan listings
pub fn describe_mutation(mutation: &MapMutation) -> String {
    match mutation {
        MapMutation::AddPoints(points) => {
            let labels: Vec<&str> = points.iter().map(|p| p.label()).collect();
            format!("add {} point(s): {}", points.len(), labels.join(", "))
        }
        MapMutation::RemovePoints(ids) => {
            format!("remove {} point(s): {}", ids.len(), ids.join(", "))
        }
        MapMutation::ShowRoute(route) => format!(
            "show route \"{}\" ({}, {})",
            route.name,
            format_distance(route.distance_meters),
            format_duration(route.duration_seconds)
        ),
        MapMutation::ClearRoute => "clear route".to_string(),
        MapMutation::SetRegion(region) => format!(
            "set region to ({:.4}, {:.4}) spanning {:.3} x {:.3}",
            region.center.lat(),
            region.center.lon(),
            region.span.lat_delta(),
            region.span.lon_delta()
        ),
        MapMutation::Select(id) => format!("select \"{id}\""),
    }
}

/// Print one mutation with its kind tag
pub fn print_mutation(mutation: &MapMutation) {
    println!(
        "  {:<13} {}",
        mutation.kind().cyan(),
        describe_mutation(mutation)
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{Coordinate, Route};

    #[test]
    fn test_describe_add_points() {
        let points = vec![
            NamedPoint::new("a", Coordinate::new(34.0, -118.0).unwrap()).with_title("Cafe A"),
            NamedPoint::new("b", Coordinate::new(34.1, -118.1).unwrap()),
        ];
        assert_eq!(
            describe_mutation(&MapMutation::AddPoints(points)),
            "add 2 point(s): Cafe A, b"
        );
    }

    #[test]
    fn test_describe_show_route_uses_summary_labels() {
        let route = Route {
            name: "US 101 S".to_string(),
            polyline: vec![],
            distance_meters: 1609.34,
            duration_seconds: 120.0,
            steps: vec![],
        };
        assert_eq!(
            describe_mutation(&MapMutation::ShowRoute(route)),
            "show route \"US 101 S\" (1.00 mi, 2 min)"
        );
    }
}
