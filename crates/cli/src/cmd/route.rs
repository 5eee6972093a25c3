//! `wp route` - demo driving directions between two places

use anyhow::{bail, Result};
use geo::{format_distance, RouteSummary};
use owo_colors::OwoColorize;
use search::RoutingProvider;

use crate::gazetteer::Gazetteer;

pub async fn run(from: &str, to: &str, steps: bool, json: bool) -> Result<()> {
    let gazetteer = Gazetteer::los_angeles();

    let Some(source) = gazetteer.lookup(from) else {
        bail!("no place matches \"{from}\"");
    };
    let Some(destination) = gazetteer.lookup(to) else {
        bail!("no place matches \"{to}\"");
    };

    let route = gazetteer.route(&source, &destination).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&route)?);
        return Ok(());
    }

    let summary = RouteSummary::of(&route);
    println!("{} {}", "Route:".bold(), summary.name);
    println!("{} {}", "Distance:".bold(), summary.distance);
    println!("{} {}", "Estimated time:".bold(), summary.duration);

    if steps {
        println!();
        for step in &route.steps {
            println!(
                "  {}  {}",
                step.instructions,
                format_distance(step.distance_meters).dimmed()
            );
        }
    }

    Ok(())
}
