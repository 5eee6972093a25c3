//! `wp search` - query the built-in gazetteer

use anyhow::Result;
use search::{SearchProvider, SearchQuery};

use crate::gazetteer::Gazetteer;
use crate::util;

pub async fn run(query: &str, json: bool) -> Result<()> {
    let gazetteer = Gazetteer::los_angeles();
    let results = gazetteer.search(&SearchQuery::new(query)).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&results.points)?);
        return Ok(());
    }

    if results.points.is_empty() {
        println!("No places match \"{query}\"");
        return Ok(());
    }

    println!("{} place(s) match \"{query}\":", results.points.len());
    for point in &results.points {
        util::print_point(point);
    }

    Ok(())
}
