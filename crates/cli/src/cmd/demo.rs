//! `wp demo` - play a scripted scenario through the engine

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::player::{self, Playback};
use crate::scenario::Scenario;
use crate::util;

/// Debounce window for scripted keystroke bursts
const DEMO_QUIET_WINDOW: Duration = Duration::from_millis(150);

pub async fn run(scenario_path: Option<PathBuf>, json: bool) -> Result<()> {
    let scenario = match scenario_path {
        Some(path) => Scenario::from_file(&path)?,
        None => Scenario::builtin(),
    };

    let playback = player::play(&scenario, DEMO_QUIET_WINDOW).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&playback.plans)?);
        return Ok(());
    }

    print_playback(&playback);
    Ok(())
}

fn print_playback(playback: &Playback) {
    for plan in &playback.plans {
        println!("{}", plan.trigger.yellow());
        if plan.mutations.is_empty() {
            println!("  {}", "(no mutations)".dimmed());
        }
        for mutation in &plan.mutations {
            util::print_mutation(mutation);
        }
    }

    println!();
    println!(
        "Final surface: {} point(s), route {}, selected: {}",
        playback.surface.points.len(),
        if playback.surface.route.is_some() {
            "shown"
        } else {
            "none"
        },
        playback.surface.selected.as_deref().unwrap_or("none"),
    );
}
