//! Scripted UI scenarios for the demo command

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One scripted UI event
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "kebab-case")]
pub enum ScenarioStep {
    /// A keystroke burst: each entry is the text-field content after a key
    Type { entries: Vec<String> },
    /// Tap a search hit by id
    Select { id: String },
    /// Set the route source endpoint by place name
    Source { place: String },
    /// Set the route destination endpoint by place name
    Destination { place: String },
    /// Clear the shown route and both endpoints
    ClearRoute,
}

/// An ordered script of UI events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub steps: Vec<ScenarioStep>,
}

impl Scenario {
    /// The built-in demo: search for coffee while typing, pick a hit,
    /// then ask for directions across town.
    pub fn builtin() -> Self {
        Self {
            steps: vec![
                ScenarioStep::Type {
                    entries: vec![
                        "c".to_string(),
                        "co".to_string(),
                        "cof".to_string(),
                        "coffee".to_string(),
                    ],
                },
                ScenarioStep::Select {
                    id: "verve-coffee-dtla".to_string(),
                },
                ScenarioStep::Source {
                    place: "Union Station".to_string(),
                },
                ScenarioStep::Destination {
                    place: "Santa Monica Pier".to_string(),
                },
            ],
        }
    }

    /// Load a scenario from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read scenario file: {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("invalid scenario file: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_json_round_trip() {
        let scenario = Scenario::builtin();
        let json = serde_json::to_string_pretty(&scenario).unwrap();
        let parsed: Scenario = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.steps.len(), scenario.steps.len());
    }

    #[test]
    fn test_scenario_step_tags_are_kebab_case() {
        let json = serde_json::to_string(&ScenarioStep::ClearRoute).unwrap();
        assert_eq!(json, r#"{"step":"clear-route"}"#);
    }
}
