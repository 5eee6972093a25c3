//! Atomic instructions for a map surface

use geo::{NamedPoint, Region, Route};
use serde::{Deserialize, Serialize};

/// An atomic instruction changing what a map surface displays.
///
/// Plans are ordered; a surface must apply each mutation exactly once, in
/// order. Removals are always emitted before additions so replaced
/// identifiers never briefly coexist under two attribute sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MapMutation {
    AddPoints(Vec<NamedPoint>),
    RemovePoints(Vec<String>),
    ShowRoute(Route),
    ClearRoute,
    SetRegion(Region),
    Select(String),
}

impl MapMutation {
    /// Short tag for logs and plan listings
    pub fn kind(&self) -> &'static str {
        match self {
            MapMutation::AddPoints(_) => "add-points",
            MapMutation::RemovePoints(_) => "remove-points",
            MapMutation::ShowRoute(_) => "show-route",
            MapMutation::ClearRoute => "clear-route",
            MapMutation::SetRegion(_) => "set-region",
            MapMutation::Select(_) => "select",
        }
    }
}
