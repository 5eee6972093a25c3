//! Named map points (search hits, route endpoints)

use crate::coord::Coordinate;
use serde::{Deserialize, Serialize};

/// A labeled geographic location.
///
/// The `id` is the stable key used when diffing displayed sets; it must be
/// unique within any one set of displayed points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedPoint {
    /// Stable identifier (diff key)
    pub id: String,
    pub coordinate: Coordinate,
    /// Display title, falls back to `id` when absent
    pub title: Option<String>,
    pub address: Option<String>,
}

impl NamedPoint {
    pub fn new(id: impl Into<String>, coordinate: Coordinate) -> Self {
        Self {
            id: id.into(),
            coordinate,
            title: None,
            address: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Label shown on the surface: the title when present, the id otherwise
    pub fn label(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.id)
    }
}
