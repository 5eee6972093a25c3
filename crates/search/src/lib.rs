//! Search intake for the map reconciliation engine
//!
//! This crate provides:
//! - SearchQuery / SearchResultSet event types
//! - Trailing-edge debouncing of raw text-change events
//! - Request tagging to discard stale in-flight responses
//! - Boundary traits for search, routing, and location providers

pub mod debounce;
pub mod gate;
pub mod provider;

use geo::{NamedPoint, Region};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

// Re-exports
pub use debounce::{DebounceConfig, Debouncer};
pub use gate::QueryGate;
pub use provider::{LocationProvider, ProviderError, RoutingProvider, SearchProvider};

/// A raw text query, optionally scoped to a map region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub text: String,
    /// Region the provider should bias results toward, when known
    pub region: Option<Region>,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            region: None,
        }
    }

    pub fn scoped(text: impl Into<String>, region: Region) -> Self {
        Self {
            text: text.into(),
            region: Some(region),
        }
    }

    /// Whether the query text is empty or whitespace-only
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// An ordered set of search hits, stamped for staleness detection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultSet {
    pub query: SearchQuery,
    pub points: Vec<NamedPoint>,
    /// Unix-ms timestamp; responses older than the last applied set are dropped
    pub ts_unix_ms: u64,
}

impl SearchResultSet {
    /// Create a result set stamped with the current time
    pub fn new(query: SearchQuery, points: Vec<NamedPoint>) -> Self {
        Self::with_timestamp(query, points, now_unix_ms())
    }

    pub fn with_timestamp(query: SearchQuery, points: Vec<NamedPoint>, ts_unix_ms: u64) -> Self {
        Self {
            query,
            points,
            ts_unix_ms,
        }
    }
}

/// Current time as Unix milliseconds
pub fn now_unix_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_queries() {
        assert!(SearchQuery::new("").is_blank());
        assert!(SearchQuery::new("   ").is_blank());
        assert!(!SearchQuery::new("coffee").is_blank());
    }

    #[test]
    fn test_result_set_timestamps_are_monotonic_enough() {
        let earlier = SearchResultSet::new(SearchQuery::new("a"), vec![]);
        let later = SearchResultSet::new(SearchQuery::new("b"), vec![]);
        assert!(later.ts_unix_ms >= earlier.ts_unix_ms);
    }
}
