//! Boundary traits for search, routing, and location providers

use async_trait::async_trait;
use geo::{Coordinate, NamedPoint, Route};
use thiserror::Error;

use crate::{SearchQuery, SearchResultSet};

/// Errors surfaced by provider implementations.
///
/// Provider failures are never folded into display state: callers keep the
/// prior state intact and surface a transient indicator instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProviderError {
    #[error("search failed: {message}")]
    Search { message: String },
    #[error("routing failed: {message}")]
    Routing { message: String },
    #[error("current location unavailable")]
    LocationUnavailable,
}

impl ProviderError {
    pub fn search(message: impl Into<String>) -> Self {
        Self::Search {
            message: message.into(),
        }
    }

    pub fn routing(message: impl Into<String>) -> Self {
        Self::Routing {
            message: message.into(),
        }
    }
}

/// A places/geocoding backend
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Run a query and return a timestamped, ordered result set
    async fn search(&self, query: &SearchQuery) -> Result<SearchResultSet, ProviderError>;
}

/// A directions backend
#[async_trait]
pub trait RoutingProvider: Send + Sync {
    /// Compute a driving route between two named points
    async fn route(
        &self,
        source: &NamedPoint,
        destination: &NamedPoint,
    ) -> Result<Route, ProviderError>;
}

/// A device location source.
///
/// Only the latest known coordinate matters; the engine does not consume
/// continuous updates.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn current_location(&self) -> Result<Coordinate, ProviderError>;
}
