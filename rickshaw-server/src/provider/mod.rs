//! External turn-by-turn routing provider.
//!
//! The direct-auto synthesizer delegates road geometry, distance, and
//! duration to an OSRM-compatible HTTP service. The [`RoutingProvider`]
//! trait abstracts that call so tests and offline runs can substitute
//! [`MockProvider`], and `cache.rs` can wrap any provider with a TTL cache.

mod client;
mod error;
mod mock;
mod types;

use std::future::Future;

pub use client::{OsrmClient, OsrmConfig};
pub use error::ProviderError;
pub use mock::MockProvider;
pub use types::{OsrmResponse, OsrmRoute};

use crate::domain::Point;

/// A turn-by-turn route from the external provider.
#[derive(Debug, Clone)]
pub struct ProviderRoute {
    pub distance_meters: f64,
    pub duration_seconds: f64,
    /// Encoded polyline, when the provider returned one.
    pub geometry: Option<String>,
}

/// Turn-by-turn routing between two raw coordinates.
pub trait RoutingProvider: Send + Sync {
    /// Route from `from` to `to`.
    ///
    /// Fails with [`ProviderError::NoRoute`] when the provider finds no
    /// road route between the points.
    fn route(
        &self,
        from: Point,
        to: Point,
    ) -> impl Future<Output = Result<ProviderRoute, ProviderError>> + Send;
}
