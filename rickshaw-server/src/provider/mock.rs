//! Mock routing provider for tests and offline runs.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::Point;

use super::error::ProviderError;
use super::{ProviderRoute, RoutingProvider};

/// Routing provider that serves a canned response or a canned failure.
///
/// Counts calls so tests can assert whether the direct-auto synthesizer
/// was dispatched at all.
#[derive(Clone)]
pub struct MockProvider {
    response: Option<(f64, f64, Option<String>)>,
    calls: Arc<AtomicUsize>,
}

impl MockProvider {
    /// Provider that always returns the given distance/duration/geometry.
    pub fn with_route(
        distance_meters: f64,
        duration_seconds: f64,
        geometry: Option<String>,
    ) -> Self {
        Self {
            response: Some((distance_meters, duration_seconds, geometry)),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Provider that always fails with [`ProviderError::NoRoute`].
    pub fn failing() -> Self {
        Self {
            response: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of route calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl RoutingProvider for MockProvider {
    async fn route(&self, _from: Point, _to: Point) -> Result<ProviderRoute, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match &self.response {
            Some((distance_meters, duration_seconds, geometry)) => Ok(ProviderRoute {
                distance_meters: *distance_meters,
                duration_seconds: *duration_seconds,
                geometry: geometry.clone(),
            }),
            None => Err(ProviderError::NoRoute),
        }
    }
}
