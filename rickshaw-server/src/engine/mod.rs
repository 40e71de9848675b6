//! Route computation engine.
//!
//! The orchestrator validates both endpoints against the service bounding
//! box, then fans out to four independent synthesizers concurrently:
//! stand-based single-hop routes, multi-hop hybrid routes over the stand
//! graph, a direct auto route from the external routing provider, and a
//! train-assisted route. Each synthesizer degrades to an empty or absent
//! result on failure; one broken collaborator never aborts the others.

mod config;
mod direct;
mod graph;
mod hybrid;
mod stand_routes;
mod train;

use chrono::{DateTime, Utc};

pub use config::EngineConfig;
pub use graph::{StandEdge, StandGraph, StandNode};

use crate::domain::{ComputedRoute, Point};
use crate::provider::RoutingProvider;
use crate::store::ReferenceStore;

/// Errors surfaced to the caller by the orchestrator.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// An endpoint lies outside the Mumbai service bounding box. Rejected
    /// before any synthesizer runs.
    #[error("point ({lat}, {lng}) is outside the service area")]
    OutsideServiceArea { lat: f64, lng: f64 },
}

/// One routing request: two endpoints, with optional display labels.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub origin: Point,
    pub destination: Point,
    pub origin_name: Option<String>,
    pub destination_name: Option<String>,
}

impl RouteRequest {
    pub fn new(origin: Point, destination: Point) -> Self {
        Self {
            origin,
            destination,
            origin_name: None,
            destination_name: None,
        }
    }

    /// Set display labels for the endpoints.
    pub fn with_names(
        mut self,
        origin_name: Option<String>,
        destination_name: Option<String>,
    ) -> Self {
        self.origin_name = origin_name;
        self.destination_name = destination_name;
        self
    }

    /// Display label for the origin; falls back to the raw coordinate.
    pub fn origin_label(&self) -> String {
        self.origin_name
            .clone()
            .unwrap_or_else(|| self.origin.label())
    }

    /// Display label for the destination; falls back to the raw coordinate.
    pub fn destination_label(&self) -> String {
        self.destination_name
            .clone()
            .unwrap_or_else(|| self.destination.label())
    }
}

/// The four synthesizer outputs, one key per algorithm.
///
/// Empty lists and `None` mean "that algorithm found nothing", which is a
/// legitimate result, not an error.
#[derive(Debug, Clone, Default)]
pub struct RouteSet {
    pub stand_routes: Vec<ComputedRoute>,
    pub hybrid_routes: Vec<ComputedRoute>,
    pub direct_auto: Option<ComputedRoute>,
    pub train_route: Option<ComputedRoute>,
}

/// Metadata describing one search.
#[derive(Debug, Clone)]
pub struct SearchMetadata {
    pub start_location: String,
    pub end_location: String,
    /// Number of algorithms consulted; fixed at four.
    pub total_options: usize,
    pub searched_at: DateTime<Utc>,
}

/// Complete engine output for one request.
#[derive(Debug, Clone)]
pub struct RouteSearchResponse {
    pub routes: RouteSet,
    pub search_metadata: SearchMetadata,
}

/// The routing engine: a stateless service over an injected reference
/// store and routing provider.
///
/// Reference data is read-only during a request and the synthesizers
/// share no mutable state, so concurrent fan-out needs no locking.
#[derive(Debug, Clone)]
pub struct RouteEngine<S, P> {
    store: S,
    provider: P,
    config: EngineConfig,
}

impl<S: ReferenceStore, P: RoutingProvider> RouteEngine<S, P> {
    pub fn new(store: S, provider: P, config: EngineConfig) -> Self {
        Self {
            store,
            provider,
            config,
        }
    }

    /// The underlying reference store, for direct lookups outside route
    /// computation (e.g. the nearby-stands endpoint).
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run all four synthesizers concurrently and assemble the uniform
    /// response.
    ///
    /// # Errors
    ///
    /// [`EngineError::OutsideServiceArea`] when either endpoint fails the
    /// bounding-box check; no synthesizer runs in that case.
    pub async fn calculate_routes(
        &self,
        request: RouteRequest,
    ) -> Result<RouteSearchResponse, EngineError> {
        for point in [request.origin, request.destination] {
            if !point.in_service_area() {
                return Err(EngineError::OutsideServiceArea {
                    lat: point.lat,
                    lng: point.lng,
                });
            }
        }

        let (stand_routes, hybrid_routes, direct_auto, train_route) = futures::join!(
            stand_routes::synthesize(&self.store, &self.config, &request),
            hybrid::synthesize(&self.store, &self.config, &request),
            direct::synthesize(&self.provider, &self.config, &request),
            train::synthesize(&self.store, &self.config, &request),
        );

        tracing::debug!(
            stand = stand_routes.len(),
            hybrid = hybrid_routes.len(),
            direct = direct_auto.is_some(),
            train = train_route.is_some(),
            "route synthesis complete"
        );

        Ok(RouteSearchResponse {
            routes: RouteSet {
                stand_routes,
                hybrid_routes,
                direct_auto,
                train_route,
            },
            search_metadata: SearchMetadata {
                start_location: request.origin_label(),
                end_location: request.destination_label(),
                total_options: 4,
                searched_at: Utc::now(),
            },
        })
    }
}
