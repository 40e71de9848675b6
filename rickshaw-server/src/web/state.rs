//! Application state for the web layer.

use std::sync::Arc;

use crate::engine::{EngineConfig, RouteEngine};
use crate::provider::RoutingProvider;
use crate::store::ReferenceStore;

/// Shared application state: the route engine behind an `Arc`.
///
/// Generic over the store and provider so tests can run the full HTTP
/// surface against in-memory fakes.
pub struct AppState<S, P> {
    pub engine: Arc<RouteEngine<S, P>>,
}

impl<S, P> Clone for AppState<S, P> {
    fn clone(&self) -> Self {
        Self {
            engine: Arc::clone(&self.engine),
        }
    }
}

impl<S: ReferenceStore, P: RoutingProvider> AppState<S, P> {
    pub fn new(store: S, provider: P, config: EngineConfig) -> Self {
        Self {
            engine: Arc::new(RouteEngine::new(store, provider, config)),
        }
    }
}
