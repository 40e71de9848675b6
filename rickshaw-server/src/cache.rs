//! Caching layer for routing-provider responses.
//!
//! Road geometry between two points changes slowly, while riders poke the
//! map pin around the same spot repeatedly. We cache provider responses
//! keyed by coordinate buckets (~11 m grid at Mumbai's latitude) with a
//! TTL, which bounds cache cardinality while keeping entries fresh.
//!
//! Failures are never cached; the next request retries the provider.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::domain::Point;
use crate::provider::{ProviderError, ProviderRoute, RoutingProvider};

/// Cache key: origin and destination snapped to a 1e-4 degree grid.
type RouteKey = (i64, i64, i64, i64);

/// Grid resolution: 1e-4 degrees, about 11 m north-south.
const BUCKET_SCALE: f64 = 10_000.0;

/// Configuration for the provider cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(300),
            max_capacity: 10_000,
        }
    }
}

/// Snap a coordinate pair to the cache grid.
fn bucket(p: Point) -> (i64, i64) {
    (
        (p.lat * BUCKET_SCALE).round() as i64,
        (p.lng * BUCKET_SCALE).round() as i64,
    )
}

/// Routing provider with a TTL cache in front.
///
/// Wraps any [`RoutingProvider`]; successful responses are shared via
/// `Arc` between concurrent requests for the same grid cell.
pub struct CachedProvider<P> {
    inner: P,
    routes: MokaCache<RouteKey, Arc<ProviderRoute>>,
}

impl<P: RoutingProvider> CachedProvider<P> {
    /// Wrap a provider with the given cache configuration.
    pub fn new(inner: P, config: &CacheConfig) -> Self {
        let routes = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { inner, routes }
    }

    /// Number of cached entries (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.routes.entry_count()
    }

    /// Drop all cached entries.
    pub fn invalidate_all(&self) {
        self.routes.invalidate_all();
    }
}

impl<P: RoutingProvider> RoutingProvider for CachedProvider<P> {
    async fn route(&self, from: Point, to: Point) -> Result<ProviderRoute, ProviderError> {
        let (flat, flng) = bucket(from);
        let (tlat, tlng) = bucket(to);
        let key = (flat, flng, tlat, tlng);

        if let Some(cached) = self.routes.get(&key).await {
            return Ok((*cached).clone());
        }

        let route = self.inner.route(from, to).await?;
        self.routes.insert(key, Arc::new(route.clone())).await;

        Ok(route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::MockProvider;

    #[test]
    fn bucket_snaps_to_grid() {
        // Fourth decimal place distinguishes buckets.
        let a = bucket(Point::new(19.0596, 72.8295));
        let b = bucket(Point::new(19.0597, 72.8295));
        assert_ne!(a, b);

        // Sub-grid jitter lands in the same bucket.
        let c = bucket(Point::new(19.05960, 72.82950));
        let d = bucket(Point::new(19.05962, 72.82951));
        assert_eq!(c, d);
    }

    #[tokio::test]
    async fn second_lookup_hits_cache() {
        let mock = MockProvider::with_route(5000.0, 900.0, None);
        let cached = CachedProvider::new(mock.clone(), &CacheConfig::default());

        let from = Point::new(19.0596, 72.8295);
        let to = Point::new(19.0176, 72.8479);

        let first = cached.route(from, to).await.unwrap();
        let second = cached.route(from, to).await.unwrap();

        assert_eq!(first.distance_meters, second.distance_meters);
        // Only one call reached the inner provider.
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn failures_are_not_cached() {
        let mock = MockProvider::failing();
        let cached = CachedProvider::new(mock.clone(), &CacheConfig::default());

        let from = Point::new(19.0596, 72.8295);
        let to = Point::new(19.0176, 72.8479);

        assert!(cached.route(from, to).await.is_err());
        assert!(cached.route(from, to).await.is_err());

        // Both attempts reached the inner provider.
        assert_eq!(mock.call_count(), 2);
        assert_eq!(cached.entry_count(), 0);
    }

    #[test]
    fn default_config() {
        let config = CacheConfig::default();
        assert_eq!(config.ttl, Duration::from_secs(300));
        assert_eq!(config.max_capacity, 10_000);
    }
}
