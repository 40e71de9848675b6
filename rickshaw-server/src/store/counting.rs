//! Lookup-counting store wrapper.
//!
//! Wraps any [`ReferenceStore`] and counts calls per method, so tests can
//! assert which collaborators a code path consulted (e.g. that a rejected
//! request never reached the store at all).

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::{FixedRoute, Point, StandConnection, StandId};

use super::{NearbyStand, NearbyStation, ReferenceStore, StoreError};

/// A [`ReferenceStore`] that counts lookups and delegates to an inner
/// store. Clones share the counters.
#[derive(Debug, Clone)]
pub struct CountingStore<S> {
    inner: S,
    stand_queries: Arc<AtomicUsize>,
    route_queries: Arc<AtomicUsize>,
    connection_queries: Arc<AtomicUsize>,
    station_queries: Arc<AtomicUsize>,
}

impl<S: ReferenceStore> CountingStore<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            stand_queries: Arc::new(AtomicUsize::new(0)),
            route_queries: Arc::new(AtomicUsize::new(0)),
            connection_queries: Arc::new(AtomicUsize::new(0)),
            station_queries: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn stand_queries(&self) -> usize {
        self.stand_queries.load(Ordering::SeqCst)
    }

    pub fn route_queries(&self) -> usize {
        self.route_queries.load(Ordering::SeqCst)
    }

    pub fn connection_queries(&self) -> usize {
        self.connection_queries.load(Ordering::SeqCst)
    }

    pub fn station_queries(&self) -> usize {
        self.station_queries.load(Ordering::SeqCst)
    }

    /// Total lookups across all methods.
    pub fn total_queries(&self) -> usize {
        self.stand_queries()
            + self.route_queries()
            + self.connection_queries()
            + self.station_queries()
    }
}

impl<S: ReferenceStore> ReferenceStore for CountingStore<S> {
    async fn stands_near(
        &self,
        point: Point,
        radius_km: f64,
    ) -> Result<Vec<NearbyStand>, StoreError> {
        self.stand_queries.fetch_add(1, Ordering::SeqCst);
        self.inner.stands_near(point, radius_km).await
    }

    async fn routes_from_stand_to(
        &self,
        stand_id: &StandId,
        point: Point,
        radius_km: f64,
    ) -> Result<Vec<FixedRoute>, StoreError> {
        self.route_queries.fetch_add(1, Ordering::SeqCst);
        self.inner.routes_from_stand_to(stand_id, point, radius_km).await
    }

    async fn connections_among(
        &self,
        ids: &[StandId],
    ) -> Result<Vec<StandConnection>, StoreError> {
        self.connection_queries.fetch_add(1, Ordering::SeqCst);
        self.inner.connections_among(ids).await
    }

    async fn nearest_station(
        &self,
        point: Point,
        line: &str,
        radius_km: f64,
    ) -> Result<Option<NearbyStation>, StoreError> {
        self.station_queries.fetch_add(1, Ordering::SeqCst);
        self.inner.nearest_station(point, line, radius_km).await
    }
}
