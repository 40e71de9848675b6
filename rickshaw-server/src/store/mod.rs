//! Reference-data access.
//!
//! The engine consumes stands, fixed routes, connections, and stations
//! through the [`ReferenceStore`] trait so that tests can substitute fakes
//! and deployments can swap the backing store. Data behind the trait is an
//! immutable snapshot for the duration of one routing computation; the
//! engine never writes through it.

mod counting;
mod memory;

use std::future::Future;

pub use counting::CountingStore;
pub use memory::{MemoryStore, ReferenceSnapshot};

use crate::domain::{FixedRoute, Point, Stand, StandConnection, StandId, TrainStation};

/// Errors from a reference-data lookup.
///
/// Synthesizers treat any of these as "no data for this sub-query" and
/// degrade to an empty result rather than failing the whole request.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    /// The backing store could not be reached.
    #[error("reference store unavailable: {0}")]
    Unavailable(String),

    /// The snapshot could not be loaded or parsed.
    #[error("snapshot error: {0}")]
    Snapshot(String),
}

/// A stand together with its distance from the query point.
#[derive(Debug, Clone)]
pub struct NearbyStand {
    pub stand: Stand,
    pub distance_km: f64,
}

/// A station together with its distance from the query point.
#[derive(Debug, Clone)]
pub struct NearbyStation {
    pub station: TrainStation,
    pub distance_km: f64,
}

/// Read-only access to routing reference data.
///
/// All methods are async: real deployments suspend on I/O here. Results
/// that are lists come back ascending by distance where a distance is
/// involved, and empty (not an error) when nothing matches.
pub trait ReferenceStore: Send + Sync {
    /// All stands within `radius_km` of `point`, ascending by distance,
    /// radius inclusive.
    fn stands_near(
        &self,
        point: Point,
        radius_km: f64,
    ) -> impl Future<Output = Result<Vec<NearbyStand>, StoreError>> + Send;

    /// Fixed routes belonging to `stand_id` whose destination lies within
    /// `radius_km` of `point`. Routes without a recorded destination
    /// coordinate cannot match.
    fn routes_from_stand_to(
        &self,
        stand_id: &StandId,
        point: Point,
        radius_km: f64,
    ) -> impl Future<Output = Result<Vec<FixedRoute>, StoreError>> + Send;

    /// All connections whose endpoints are both in `ids`.
    fn connections_among(
        &self,
        ids: &[StandId],
    ) -> impl Future<Output = Result<Vec<StandConnection>, StoreError>> + Send;

    /// The nearest station on `line` within `radius_km` of `point`, or
    /// `None` when no station on that line is in range.
    fn nearest_station(
        &self,
        point: Point,
        line: &str,
        radius_km: f64,
    ) -> impl Future<Output = Result<Option<NearbyStation>, StoreError>> + Send;
}
