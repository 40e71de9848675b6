//! Directed connections between stands.

use serde::{Deserialize, Serialize};

use super::StandId;

/// A directed weighted edge between two stands.
///
/// Used only to build the in-memory graph for hybrid routing. Not
/// guaranteed symmetric: the absence of the reverse edge is valid and means
/// that direction is unreachable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandConnection {
    pub from_stand_id: StandId,
    pub to_stand_id: StandId,

    /// Road distance in kilometres.
    pub distance_km: f64,

    /// Typical shared-auto travel time; this is the edge weight the
    /// shortest-path solver minimizes.
    pub travel_time_minutes: f64,

    /// Per-seat fare in rupees.
    pub fare: f64,
}
