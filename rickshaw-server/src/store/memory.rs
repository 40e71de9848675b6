//! In-memory reference-data snapshot.
//!
//! Loads the stand/route/connection/station registry from a JSON seed file
//! at startup and serves lookups from memory. Doubles as the test fake:
//! tests seed it directly with [`MemoryStore::from_snapshot`].

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{FixedRoute, Point, Stand, StandConnection, StandId, TrainStation};

use super::{NearbyStand, NearbyStation, ReferenceStore, StoreError};

/// On-disk shape of the reference data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReferenceSnapshot {
    #[serde(default)]
    pub stands: Vec<Stand>,
    #[serde(default)]
    pub routes: Vec<FixedRoute>,
    #[serde(default)]
    pub connections: Vec<StandConnection>,
    #[serde(default)]
    pub stations: Vec<TrainStation>,
}

/// Immutable in-memory reference store.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    snapshot: ReferenceSnapshot,
}

impl MemoryStore {
    /// Create a store over an already-built snapshot.
    pub fn from_snapshot(snapshot: ReferenceSnapshot) -> Self {
        Self { snapshot }
    }

    /// Create an empty store (for test/offline mode).
    pub fn empty() -> Self {
        Self::from_snapshot(ReferenceSnapshot::default())
    }

    /// Load a snapshot from a JSON seed file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| StoreError::Snapshot(format!("failed to read {}: {e}", path.display())))?;
        let snapshot: ReferenceSnapshot = serde_json::from_str(&json)
            .map_err(|e| StoreError::Snapshot(format!("failed to parse {}: {e}", path.display())))?;
        Ok(Self::from_snapshot(snapshot))
    }

    /// Number of stands in the snapshot.
    pub fn stand_count(&self) -> usize {
        self.snapshot.stands.len()
    }

    /// Number of stations in the snapshot.
    pub fn station_count(&self) -> usize {
        self.snapshot.stations.len()
    }
}

/// Sort ascending by distance; ties keep snapshot order.
fn sort_by_distance<T>(items: &mut [(T, f64)]) {
    items.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
}

impl ReferenceStore for MemoryStore {
    async fn stands_near(
        &self,
        point: Point,
        radius_km: f64,
    ) -> Result<Vec<NearbyStand>, StoreError> {
        let mut hits: Vec<(Stand, f64)> = self
            .snapshot
            .stands
            .iter()
            .map(|s| (s.clone(), s.location.distance_km(&point)))
            .filter(|(_, d)| *d <= radius_km)
            .collect();
        sort_by_distance(&mut hits);

        Ok(hits
            .into_iter()
            .map(|(stand, distance_km)| NearbyStand { stand, distance_km })
            .collect())
    }

    async fn routes_from_stand_to(
        &self,
        stand_id: &StandId,
        point: Point,
        radius_km: f64,
    ) -> Result<Vec<FixedRoute>, StoreError> {
        Ok(self
            .snapshot
            .routes
            .iter()
            .filter(|r| &r.stand_id == stand_id)
            .filter(|r| {
                r.destination_location
                    .is_some_and(|loc| loc.distance_km(&point) <= radius_km)
            })
            .cloned()
            .collect())
    }

    async fn connections_among(
        &self,
        ids: &[StandId],
    ) -> Result<Vec<StandConnection>, StoreError> {
        let wanted: HashSet<&StandId> = ids.iter().collect();
        Ok(self
            .snapshot
            .connections
            .iter()
            .filter(|c| wanted.contains(&c.from_stand_id) && wanted.contains(&c.to_stand_id))
            .cloned()
            .collect())
    }

    async fn nearest_station(
        &self,
        point: Point,
        line: &str,
        radius_km: f64,
    ) -> Result<Option<NearbyStation>, StoreError> {
        let best = self
            .snapshot
            .stations
            .iter()
            .filter(|s| s.line == line)
            .map(|s| (s.clone(), s.location.distance_km(&point)))
            .filter(|(_, d)| *d <= radius_km)
            .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

        Ok(best.map(|(station, distance_km)| NearbyStation {
            station,
            distance_km,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn stand(id: &str, name: &str, lat: f64, lng: f64) -> Stand {
        Stand {
            id: StandId::new(id),
            name: name.into(),
            location: Point::new(lat, lng),
            operating_hours: "6am - 11pm".into(),
        }
    }

    fn station(id: &str, name: &str, line: &str, lat: f64, lng: f64) -> TrainStation {
        TrainStation {
            id: id.into(),
            name: name.into(),
            location: Point::new(lat, lng),
            line: line.into(),
        }
    }

    fn connection(from: &str, to: &str, mins: f64) -> StandConnection {
        StandConnection {
            from_stand_id: StandId::new(from),
            to_stand_id: StandId::new(to),
            distance_km: 3.0,
            travel_time_minutes: mins,
            fare: 20.0,
        }
    }

    fn test_store() -> MemoryStore {
        MemoryStore::from_snapshot(ReferenceSnapshot {
            stands: vec![
                stand("bandra", "Bandra Station (W)", 19.0544, 72.8402),
                stand("khar", "Khar Danda", 19.0686, 72.8440),
                stand("dadar", "Dadar TT", 19.0178, 72.8478),
            ],
            routes: vec![FixedRoute {
                id: "r1".into(),
                stand_id: StandId::new("bandra"),
                destination: "Dadar TT".into(),
                destination_location: Some(Point::new(19.0178, 72.8478)),
                fare: 30.0,
                travel_time: "20-25 mins".into(),
            }],
            connections: vec![
                connection("bandra", "khar", 10.0),
                connection("bandra", "dadar", 20.0),
            ],
            stations: vec![
                station("st-bandra", "Bandra", "Western", 19.0547, 72.8407),
                station("st-khar", "Khar Road", "Western", 19.0693, 72.8434),
                station("st-kurla", "Kurla", "Central", 19.0653, 72.8790),
            ],
        })
    }

    #[tokio::test]
    async fn stands_sorted_ascending_by_distance() {
        let store = test_store();
        let near = Point::new(19.0596, 72.8295);

        let hits = store.stands_near(near, 5.0).await.unwrap();

        assert_eq!(hits.len(), 2); // dadar is further than 5 km
        assert_eq!(hits[0].stand.id.as_str(), "bandra");
        assert_eq!(hits[1].stand.id.as_str(), "khar");
        assert!(hits[0].distance_km <= hits[1].distance_km);
    }

    #[tokio::test]
    async fn stands_empty_when_out_of_range() {
        let store = test_store();
        let far = Point::new(19.29, 72.99);

        let hits = store.stands_near(far, 2.0).await.unwrap();
        assert!(hits.is_empty());
    }

    #[tokio::test]
    async fn routes_filtered_by_stand_and_destination() {
        let store = test_store();
        let near_dadar = Point::new(19.0176, 72.8479);

        let routes = store
            .routes_from_stand_to(&StandId::new("bandra"), near_dadar, 2.0)
            .await
            .unwrap();
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].id, "r1");

        // Same destination, different stand: nothing.
        let routes = store
            .routes_from_stand_to(&StandId::new("khar"), near_dadar, 2.0)
            .await
            .unwrap();
        assert!(routes.is_empty());
    }

    #[tokio::test]
    async fn connections_require_both_endpoints() {
        let store = test_store();

        let ids = vec![StandId::new("bandra"), StandId::new("khar")];
        let conns = store.connections_among(&ids).await.unwrap();
        assert_eq!(conns.len(), 1);
        assert_eq!(conns[0].to_stand_id.as_str(), "khar");

        let conns = store.connections_among(&[]).await.unwrap();
        assert!(conns.is_empty());
    }

    #[tokio::test]
    async fn nearest_station_respects_line_filter() {
        let store = test_store();
        let p = Point::new(19.0596, 72.8295);

        let western = store.nearest_station(p, "Western", 5.0).await.unwrap();
        assert_eq!(western.unwrap().station.id, "st-bandra");

        let harbour = store.nearest_station(p, "Harbour", 5.0).await.unwrap();
        assert!(harbour.is_none());
    }

    #[test]
    fn load_from_seed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let snapshot = ReferenceSnapshot {
            stands: vec![stand("s1", "Test stand", 19.0, 72.85)],
            ..Default::default()
        };
        write!(file, "{}", serde_json::to_string(&snapshot).unwrap()).unwrap();

        let store = MemoryStore::load(file.path()).unwrap();
        assert_eq!(store.stand_count(), 1);
        assert_eq!(store.station_count(), 0);
    }

    #[test]
    fn load_rejects_malformed_seed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let result = MemoryStore::load(file.path());
        assert!(matches!(result, Err(StoreError::Snapshot(_))));
    }
}
