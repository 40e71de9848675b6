//! Train-assisted route: walk to the nearest station on the configured
//! line, ride to the station nearest the destination, walk the rest.

use crate::domain::{ComputedRoute, RouteKind, RouteSegment, TravelMode};
use crate::fare::{TRAIN_MINUTES_PER_KM, estimate_train_fare};
use crate::geo::travel_minutes;
use crate::store::ReferenceStore;

use super::RouteRequest;
use super::config::EngineConfig;

/// At most one train route, or `None` when either station lookup comes up
/// empty or both endpoints resolve to the same station (a same-station
/// train leg is meaningless, not an error).
pub(crate) async fn synthesize<S: ReferenceStore>(
    store: &S,
    config: &EngineConfig,
    request: &RouteRequest,
) -> Option<ComputedRoute> {
    let start = match store
        .nearest_station(request.origin, &config.train_line, config.search_radius_km)
        .await
    {
        Ok(Some(station)) => station,
        Ok(None) => return None,
        Err(error) => {
            tracing::warn!(%error, "start station lookup failed, skipping train route");
            return None;
        }
    };

    let end = match store
        .nearest_station(
            request.destination,
            &config.train_line,
            config.search_radius_km,
        )
        .await
    {
        Ok(Some(station)) => station,
        Ok(None) => return None,
        Err(error) => {
            tracing::warn!(%error, "end station lookup failed, skipping train route");
            return None;
        }
    };

    if start.station.id == end.station.id {
        return None;
    }

    let ride_km = start.station.location.distance_km(&end.station.location);

    // Speed-derived estimate; the platform wait is folded into the ride
    // segment so route totals stay the sum of their segments.
    let ride_mins = ride_km * TRAIN_MINUTES_PER_KM + config.pickup_wait_mins;
    let ride_fare = estimate_train_fare(ride_km);

    let segments = vec![
        RouteSegment::new(
            TravelMode::Walk,
            request.origin_label(),
            start.station.name.clone(),
            start.distance_km,
            travel_minutes(start.distance_km, config.walk_speed_kmh),
            None,
        ),
        RouteSegment::new(
            TravelMode::Train,
            start.station.name.clone(),
            end.station.name.clone(),
            ride_km,
            ride_mins,
            Some(ride_fare),
        ),
        RouteSegment::new(
            TravelMode::Walk,
            end.station.name.clone(),
            request.destination_label(),
            end.distance_km,
            travel_minutes(end.distance_km, config.walk_speed_kmh),
            None,
        ),
    ];

    let id = format!("train-{}-{}", start.station.id, end.station.id);
    let title = format!(
        "{} line: {} to {}",
        config.train_line, start.station.name, end.station.name
    );

    match ComputedRoute::new(id, RouteKind::TrainRoute, title, segments, None) {
        Ok(route) => Some(route),
        Err(error) => {
            tracing::warn!(%error, "discarding malformed train route");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Point, TrainStation};
    use crate::store::{MemoryStore, ReferenceSnapshot};

    const ORIGIN: Point = Point {
        lat: 19.0596,
        lng: 72.8295,
    };
    const DESTINATION: Point = Point {
        lat: 19.0176,
        lng: 72.8479,
    };

    fn station(id: &str, name: &str, line: &str, location: Point) -> TrainStation {
        TrainStation {
            id: id.to_string(),
            name: name.to_string(),
            location,
            line: line.to_string(),
        }
    }

    fn store_with(stations: Vec<TrainStation>) -> MemoryStore {
        MemoryStore::from_snapshot(ReferenceSnapshot {
            stands: Vec::new(),
            routes: Vec::new(),
            connections: Vec::new(),
            stations,
        })
    }

    #[tokio::test]
    async fn distinct_stations_yield_three_segments() {
        let store = store_with(vec![
            station("st-bandra", "Bandra", "Western", Point::new(19.0547, 72.8407)),
            station("st-dadar", "Dadar", "Western", Point::new(19.0185, 72.8442)),
        ]);
        let config = EngineConfig::default();
        let request = RouteRequest::new(ORIGIN, DESTINATION);

        let route = synthesize(&store, &config, &request).await.unwrap();

        assert_eq!(route.kind, RouteKind::TrainRoute);
        assert_eq!(route.confidence, 0.7);
        assert_eq!(route.segments.len(), 3);
        assert_eq!(route.segments[0].mode, TravelMode::Walk);
        assert_eq!(route.segments[1].mode, TravelMode::Train);
        assert_eq!(route.segments[2].mode, TravelMode::Walk);
        assert_eq!(route.id, "train-st-bandra-st-dadar");

        // Ride time is distance-derived plus the platform wait.
        let ride_km = route.segments[1].distance_km;
        let expected = ride_km * TRAIN_MINUTES_PER_KM + config.pickup_wait_mins;
        assert!((route.segments[1].time_mins - expected).abs() < 1e-9);
        assert_eq!(route.total_fare, Some(estimate_train_fare(ride_km)));
    }

    #[tokio::test]
    async fn same_station_for_both_endpoints_yields_none() {
        // One station between two nearby points resolves as nearest to both.
        let store = store_with(vec![station(
            "st-bandra",
            "Bandra",
            "Western",
            Point::new(19.0547, 72.8407),
        )]);
        let config = EngineConfig::default();
        let request = RouteRequest::new(ORIGIN, Point::new(19.0500, 72.8350));

        let route = synthesize(&store, &config, &request).await;
        assert!(route.is_none());
    }

    #[tokio::test]
    async fn missing_station_yields_none() {
        // Stations exist but on a different line.
        let store = store_with(vec![
            station("st-kurla", "Kurla", "Central", Point::new(19.0653, 72.8790)),
        ]);
        let config = EngineConfig::default();
        let request = RouteRequest::new(ORIGIN, DESTINATION);

        let route = synthesize(&store, &config, &request).await;
        assert!(route.is_none());
    }
}
