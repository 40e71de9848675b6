//! Stand-based single-hop routes: walk to a nearby stand, then ride one
//! of its fixed-fare routes to the destination.

use crate::domain::{ComputedRoute, RouteKind, RouteSegment, TravelMode};
use crate::geo::travel_minutes;
use crate::store::ReferenceStore;

use super::config::EngineConfig;
use super::RouteRequest;

/// One route per (nearby stand, fixed route to the destination) pair.
///
/// A store failure degrades to an empty list; a failure looking up one
/// stand's routes skips just that stand.
pub(crate) async fn synthesize<S: ReferenceStore>(
    store: &S,
    config: &EngineConfig,
    request: &RouteRequest,
) -> Vec<ComputedRoute> {
    let nearby = match store
        .stands_near(request.origin, config.search_radius_km)
        .await
    {
        Ok(nearby) => nearby,
        Err(error) => {
            tracing::warn!(%error, "stand lookup failed, skipping stand routes");
            return Vec::new();
        }
    };

    let mut routes = Vec::new();

    for near in &nearby {
        let fixed = match store
            .routes_from_stand_to(&near.stand.id, request.destination, config.search_radius_km)
            .await
        {
            Ok(fixed) => fixed,
            Err(error) => {
                tracing::warn!(
                    stand = %near.stand.id,
                    %error,
                    "fixed-route lookup failed, skipping stand"
                );
                continue;
            }
        };

        for route in &fixed {
            let walk = RouteSegment::new(
                TravelMode::Walk,
                request.origin_label(),
                near.stand.name.clone(),
                near.distance_km,
                travel_minutes(near.distance_km, config.stand_approach_speed_kmh),
                None,
            );

            let ride_end = route.destination_location.unwrap_or(request.destination);
            let ride_distance = near.stand.location.distance_km(&ride_end);

            // The wait for the next shared auto is folded into the ride
            // segment so route totals stay the sum of their segments.
            let ride = RouteSegment::new(
                TravelMode::Auto,
                near.stand.name.clone(),
                route.destination.clone(),
                ride_distance,
                route.travel_time_minutes() + config.stand_wait_mins,
                Some(route.fare),
            );

            let id = format!("stand-{}-{}", near.stand.id, route.id);
            let title = format!("Shared auto from {}", near.stand.name);

            match ComputedRoute::new(id, RouteKind::StandRoute, title, vec![walk, ride], None) {
                Ok(computed) => routes.push(computed),
                Err(error) => tracing::warn!(%error, "discarding malformed stand route"),
            }
        }
    }

    routes
}
