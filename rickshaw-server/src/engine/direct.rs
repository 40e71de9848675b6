//! Direct point-to-point auto route via the external routing provider.

use crate::domain::{ComputedRoute, RouteKind, RouteSegment, TravelMode};
use crate::fare::estimate_auto_fare;
use crate::provider::RoutingProvider;

use super::RouteRequest;
use super::config::EngineConfig;

/// One route straight from the provider, or `None` when the provider
/// fails or finds no route. Never partial.
pub(crate) async fn synthesize<P: RoutingProvider>(
    provider: &P,
    config: &EngineConfig,
    request: &RouteRequest,
) -> Option<ComputedRoute> {
    let provided = match provider.route(request.origin, request.destination).await {
        Ok(provided) => provided,
        Err(error) => {
            tracing::warn!(%error, "routing provider failed, skipping direct auto route");
            return None;
        }
    };

    let distance_km = provided.distance_meters / 1000.0;
    let raw_minutes = provided.duration_seconds / 60.0;

    // Inflate for traffic, round up to a whole minute, then add the wait
    // for an available auto.
    let time_mins = (raw_minutes * config.traffic_multiplier).ceil() + config.pickup_wait_mins;
    let fare = estimate_auto_fare(distance_km);

    let segment = RouteSegment::new(
        TravelMode::Auto,
        request.origin_label(),
        request.destination_label(),
        distance_km,
        time_mins,
        Some(fare),
    );

    let title = format!("Auto to {}", request.destination_label());

    match ComputedRoute::new(
        "direct-auto",
        RouteKind::DirectAuto,
        title,
        vec![segment],
        provided.geometry,
    ) {
        Ok(route) => Some(route),
        Err(error) => {
            tracing::warn!(%error, "discarding malformed direct auto route");
            None
        }
    }
}
