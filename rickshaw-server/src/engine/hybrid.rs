//! Multi-hop hybrid routes: walk to a stand near the origin, ride the
//! stand network along a shortest path, walk from a stand near the
//! destination.

use std::cmp::Ordering;

use crate::domain::{ComputedRoute, RouteKind, RouteSegment, Stand, StandId, TravelMode};
use crate::geo::travel_minutes;
use crate::store::{NearbyStand, ReferenceStore};

use super::RouteRequest;
use super::config::EngineConfig;
use super::graph::StandGraph;

/// Hybrid routes for every viable (origin stand, destination stand) pair,
/// sorted ascending by total time and capped at the configured maximum.
///
/// When either endpoint has no candidate stands in range there is nothing
/// to route over, so no graph is built and no connection query is made.
pub(crate) async fn synthesize<S: ReferenceStore>(
    store: &S,
    config: &EngineConfig,
    request: &RouteRequest,
) -> Vec<ComputedRoute> {
    let origin_stands = match store
        .stands_near(request.origin, config.search_radius_km)
        .await
    {
        Ok(stands) => stands,
        Err(error) => {
            tracing::warn!(%error, "origin stand lookup failed, skipping hybrid routes");
            return Vec::new();
        }
    };
    if origin_stands.is_empty() {
        return Vec::new();
    }

    let destination_stands = match store
        .stands_near(request.destination, config.search_radius_km)
        .await
    {
        Ok(stands) => stands,
        Err(error) => {
            tracing::warn!(%error, "destination stand lookup failed, skipping hybrid routes");
            return Vec::new();
        }
    };
    if destination_stands.is_empty() {
        return Vec::new();
    }

    // Union of the two candidate sets, first occurrence wins. The graph is
    // bounded to these stands; the full network is never loaded.
    let mut candidates: Vec<Stand> = Vec::new();
    for near in origin_stands.iter().chain(destination_stands.iter()) {
        if !candidates.iter().any(|s| s.id == near.stand.id) {
            candidates.push(near.stand.clone());
        }
    }
    let ids: Vec<StandId> = candidates.iter().map(|s| s.id.clone()).collect();

    let connections = match store.connections_among(&ids).await {
        Ok(connections) => connections,
        Err(error) => {
            tracing::warn!(%error, "connection lookup failed, skipping hybrid routes");
            return Vec::new();
        }
    };

    let graph = StandGraph::build(&candidates, &connections);

    let mut routes = Vec::new();
    for start in &origin_stands {
        for end in &destination_stands {
            // A single-stand "hybrid" is just a walk; the stand-route
            // synthesizer covers that stand already.
            if start.stand.id == end.stand.id {
                continue;
            }

            let path = graph.shortest_path(&start.stand.id, &end.stand.id);
            if path.len() < 2 {
                continue;
            }

            if let Some(route) = assemble(config, request, &graph, start, end, &path) {
                routes.push(route);
            }
        }
    }

    routes.sort_by(|a, b| {
        a.total_time_mins
            .partial_cmp(&b.total_time_mins)
            .unwrap_or(Ordering::Equal)
    });
    routes.truncate(config.max_hybrid_results);

    routes
}

/// Build one hybrid route along `path`: a leading walk, one auto segment
/// per traversed edge (sourced from the connection record, not
/// recomputed), and a trailing walk.
fn assemble(
    config: &EngineConfig,
    request: &RouteRequest,
    graph: &StandGraph,
    start: &NearbyStand,
    end: &NearbyStand,
    path: &[StandId],
) -> Option<ComputedRoute> {
    let mut segments = Vec::with_capacity(path.len() + 1);

    segments.push(RouteSegment::new(
        TravelMode::Walk,
        request.origin_label(),
        start.stand.name.clone(),
        start.distance_km,
        travel_minutes(start.distance_km, config.walk_speed_kmh),
        None,
    ));

    for pair in path.windows(2) {
        let edge = graph.edge(&pair[0], &pair[1])?;
        let from = graph.node(&pair[0])?;
        let to = graph.node(&pair[1])?;

        segments.push(RouteSegment::new(
            TravelMode::Auto,
            from.name.clone(),
            to.name.clone(),
            edge.distance_km,
            edge.travel_time_minutes,
            Some(edge.fare),
        ));
    }

    segments.push(RouteSegment::new(
        TravelMode::Walk,
        end.stand.name.clone(),
        request.destination_label(),
        end.distance_km,
        travel_minutes(end.distance_km, config.walk_speed_kmh),
        None,
    ));

    let hop_ids: Vec<&str> = path.iter().map(|id| id.as_str()).collect();
    let id = format!("hybrid-{}", hop_ids.join("-"));
    let title = format!(
        "Shared autos via {} and {}",
        start.stand.name, end.stand.name
    );

    match ComputedRoute::new(id, RouteKind::HybridRoute, title, segments, None) {
        Ok(route) => Some(route),
        Err(error) => {
            tracing::warn!(%error, "discarding malformed hybrid route");
            None
        }
    }
}
