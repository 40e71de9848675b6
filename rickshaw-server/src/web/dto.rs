//! Wire types for the HTTP API.

use serde::{Deserialize, Serialize};

use crate::domain::{ComputedRoute, Point, RouteSegment};
use crate::engine::{RouteSearchResponse, RouteSet, SearchMetadata};
use crate::store::{NearbyStand, NearbyStation};

/// Body of `POST /routes/calculate`.
#[derive(Debug, Deserialize)]
pub struct CalculateRoutesRequest {
    pub origin: Point,
    pub destination: Point,
    #[serde(default)]
    pub origin_label: Option<String>,
    #[serde(default)]
    pub destination_label: Option<String>,
}

/// Query string of `GET /stands/nearby`.
#[derive(Debug, Deserialize)]
pub struct NearbyStandsQuery {
    pub lat: f64,
    pub lng: f64,
    /// Defaults to the engine's search radius when omitted.
    #[serde(default)]
    pub radius_km: Option<f64>,
}

/// Query string of `GET /stations/nearest`.
#[derive(Debug, Deserialize)]
pub struct NearestStationQuery {
    pub lat: f64,
    pub lng: f64,
    /// Defaults to the engine's configured line when omitted.
    #[serde(default)]
    pub line: Option<String>,
}

/// JSON error body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// One leg of a route, as serialized.
#[derive(Debug, Serialize)]
pub struct SegmentDto {
    pub mode: &'static str,
    pub from: String,
    pub to: String,
    pub distance_km: f64,
    pub time_mins: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fare: Option<f64>,
}

impl SegmentDto {
    fn from_segment(segment: &RouteSegment) -> Self {
        Self {
            mode: segment.mode.as_str(),
            from: segment.from.clone(),
            to: segment.to.clone(),
            distance_km: segment.distance_km,
            time_mins: segment.time_mins,
            fare: segment.fare,
        }
    }
}

/// One computed route, as serialized.
#[derive(Debug, Serialize)]
pub struct ComputedRouteDto {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub title: String,
    pub segments: Vec<SegmentDto>,
    pub total_distance_km: f64,
    pub total_time_mins: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_fare: Option<f64>,
    pub confidence: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometry: Option<String>,
}

impl ComputedRouteDto {
    pub fn from_route(route: &ComputedRoute) -> Self {
        Self {
            id: route.id.clone(),
            kind: route.kind.as_str(),
            title: route.title.clone(),
            segments: route.segments.iter().map(SegmentDto::from_segment).collect(),
            total_distance_km: route.total_distance_km,
            total_time_mins: route.total_time_mins,
            total_fare: route.total_fare,
            confidence: route.confidence,
            geometry: route.geometry.clone(),
        }
    }
}

/// The four synthesizer outputs. All four keys are always present; empty
/// lists and nulls mean "found nothing", never an error.
#[derive(Debug, Serialize)]
pub struct RouteSetDto {
    pub stand_routes: Vec<ComputedRouteDto>,
    pub hybrid_routes: Vec<ComputedRouteDto>,
    pub direct_auto: Option<ComputedRouteDto>,
    pub train_route: Option<ComputedRouteDto>,
}

impl RouteSetDto {
    fn from_set(set: &RouteSet) -> Self {
        Self {
            stand_routes: set.stand_routes.iter().map(ComputedRouteDto::from_route).collect(),
            hybrid_routes: set.hybrid_routes.iter().map(ComputedRouteDto::from_route).collect(),
            direct_auto: set.direct_auto.as_ref().map(ComputedRouteDto::from_route),
            train_route: set.train_route.as_ref().map(ComputedRouteDto::from_route),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchMetadataDto {
    pub start_location: String,
    pub end_location: String,
    pub total_options: usize,
    pub searched_at: chrono::DateTime<chrono::Utc>,
}

impl SearchMetadataDto {
    fn from_metadata(metadata: &SearchMetadata) -> Self {
        Self {
            start_location: metadata.start_location.clone(),
            end_location: metadata.end_location.clone(),
            total_options: metadata.total_options,
            searched_at: metadata.searched_at,
        }
    }
}

/// Response of `POST /routes/calculate`.
#[derive(Debug, Serialize)]
pub struct CalculateRoutesResponse {
    pub routes: RouteSetDto,
    pub search_metadata: SearchMetadataDto,
}

impl CalculateRoutesResponse {
    pub fn from_response(response: &RouteSearchResponse) -> Self {
        Self {
            routes: RouteSetDto::from_set(&response.routes),
            search_metadata: SearchMetadataDto::from_metadata(&response.search_metadata),
        }
    }
}

/// One stand hit of `GET /stands/nearby`.
#[derive(Debug, Serialize)]
pub struct NearbyStandDto {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub operating_hours: String,
    pub distance_km: f64,
}

impl NearbyStandDto {
    pub fn from_nearby(near: &NearbyStand) -> Self {
        Self {
            id: near.stand.id.to_string(),
            name: near.stand.name.clone(),
            lat: near.stand.location.lat,
            lng: near.stand.location.lng,
            operating_hours: near.stand.operating_hours.clone(),
            distance_km: near.distance_km,
        }
    }
}

/// Response of `GET /stands/nearby`.
#[derive(Debug, Serialize)]
pub struct NearbyStandsResponse {
    pub stands: Vec<NearbyStandDto>,
}

/// Response of `GET /stations/nearest`.
#[derive(Debug, Serialize)]
pub struct NearestStationResponse {
    pub station: Option<NearestStationDto>,
}

#[derive(Debug, Serialize)]
pub struct NearestStationDto {
    pub id: String,
    pub name: String,
    pub line: String,
    pub lat: f64,
    pub lng: f64,
    pub distance_km: f64,
}

impl NearestStationDto {
    pub fn from_nearby(near: &NearbyStation) -> Self {
        Self {
            id: near.station.id.clone(),
            name: near.station.name.clone(),
            line: near.station.line.clone(),
            lat: near.station.location.lat,
            lng: near.station.location.lng,
            distance_km: near.distance_km,
        }
    }
}
