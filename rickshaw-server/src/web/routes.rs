//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use crate::domain::Point;
use crate::engine::{EngineError, RouteRequest};
use crate::provider::RoutingProvider;
use crate::store::{ReferenceStore, StoreError};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router<S, P>(state: AppState<S, P>) -> Router
where
    S: ReferenceStore + 'static,
    P: RoutingProvider + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route("/routes/calculate", post(calculate_routes::<S, P>))
        .route("/stands/nearby", get(nearby_stands::<S, P>))
        .route("/stations/nearest", get(nearest_station::<S, P>))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Compute all route options between two points.
async fn calculate_routes<S: ReferenceStore, P: RoutingProvider>(
    State(state): State<AppState<S, P>>,
    Json(body): Json<CalculateRoutesRequest>,
) -> Result<Json<CalculateRoutesResponse>, AppError> {
    let request = RouteRequest::new(body.origin, body.destination)
        .with_names(body.origin_label, body.destination_label);

    let response = state.engine.calculate_routes(request).await?;

    Ok(Json(CalculateRoutesResponse::from_response(&response)))
}

/// List stands near a point, ascending by distance.
async fn nearby_stands<S: ReferenceStore, P: RoutingProvider>(
    State(state): State<AppState<S, P>>,
    Query(query): Query<NearbyStandsQuery>,
) -> Result<Json<NearbyStandsResponse>, AppError> {
    let point = Point::new(query.lat, query.lng);
    if !point.in_service_area() {
        return Err(AppError::BadRequest {
            message: format!(
                "point ({}, {}) is outside the service area",
                query.lat, query.lng
            ),
        });
    }

    let radius_km = query
        .radius_km
        .unwrap_or(state.engine.config().search_radius_km);

    let hits = state.engine.store().stands_near(point, radius_km).await?;

    Ok(Json(NearbyStandsResponse {
        stands: hits.iter().map(NearbyStandDto::from_nearby).collect(),
    }))
}

/// Nearest station on a line, or null when none is in range.
async fn nearest_station<S: ReferenceStore, P: RoutingProvider>(
    State(state): State<AppState<S, P>>,
    Query(query): Query<NearestStationQuery>,
) -> Result<Json<NearestStationResponse>, AppError> {
    let point = Point::new(query.lat, query.lng);
    if !point.in_service_area() {
        return Err(AppError::BadRequest {
            message: format!(
                "point ({}, {}) is outside the service area",
                query.lat, query.lng
            ),
        });
    }

    let config = state.engine.config();
    let line = query.line.as_deref().unwrap_or(&config.train_line);

    let best = state
        .engine
        .store()
        .nearest_station(point, line, config.search_radius_km)
        .await?;

    Ok(Json(NearestStationResponse {
        station: best.as_ref().map(NearestStationDto::from_nearby),
    }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl From<EngineError> for AppError {
    fn from(e: EngineError) -> Self {
        match e {
            EngineError::OutsideServiceArea { .. } => AppError::BadRequest {
                message: e.to_string(),
            },
        }
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        tracing::warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
