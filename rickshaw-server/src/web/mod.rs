//! Web layer for the route engine.
//!
//! Thin HTTP glue over [`crate::engine::RouteEngine`]: one POST endpoint
//! for route computation plus lookup endpoints for stands and stations.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
