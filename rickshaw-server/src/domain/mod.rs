//! Domain types for the route engine.
//!
//! Reference data (stands, fixed routes, connections, stations) is owned by
//! the persistence layer and treated as an immutable snapshot for the
//! duration of one routing computation. Computed routes are transient,
//! created fresh per request and discarded after the response is sent.
//! Invariants are enforced at construction time, so code receiving these
//! types can trust them.

mod connection;
mod error;
mod journey;
mod point;
mod route;
mod stand;
mod station;

pub use connection::StandConnection;
pub use error::DomainError;
pub use journey::{ComputedRoute, RouteKind, RouteSegment, TravelMode};
pub use point::Point;
pub use route::FixedRoute;
pub use stand::{Stand, StandId};
pub use station::TrainStation;
