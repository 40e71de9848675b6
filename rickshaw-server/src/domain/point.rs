//! Geographic coordinate type.

use serde::{Deserialize, Serialize};

use crate::geo;

/// A coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub lat: f64,
    pub lng: f64,
}

impl Point {
    /// Create a point. No bounds check; request endpoints are validated
    /// separately via [`Point::in_service_area`].
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Great-circle distance to another point in kilometres.
    pub fn distance_km(&self, other: &Point) -> f64 {
        geo::haversine_km(self.lat, self.lng, other.lat, other.lng)
    }

    /// True when the point lies inside the Mumbai service bounding box
    /// (inclusive) and both coordinates are finite.
    pub fn in_service_area(&self) -> bool {
        geo::within_service_bounds(self.lat, self.lng)
    }

    /// Display label for a raw coordinate, used when the caller supplied no
    /// human-readable name.
    pub fn label(&self) -> String {
        format!("{:.4}, {:.4}", self.lat, self.lng)
    }
}
