//! Computed route types.
//!
//! A `ComputedRoute` is one ranked candidate journey returned to the
//! caller, composed of ordered segments. These are ephemeral: built fresh
//! per request, never persisted or cached.

use super::DomainError;

/// How a segment is travelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelMode {
    Walk,
    Auto,
    Train,
}

impl TravelMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelMode::Walk => "walk",
            TravelMode::Auto => "auto",
            TravelMode::Train => "train",
        }
    }
}

/// Which synthesizer produced a route.
///
/// An explicit tag rather than an inferred shape: each variant carries a
/// fixed confidence score, a static trust weight per algorithm, not a
/// statistically derived quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    StandRoute,
    HybridRoute,
    DirectAuto,
    TrainRoute,
}

impl RouteKind {
    /// Wire name used in responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteKind::StandRoute => "stand_route",
            RouteKind::HybridRoute => "hybrid_route",
            RouteKind::DirectAuto => "direct_auto",
            RouteKind::TrainRoute => "train_route",
        }
    }

    /// Fixed per-algorithm trust weight in [0, 1].
    pub fn confidence(&self) -> f64 {
        match self {
            RouteKind::StandRoute => 0.9,
            RouteKind::DirectAuto => 0.8,
            RouteKind::TrainRoute => 0.7,
            RouteKind::HybridRoute => 0.6,
        }
    }
}

/// One atomic leg of a computed route.
///
/// `from` and `to` are display labels, not guaranteed to be coordinates.
#[derive(Debug, Clone)]
pub struct RouteSegment {
    pub mode: TravelMode,
    pub from: String,
    pub to: String,
    pub distance_km: f64,
    pub time_mins: f64,
    /// Fare for this leg, absent for legs without fixed pricing (walks).
    pub fare: Option<f64>,
}

impl RouteSegment {
    pub fn new(
        mode: TravelMode,
        from: impl Into<String>,
        to: impl Into<String>,
        distance_km: f64,
        time_mins: f64,
        fare: Option<f64>,
    ) -> Self {
        Self {
            mode,
            from: from.into(),
            to: to.into(),
            distance_km,
            time_mins,
            fare,
        }
    }
}

/// A ranked candidate journey.
///
/// # Invariants
///
/// - `segments` is non-empty and ordered start→end.
/// - `total_distance_km` and `total_time_mins` equal the segment sums.
/// - `total_fare` is the sum of segment fares where any are present,
///   `None` when no segment carries one.
///
/// All three hold by construction: [`ComputedRoute::new`] derives the
/// totals from the segments.
#[derive(Debug, Clone)]
pub struct ComputedRoute {
    /// Synthetic identifier derived from constituent ids.
    pub id: String,
    pub kind: RouteKind,
    pub title: String,
    pub segments: Vec<RouteSegment>,
    pub total_distance_km: f64,
    pub total_time_mins: f64,
    pub total_fare: Option<f64>,
    /// Fixed per-algorithm score in [0, 1]; see [`RouteKind::confidence`].
    pub confidence: f64,
    /// Encoded polyline from the external routing provider, when available.
    pub geometry: Option<String>,
}

impl ComputedRoute {
    /// Build a route from its segments, deriving the totals.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyRoute`] when `segments` is empty.
    pub fn new(
        id: impl Into<String>,
        kind: RouteKind,
        title: impl Into<String>,
        segments: Vec<RouteSegment>,
        geometry: Option<String>,
    ) -> Result<Self, DomainError> {
        if segments.is_empty() {
            return Err(DomainError::EmptyRoute);
        }

        let total_distance_km = segments.iter().map(|s| s.distance_km).sum();
        let total_time_mins = segments.iter().map(|s| s.time_mins).sum();

        let fares: Vec<f64> = segments.iter().filter_map(|s| s.fare).collect();
        let total_fare = if fares.is_empty() {
            None
        } else {
            Some(fares.iter().sum())
        };

        Ok(Self {
            id: id.into(),
            kind,
            confidence: kind.confidence(),
            title: title.into(),
            segments,
            total_distance_km,
            total_time_mins,
            total_fare,
            geometry,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk(from: &str, to: &str, km: f64, mins: f64) -> RouteSegment {
        RouteSegment::new(TravelMode::Walk, from, to, km, mins, None)
    }

    fn auto(from: &str, to: &str, km: f64, mins: f64, fare: f64) -> RouteSegment {
        RouteSegment::new(TravelMode::Auto, from, to, km, mins, Some(fare))
    }

    #[test]
    fn totals_equal_segment_sums() {
        let route = ComputedRoute::new(
            "stand-s1-r1",
            RouteKind::StandRoute,
            "Via Bandra stand",
            vec![
                walk("Origin", "Bandra stand", 0.5, 1.5),
                auto("Bandra stand", "Dadar TT", 6.0, 23.0, 30.0),
            ],
            None,
        )
        .unwrap();

        assert!((route.total_distance_km - 6.5).abs() < 1e-9);
        assert!((route.total_time_mins - 24.5).abs() < 1e-9);
        assert_eq!(route.total_fare, Some(30.0));
    }

    #[test]
    fn fare_absent_when_no_segment_priced() {
        let route = ComputedRoute::new(
            "w",
            RouteKind::HybridRoute,
            "Walk only",
            vec![walk("A", "B", 1.0, 12.0)],
            None,
        )
        .unwrap();

        assert_eq!(route.total_fare, None);
    }

    #[test]
    fn fare_sums_priced_segments_only() {
        let route = ComputedRoute::new(
            "h",
            RouteKind::HybridRoute,
            "Mixed",
            vec![
                walk("A", "S1", 0.4, 4.8),
                auto("S1", "S2", 3.0, 10.0, 15.0),
                auto("S2", "S3", 4.0, 12.0, 20.0),
                walk("S3", "B", 0.2, 2.4),
            ],
            None,
        )
        .unwrap();

        assert_eq!(route.total_fare, Some(35.0));
    }

    #[test]
    fn empty_segments_rejected() {
        let result = ComputedRoute::new("x", RouteKind::DirectAuto, "t", vec![], None);
        assert!(matches!(result, Err(DomainError::EmptyRoute)));
    }

    #[test]
    fn confidence_is_fixed_per_kind() {
        assert_eq!(RouteKind::StandRoute.confidence(), 0.9);
        assert_eq!(RouteKind::DirectAuto.confidence(), 0.8);
        assert_eq!(RouteKind::TrainRoute.confidence(), 0.7);
        assert_eq!(RouteKind::HybridRoute.confidence(), 0.6);
    }

    #[test]
    fn kind_wire_names() {
        assert_eq!(RouteKind::StandRoute.as_str(), "stand_route");
        assert_eq!(RouteKind::HybridRoute.as_str(), "hybrid_route");
        assert_eq!(RouteKind::DirectAuto.as_str(), "direct_auto");
        assert_eq!(RouteKind::TrainRoute.as_str(), "train_route");
    }
}
