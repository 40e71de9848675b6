//! Geographic primitives.
//!
//! Great-circle distance and the fixed Mumbai service bounding box. Pure
//! functions with no dependencies; everything else in the engine builds on
//! these.

/// Mean Earth radius in kilometres.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Southern edge of the service area (decimal degrees).
pub const SERVICE_LAT_MIN: f64 = 18.8;
/// Northern edge of the service area.
pub const SERVICE_LAT_MAX: f64 = 19.3;
/// Western edge of the service area.
pub const SERVICE_LNG_MIN: f64 = 72.7;
/// Eastern edge of the service area.
pub const SERVICE_LNG_MAX: f64 = 73.0;

/// Great-circle distance between two coordinates in kilometres (haversine).
///
/// Numerically stable near zero: identical inputs return 0.0, never NaN.
pub fn haversine_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lng / 2.0).sin().powi(2);

    // Clamp before asin: floating-point error can push `a` a hair past 1.0
    // for antipodal points, which would yield NaN.
    let c = 2.0 * a.sqrt().clamp(0.0, 1.0).asin();

    EARTH_RADIUS_KM * c
}

/// Inclusive bounding-box membership test against the service area.
///
/// Non-finite coordinates fail the check.
pub fn within_service_bounds(lat: f64, lng: f64) -> bool {
    lat.is_finite()
        && lng.is_finite()
        && (SERVICE_LAT_MIN..=SERVICE_LAT_MAX).contains(&lat)
        && (SERVICE_LNG_MIN..=SERVICE_LNG_MAX).contains(&lng)
}

/// Time in minutes to cover `distance_km` at `speed_kmh`.
///
/// Returns 0.0 for non-positive speeds rather than dividing by zero.
pub fn travel_minutes(distance_km: f64, speed_kmh: f64) -> f64 {
    if speed_kmh <= 0.0 {
        return 0.0;
    }
    distance_km / speed_kmh * 60.0
}

#[cfg(test)]
mod tests {
    use super::*;

    // Bandra and Dadar, well inside the service area.
    const BANDRA: (f64, f64) = (19.0596, 72.8295);
    const DADAR: (f64, f64) = (19.0176, 72.8479);

    #[test]
    fn zero_distance_for_identical_points() {
        let d = haversine_km(BANDRA.0, BANDRA.1, BANDRA.0, BANDRA.1);
        assert_eq!(d, 0.0);
        assert!(!d.is_nan());
    }

    #[test]
    fn bandra_dadar_distance() {
        let d = haversine_km(BANDRA.0, BANDRA.1, DADAR.0, DADAR.1);
        // Roughly 5 km as the crow flies.
        assert!(d > 4.0 && d < 6.0, "unexpected distance {d}");
    }

    #[test]
    fn symmetric() {
        let ab = haversine_km(BANDRA.0, BANDRA.1, DADAR.0, DADAR.1);
        let ba = haversine_km(DADAR.0, DADAR.1, BANDRA.0, BANDRA.1);
        assert!((ab - ba).abs() < 1e-9);
    }

    #[test]
    fn bounds_inclusive_at_edges() {
        assert!(within_service_bounds(18.8, 72.7));
        assert!(within_service_bounds(19.3, 73.0));
        assert!(within_service_bounds(19.0596, 72.8295));
    }

    #[test]
    fn bounds_reject_outside() {
        assert!(!within_service_bounds(20.0, 72.85));
        assert!(!within_service_bounds(19.0, 74.0));
        assert!(!within_service_bounds(18.79, 72.85));
    }

    #[test]
    fn bounds_reject_non_finite() {
        assert!(!within_service_bounds(f64::NAN, 72.85));
        assert!(!within_service_bounds(19.0, f64::INFINITY));
    }

    #[test]
    fn travel_minutes_basic() {
        // 5 km at 5 km/h is an hour's walk.
        assert_eq!(travel_minutes(5.0, 5.0), 60.0);
        // 1 km at 20 km/h is 3 minutes.
        assert_eq!(travel_minutes(1.0, 20.0), 3.0);
    }

    #[test]
    fn travel_minutes_zero_speed() {
        assert_eq!(travel_minutes(5.0, 0.0), 0.0);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn coord_strategy() -> impl Strategy<Value = (f64, f64)> {
        (18.0f64..20.0, 72.0f64..74.0)
    }

    proptest! {
        #[test]
        fn haversine_symmetric((a, b) in coord_strategy(), (c, d) in coord_strategy()) {
            let ab = haversine_km(a, b, c, d);
            let ba = haversine_km(c, d, a, b);
            prop_assert!((ab - ba).abs() < 1e-9);
        }

        #[test]
        fn haversine_non_negative_and_finite((a, b) in coord_strategy(), (c, d) in coord_strategy()) {
            let dist = haversine_km(a, b, c, d);
            prop_assert!(dist >= 0.0);
            prop_assert!(dist.is_finite());
        }

        #[test]
        fn haversine_identity((a, b) in coord_strategy()) {
            prop_assert_eq!(haversine_km(a, b, a, b), 0.0);
        }
    }
}
