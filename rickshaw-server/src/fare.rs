//! Fare estimation.
//!
//! Tariff figures are policy constants, not derived per request. The auto
//! figures follow the in-force Mumbai auto-rickshaw tariff card; the train
//! figures are rough estimates pending confirmation with the operator and
//! should not be treated as authoritative pricing.

/// Flat fare covering the first [`BASE_DISTANCE_KM`], in rupees.
pub const BASE_FARE: f64 = 23.0;

/// Distance covered by the base fare, in kilometres.
pub const BASE_DISTANCE_KM: f64 = 1.5;

/// Marginal rate beyond the base distance, rupees per kilometre.
pub const RATE_PER_KM: f64 = 15.33;

/// Rough suburban-train pace, minutes per kilometre.
pub const TRAIN_MINUTES_PER_KM: f64 = 2.0;

/// Rough suburban-train fare, rupees per started 2 km block.
pub const TRAIN_FARE_PER_2KM: f64 = 5.0;

/// Estimate the metered auto fare for a trip of `distance_km`.
///
/// Piecewise linear: [`BASE_FARE`] up to and including [`BASE_DISTANCE_KM`],
/// then [`RATE_PER_KM`] per additional kilometre with no cap. Negative or
/// zero distances return exactly the base fare; the result is never
/// negative.
pub fn estimate_auto_fare(distance_km: f64) -> f64 {
    if distance_km <= BASE_DISTANCE_KM {
        return BASE_FARE;
    }
    BASE_FARE + (distance_km - BASE_DISTANCE_KM) * RATE_PER_KM
}

/// Estimate the train fare for a trip of `distance_km`.
///
/// Charged per started 2 km block. A zero-length trip still costs one block.
pub fn estimate_train_fare(distance_km: f64) -> f64 {
    let blocks = (distance_km.max(0.0) / 2.0).ceil().max(1.0);
    blocks * TRAIN_FARE_PER_2KM
}
