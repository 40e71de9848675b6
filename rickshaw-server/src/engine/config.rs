//! Engine configuration.
//!
//! These values are part of the observable contract: downstream consumers
//! compare quoted times and fares across releases, so changing any of them
//! is a product decision, not a refactor.

/// Configuration for the route engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Radius used for nearby stand/station searches, in kilometres.
    pub search_radius_km: f64,

    /// Nominal walking speed in km/h, used for every walking leg except
    /// the stand-route approach leg.
    pub walk_speed_kmh: f64,

    /// Speed used for the origin-to-stand leg in stand routes, in km/h.
    ///
    /// This is not a walking pace. It disagrees with `walk_speed_kmh` but
    /// the quoted times have been like this since launch and riders'
    /// fare/time expectations are calibrated against them, so it stays
    /// until the product owner signs off on a change.
    pub stand_approach_speed_kmh: f64,

    /// Wait folded into a stand route for the next shared auto, minutes.
    pub stand_wait_mins: f64,

    /// Wait folded into direct-auto (hailing) and train (platform)
    /// routes, minutes.
    pub pickup_wait_mins: f64,

    /// Multiplier applied to the provider's direct-auto duration to
    /// account for traffic.
    pub traffic_multiplier: f64,

    /// Hybrid routes kept after sorting by total time; the rest are
    /// discarded, not deprioritized.
    pub max_hybrid_results: usize,

    /// Transit line used for the train-assisted route.
    pub train_line: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            search_radius_km: 2.0,
            walk_speed_kmh: 5.0,
            stand_approach_speed_kmh: 20.0,
            stand_wait_mins: 3.0,
            pickup_wait_mins: 4.0,
            traffic_multiplier: 1.2,
            max_hybrid_results: 3,
            train_line: "Western".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = EngineConfig::default();

        assert_eq!(config.search_radius_km, 2.0);
        assert_eq!(config.walk_speed_kmh, 5.0);
        assert_eq!(config.stand_approach_speed_kmh, 20.0);
        assert_eq!(config.stand_wait_mins, 3.0);
        assert_eq!(config.pickup_wait_mins, 4.0);
        assert_eq!(config.traffic_multiplier, 1.2);
        assert_eq!(config.max_hybrid_results, 3);
        assert_eq!(config.train_line, "Western");
    }
}
