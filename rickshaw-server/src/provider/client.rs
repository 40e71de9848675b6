//! OSRM HTTP client.
//!
//! Queries an OSRM-compatible `/route/v1/driving` endpoint. Concurrency is
//! capped with a semaphore and every request carries a timeout, so a slow
//! provider degrades the direct-auto synthesizer instead of hanging the
//! whole request.

use std::sync::Arc;

use tokio::sync::Semaphore;

use crate::domain::Point;

use super::error::ProviderError;
use super::types::OsrmResponse;
use super::{ProviderRoute, RoutingProvider};

/// Default public OSRM instance.
const DEFAULT_BASE_URL: &str = "https://router.project-osrm.org";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Default request timeout in seconds. Expiry is the direct-auto
/// synthesizer's failure path, not a fatal error.
const DEFAULT_TIMEOUT_SECS: u64 = 8;

/// Configuration for the OSRM client.
#[derive(Debug, Clone)]
pub struct OsrmConfig {
    /// Base URL of the OSRM instance.
    pub base_url: String,
    /// Maximum concurrent requests.
    pub max_concurrent: usize,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl OsrmConfig {
    /// Create a config with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// OSRM route API client.
#[derive(Debug, Clone)]
pub struct OsrmClient {
    http: reqwest::Client,
    base_url: String,
    semaphore: Arc<Semaphore>,
}

impl OsrmClient {
    /// Create a new client with the given configuration.
    pub fn new(config: OsrmConfig) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }
}

impl RoutingProvider for OsrmClient {
    async fn route(&self, from: Point, to: Point) -> Result<ProviderRoute, ProviderError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| ProviderError::Api {
                status: 0,
                message: "semaphore closed".to_string(),
            })?;

        // OSRM takes lng,lat pairs.
        let url = format!(
            "{}/route/v1/driving/{},{};{},{}",
            self.base_url, from.lng, from.lat, to.lng, to.lat
        );

        let response = self
            .http
            .get(&url)
            .query(&[("overview", "full"), ("geometries", "polyline")])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let parsed: OsrmResponse =
            serde_json::from_str(&body).map_err(|e| ProviderError::Json {
                message: e.to_string(),
            })?;

        if parsed.code != "Ok" {
            return Err(ProviderError::NoRoute);
        }

        let best = parsed.routes.into_iter().next().ok_or(ProviderError::NoRoute)?;

        Ok(ProviderRoute {
            distance_meters: best.distance,
            duration_seconds: best.duration,
            geometry: best.geometry,
        })
    }
}
