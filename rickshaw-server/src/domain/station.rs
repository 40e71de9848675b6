//! Suburban train stations.

use serde::{Deserialize, Serialize};

use super::Point;

/// A suburban railway station.
///
/// Read-only reference data, maintained outside the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainStation {
    pub id: String,

    /// Display name, e.g. "Bandra".
    pub name: String,

    pub location: Point,

    /// Named transit line the station sits on, e.g. "Western".
    pub line: String,
}
