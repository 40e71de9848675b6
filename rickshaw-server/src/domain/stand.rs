//! Shared-auto stand types.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Point;

/// Stable identifier of a stand.
///
/// Assigned by the administrative workflow that maintains the stand
/// registry; opaque to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StandId(pub String);

impl StandId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StandId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A physical shared-auto waiting point.
///
/// Read-only reference data; the engine never mutates stands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stand {
    pub id: StandId,

    /// Display name, e.g. "Bandra Station (W)".
    pub name: String,

    pub location: Point,

    /// Opaque display string maintained by the admin workflow,
    /// e.g. "6am - 11pm". Not parsed by the engine.
    pub operating_hours: String,
}
