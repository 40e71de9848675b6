//! Fixed stand-to-destination routes.

use serde::{Deserialize, Serialize};

use super::{Point, StandId};

/// Minutes assumed for a fixed route whose travel-time text yields no
/// number at all.
pub const FALLBACK_ROUTE_MINUTES: f64 = 15.0;

/// A pre-priced stand-to-destination auto trip.
///
/// Belongs to exactly one stand. Created and updated by administrative
/// collaborators; consumed read-only here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixedRoute {
    pub id: String,

    /// Owning stand.
    pub stand_id: StandId,

    /// Destination display name.
    pub destination: String,

    /// Destination coordinate, when the admin workflow recorded one.
    pub destination_location: Option<Point>,

    /// Fixed fare in rupees.
    pub fare: f64,

    /// Free-text duration as entered by operators, e.g. "10-15 mins".
    pub travel_time: String,
}

impl FixedRoute {
    /// Parse the free-text travel time into minutes.
    ///
    /// Operators enter things like "10-15 mins", "20 min", or "about 25".
    /// We take the first run of digits and fall back to
    /// [`FALLBACK_ROUTE_MINUTES`] when there is none.
    pub fn travel_time_minutes(&self) -> f64 {
        parse_leading_minutes(&self.travel_time).unwrap_or(FALLBACK_ROUTE_MINUTES)
    }
}

/// Extract the first integer from a free-text duration string.
fn parse_leading_minutes(text: &str) -> Option<f64> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let rest = &text[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    rest[..end].parse::<f64>().ok()
}
