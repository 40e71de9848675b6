//! Wire types for the OSRM route API.

use serde::Deserialize;

/// Top-level OSRM `/route` response.
#[derive(Debug, Deserialize)]
pub struct OsrmResponse {
    /// "Ok" on success; anything else is an error code.
    pub code: String,

    #[serde(default)]
    pub routes: Vec<OsrmRoute>,
}

/// One route alternative in an OSRM response.
#[derive(Debug, Deserialize)]
pub struct OsrmRoute {
    /// Route length in metres.
    pub distance: f64,

    /// Travel time in seconds.
    pub duration: f64,

    /// Encoded polyline of the route shape.
    #[serde(default)]
    pub geometry: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ok_response() {
        let json = r#"{
            "code": "Ok",
            "routes": [{"distance": 5000.0, "duration": 900.0, "geometry": "abc"}],
            "waypoints": []
        }"#;

        let resp: OsrmResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.code, "Ok");
        assert_eq!(resp.routes.len(), 1);
        assert_eq!(resp.routes[0].distance, 5000.0);
        assert_eq!(resp.routes[0].geometry.as_deref(), Some("abc"));
    }

    #[test]
    fn parses_no_route_response() {
        let json = r#"{"code": "NoRoute", "routes": []}"#;

        let resp: OsrmResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.code, "NoRoute");
        assert!(resp.routes.is_empty());
    }
}
