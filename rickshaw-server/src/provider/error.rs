//! Routing provider error types.

/// Errors from the external routing provider.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider returned an error status code.
    #[error("provider error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body could not be parsed.
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Provider found no route between the points.
    #[error("no route between the given points")]
    NoRoute,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ProviderError::NoRoute;
        assert_eq!(err.to_string(), "no route between the given points");

        let err = ProviderError::Api {
            status: 500,
            message: "Internal Server Error".into(),
        };
        assert_eq!(err.to_string(), "provider error 500: Internal Server Error");
    }
}
