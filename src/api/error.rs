use thiserror::Error;

/// Error taxonomy of the platform API surface. Calls are never retried
/// automatically; recovery is up to the caller.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection failures, timeouts and malformed responses
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The token was rejected; the session is treated as invalid globally
    #[error("session is no longer valid (HTTP 401)")]
    Unauthorized,

    #[error("request rejected: HTTP {status}")]
    Client { status: u16 },

    #[error("server error: HTTP {status}")]
    Server { status: u16 },

    /// Local validation failed before any request was issued
    #[error("{0}")]
    Validation(String),

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => ApiError::Unauthorized,
            400..=499 => ApiError::Client { status },
            _ => ApiError::Server { status },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_map_to_categories() {
        assert!(matches!(ApiError::from_status(401), ApiError::Unauthorized));
        assert!(matches!(ApiError::from_status(404), ApiError::Client { status: 404 }));
        assert!(matches!(ApiError::from_status(500), ApiError::Server { status: 500 }));
    }
}
