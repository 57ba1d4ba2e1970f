use thiserror::Error;

/// Failure of a request against the sales API.
///
/// Both transport and service failures end up as one inline message in the UI;
/// the variants only keep the log readable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Transport failure: connection refused, DNS, CORS, timeout
    #[error("Network error: {0}")]
    Network(String),
    /// Non-success HTTP status
    #[error("Service error: HTTP {status} {status_text}")]
    Status { status: u16, status_text: String },
    /// Body did not match the expected JSON shape
    #[error("Service error: failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = ApiError::Status {
            status: 503,
            status_text: "Service Unavailable".into(),
        };
        assert_eq!(err.to_string(), "Service error: HTTP 503 Service Unavailable");
        assert!(ApiError::Network("connection refused".into()).is_network());
        assert!(!err.is_network());
    }
}
