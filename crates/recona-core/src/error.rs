use thiserror::Error;

/// Result type alias for Recona operations
pub type Result<T> = std::result::Result<T, ReconaError>;

/// Errors that can occur when using the Recona API
#[derive(Error, Debug)]
pub enum ReconaError {
    /// Request body could not be serialized to JSON
    #[error("failed to encode request body: {0}")]
    Encoding(#[source] serde_json::Error),

    /// The rate-limit wait ended before a token was granted
    #[error("rate limit wait cancelled")]
    AdmissionCancelled,

    /// Network-level failure (DNS, connect, timeout, reset)
    #[error("request failed: {0}")]
    Transport(String),

    /// The API returned an error response (status >= 400)
    ///
    /// The body is preserved verbatim so server-provided diagnostics
    /// reach the caller.
    #[error("API error {status}: {body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// Response body did not match the expected shape
    #[error("failed to decode response body: {0}")]
    Decoding(#[source] serde_json::Error),

    /// A paginated search failed, annotated with the offset of the
    /// page that produced the error
    #[error("search failed at offset {offset}: {source}")]
    Search {
        /// Offset of the failing page request
        offset: usize,
        /// The underlying call error
        #[source]
        source: Box<ReconaError>,
    },

    /// A failed call annotated with the operation being performed
    #[error("{operation}: {source}")]
    Operation {
        /// Description of the attempted operation
        operation: String,
        /// The underlying call error
        #[source]
        source: Box<ReconaError>,
    },

    /// Invalid client configuration
    #[error("configuration error: {0}")]
    Config(String),
}

impl ReconaError {
    /// Wrap the error with a description of the operation that failed
    #[must_use]
    pub fn in_operation(self, operation: impl Into<String>) -> Self {
        Self::Operation {
            operation: operation.into(),
            source: Box::new(self),
        }
    }

    /// Returns the HTTP status code if the API reported one
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Search { source, .. } | Self::Operation { source, .. } => source.status_code(),
            _ => None,
        }
    }

    /// Returns true if the call was cut short waiting for rate-limit
    /// admission rather than failing against the backend
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        match self {
            Self::AdmissionCancelled => true,
            Self::Search { source, .. } | Self::Operation { source, .. } => source.is_cancelled(),
            _ => false,
        }
    }

    /// Returns true if the error indicates invalid credentials
    #[must_use]
    pub fn is_auth_error(&self) -> bool {
        matches!(self.status_code(), Some(401 | 403))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_preserves_body() {
        let err = ReconaError::Api {
            status: 403,
            body: "insufficient permissions".to_string(),
        };
        assert_eq!(err.to_string(), "API error 403: insufficient permissions");
        assert_eq!(err.status_code(), Some(403));
        assert!(err.is_auth_error());
    }

    #[test]
    fn search_error_reports_offset_and_inner_status() {
        let err = ReconaError::Search {
            offset: 100,
            source: Box::new(ReconaError::Api {
                status: 500,
                body: "boom".to_string(),
            }),
        };
        assert!(err.to_string().contains("offset 100"));
        assert_eq!(err.status_code(), Some(500));
        assert!(!err.is_cancelled());
    }

    #[test]
    fn operation_annotation_keeps_inner_error_visible() {
        let err = ReconaError::Api {
            status: 403,
            body: "insufficient permissions".to_string(),
        }
        .in_operation("failed to get domain details for ID example.com");

        assert_eq!(
            err.to_string(),
            "failed to get domain details for ID example.com: \
             API error 403: insufficient permissions"
        );
        assert_eq!(err.status_code(), Some(403));
        assert!(err.is_auth_error());

        let err = ReconaError::AdmissionCancelled.in_operation("failed to search host records");
        assert!(err.is_cancelled());
    }

    #[test]
    fn cancellation_is_distinguishable() {
        assert!(ReconaError::AdmissionCancelled.is_cancelled());
        assert!(!ReconaError::Transport("connection reset".into()).is_cancelled());
    }
}
