use thiserror::Error;

/// Errors from [`crate::source::FeatureSource::fetch`].
///
/// Each variant is recoverable: callers report it and allow a retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request could not be delivered.
    #[error("network error contacting {url}: {message}")]
    Network {
        /// Endpoint that was contacted.
        url: String,
        /// Transport error description.
        message: String,
    },
    /// The request exceeded its deadline.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Endpoint that was contacted.
        url: String,
        /// Configured timeout.
        timeout_secs: u64,
    },
    /// The service answered with a non-success status.
    #[error("{url} returned HTTP {status}: {message}")]
    Http {
        /// Endpoint that was contacted.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Error description.
        message: String,
    },
    /// The response body could not be decoded.
    #[error("failed to decode response: {message}")]
    Parse {
        /// Decoder error description.
        message: String,
    },
}
