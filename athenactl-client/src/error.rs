use thiserror::Error;

/// Failures of the single outbound call. No retry happens here; every
/// variant aborts the invocation and is surfaced to the caller verbatim.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid endpoint: {0}")]
    Endpoint(String),

    #[error("request signing failed: {0}")]
    Signing(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("service error {code} (http {status}): {message}")]
    Service { code: String, message: String, status: u16 },
}

/// Transport result type
pub type TransportResult<T> = Result<T, TransportError>;
