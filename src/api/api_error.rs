use thiserror::Error;

/// Failures talking to the housing backend. Callers degrade every variant
/// to a safe default; none of them is fatal.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },
    #[error("Malformed payload: {0}")]
    Decode(String),
    #[error("Invalid endpoint URL: {0}")]
    Url(String),
}
