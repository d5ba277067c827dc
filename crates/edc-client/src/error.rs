//! Error types shared across the crate.

use thiserror::Error;

/// Errors that can occur when handling connector responses.
///
/// The builders themselves never fail: they pass their inputs through
/// unvalidated, so there is no rejection path on the request side.
#[derive(Error, Debug)]
pub enum ConnectorError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Missing field '{0}' in response body")]
    MissingField(&'static str),
}

/// Result type for connector operations.
pub type ConnectorResult<T> = Result<T, ConnectorError>;
