//! The HTTP collaborator contract.
//!
//! The crate performs no requests itself. Callers fetch responses with
//! whatever client they own and hand them in as an [`ApiResponse`]: a
//! status code plus the raw body, from which typed or dynamic JSON can be
//! decoded.

use crate::error::{ConnectorError, ConnectorResult};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::fmt;
use tracing::debug;

/// An already-fetched HTTP response: status code and raw body text.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    body: String,
}

impl ApiResponse {
    /// Wraps a status code and body captured elsewhere.
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Adapts a `reqwest` response, reading the body to completion.
    pub async fn from_http(response: reqwest::Response) -> ConnectorResult<Self> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ConnectorError::RequestFailed(e.to_string()))?;
        debug!(status = %status, bytes = body.len(), "captured response");
        Ok(Self { status, body })
    }

    /// The HTTP status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Whether the response carries a renderable result list. The
    /// connector and registry list endpoints signal that with 200
    /// exactly, so other 2xx codes do not count as success here.
    pub fn is_success(&self) -> bool {
        self.status == StatusCode::OK
    }

    /// The raw body text.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Decodes the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> ConnectorResult<T> {
        serde_json::from_str(&self.body).map_err(|e| {
            ConnectorError::InvalidResponse(format!(
                "Failed to parse response (status {}): {}",
                self.status, e
            ))
        })
    }
}

impl fmt::Display for ApiResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_is_success_only_for_200() {
        assert!(ApiResponse::new(StatusCode::OK, "[]").is_success());
        assert!(!ApiResponse::new(StatusCode::CREATED, "[]").is_success());
        assert!(!ApiResponse::new(StatusCode::NOT_FOUND, "").is_success());
    }

    #[test]
    fn test_json_decodes_body() {
        let response = ApiResponse::new(StatusCode::OK, r#"{"result": []}"#);
        let value: Value = response.json().unwrap();
        assert!(value["result"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_json_rejects_malformed_body() {
        let response = ApiResponse::new(StatusCode::OK, "not json");
        let err = response.json::<Value>().unwrap_err();
        assert!(matches!(err, ConnectorError::InvalidResponse(_)));
        assert!(err.to_string().contains("200"));
    }

    #[test]
    fn test_display_shows_status() {
        let response = ApiResponse::new(StatusCode::NOT_FOUND, "");
        assert_eq!(response.to_string(), "HTTP 404 Not Found");
    }
}
