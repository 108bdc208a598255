//! Server Sync
//!
//! Notifies the backend of the final list order after a drag. Fire and
//! forget from the UI's point of view, but exposed as an explicit
//! future so callers can observe completion instead of scraping the
//! console.

use std::fmt;

/// Endpoint receiving the reordered labels
pub const SORTED_LIST_PATH: &str = "/sorted_list";

/// Failure modes when notifying the backend
#[derive(Debug, Clone, PartialEq)]
pub enum SyncError {
    /// Request could not be built or sent
    Network(String),
    /// Non-2xx HTTP response
    Server { status: u16, message: String },
    /// Response body was not JSON
    Deserialization(String),
}

impl fmt::Display for SyncError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncError::Network(msg) => write!(f, "network error: {}", msg),
            SyncError::Server { status, message } => {
                write!(f, "server error {}: {}", status, message)
            }
            SyncError::Deserialization(msg) => write!(f, "invalid response body: {}", msg),
        }
    }
}

impl std::error::Error for SyncError {}

/// POST the labels, in order, as a JSON array. Returns the server's
/// JSON response; its shape is not validated.
#[cfg(target_arch = "wasm32")]
pub async fn send_sorted_list(labels: &[String]) -> Result<serde_json::Value, SyncError> {
    use gloo_net::http::Request;

    let response = Request::post(SORTED_LIST_PATH)
        .json(&labels)
        .map_err(|e| SyncError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| SyncError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(SyncError::Server {
            status: response.status(),
            message: response.status_text(),
        });
    }

    response
        .json()
        .await
        .map_err(|e| SyncError::Deserialization(e.to_string()))
}

/// There is no browser fetch off wasm32; host builds only exercise the
/// pure logic around this call.
#[cfg(not(target_arch = "wasm32"))]
pub async fn send_sorted_list(labels: &[String]) -> Result<serde_json::Value, SyncError> {
    let _ = labels;
    Err(SyncError::Network("no browser transport".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_format_with_their_cause() {
        let e = SyncError::Network("connection refused".into());
        assert_eq!(e.to_string(), "network error: connection refused");

        let e = SyncError::Server {
            status: 500,
            message: "Internal Server Error".into(),
        };
        assert_eq!(e.to_string(), "server error 500: Internal Server Error");

        let e = SyncError::Deserialization("expected value at line 1".into());
        assert_eq!(
            e.to_string(),
            "invalid response body: expected value at line 1"
        );
    }
}
