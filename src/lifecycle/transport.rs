//! Trait abstraction for snapshot delivery to enable mocking in tests

use super::snapshot::FormSnapshot;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Status value that marks an accepted submission
pub const STATUS_SUCCESS: &str = "success";

/// Application-level reply from a transport
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TransportResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl TransportResponse {
    pub fn success() -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            message: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}

/// Delivery failures below the application level
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("could not encode form data: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Capability that delivers a snapshot somewhere and reports the result
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmitTransport: Send + Sync {
    async fn send(&self, snapshot: &FormSnapshot) -> Result<TransportResponse, TransportError>;
}

/// Transport that only logs the snapshot. Used where submission is simulated.
#[derive(Debug, Clone, Default)]
pub struct LogTransport {
    latency: Duration,
}

impl LogTransport {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl SubmitTransport for LogTransport {
    async fn send(&self, snapshot: &FormSnapshot) -> Result<TransportResponse, TransportError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        let data = serde_json::to_string(snapshot).map_err(TransportError::Encode)?;
        tracing::info!(fields = snapshot.len(), %data, "form data");
        Ok(TransportResponse::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::assert_ok;

    #[test]
    fn test_response_deserializes_without_message() {
        let response: TransportResponse = serde_json::from_str(r#"{"status":"success"}"#).unwrap();
        assert!(response.is_success());
        assert!(response.message.is_none());
    }

    #[test]
    fn test_response_ignores_extra_keys() {
        let response: TransportResponse = serde_json::from_str(
            r#"{"status":"error","message":"All fields are required","data":{"id":3}}"#,
        )
        .unwrap();
        assert!(!response.is_success());
        assert_eq!(response.message.as_deref(), Some("All fields are required"));
    }

    #[test]
    fn test_any_other_status_is_failure() {
        let odd = TransportResponse {
            status: "pending".to_string(),
            message: None,
        };
        assert!(!odd.is_success());
    }

    #[test]
    fn test_status_error_display() {
        let err = TransportError::Status {
            status: 400,
            message: "Invalid date format".to_string(),
        };
        assert_eq!(err.to_string(), "server returned 400: Invalid date format");
    }

    #[test]
    fn test_encode_and_decode_errors_are_distinct() {
        let encode = TransportError::Encode(serde_json::from_str::<u8>("x").unwrap_err());
        assert!(encode.to_string().starts_with("could not encode form data"));

        let decode: TransportError = serde_json::from_str::<u8>("x").unwrap_err().into();
        assert!(matches!(decode, TransportError::Decode(_)));
        assert!(decode.to_string().starts_with("malformed response"));
    }

    #[tokio::test]
    async fn test_log_transport_always_succeeds() {
        let transport = LogTransport::default();
        let snapshot: FormSnapshot = [("mass", "150.5")].into_iter().collect();
        let response = assert_ok!(transport.send(&snapshot).await);
        assert!(response.is_success());
    }

    #[tokio::test(start_paused = true)]
    async fn test_log_transport_waits_for_latency() {
        let transport = LogTransport::new(Duration::from_millis(1500));
        let started = tokio::time::Instant::now();
        assert_ok!(transport.send(&FormSnapshot::default()).await);
        assert!(started.elapsed() >= Duration::from_millis(1500));
    }
}
