//! HTTP JSON transport for the inspection endpoint
//!
//! Posts the snapshot as a JSON object and reads back a
//! `{"status": ..., "message": ...}` reply.

use super::snapshot::FormSnapshot;
use super::transport::{SubmitTransport, TransportError, TransportResponse};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Default endpoint (same-origin root path of the local server)
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/";

/// Transport that POSTs snapshots to a fixed endpoint
#[derive(Debug, Clone)]
pub struct HttpJsonTransport {
    http: Client,
    endpoint: String,
}

impl HttpJsonTransport {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, TransportError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SubmitTransport for HttpJsonTransport {
    async fn send(&self, snapshot: &FormSnapshot) -> Result<TransportResponse, TransportError> {
        tracing::debug!(endpoint = %self.endpoint, "posting form data");

        let response = self
            .http
            .post(&self.endpoint)
            .json(snapshot)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            // Error replies usually still carry a message
            let message = serde_json::from_slice::<TransportResponse>(&body)
                .ok()
                .and_then(|r| r.message)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("error").to_string());
            return Err(TransportError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(serde_json::from_slice(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        http::{HeaderMap, StatusCode},
        response::IntoResponse,
        routing::post,
        Router,
    };
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tokio::net::TcpListener;
    use tokio::sync::{oneshot, Mutex};

    type Captured = Arc<Mutex<Option<oneshot::Sender<(Option<String>, Value)>>>>;

    async fn spawn_server(
        status: StatusCode,
        reply: &'static str,
    ) -> (String, oneshot::Receiver<(Option<String>, Value)>) {
        std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("addr");
        let (tx, rx) = oneshot::channel();
        let captured: Captured = Arc::new(Mutex::new(Some(tx)));

        let app = Router::new().route(
            "/",
            post(move |headers: HeaderMap, body: String| {
                let captured = Arc::clone(&captured);
                async move {
                    let content_type = headers
                        .get("content-type")
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_string);
                    let payload: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
                    if let Some(tx) = captured.lock().await.take() {
                        let _ = tx.send((content_type, payload));
                    }
                    (status, reply).into_response()
                }
            }),
        );
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        (format!("http://{addr}/"), rx)
    }

    fn transport(endpoint: &str) -> HttpJsonTransport {
        HttpJsonTransport::new(endpoint, Duration::from_secs(5)).expect("client")
    }

    fn inspection_snapshot() -> FormSnapshot {
        [
            ("date", "2024-03-04"),
            ("batchNumber", "B-42"),
            ("section", "Rolling"),
        ]
        .into_iter()
        .collect()
    }

    #[tokio::test]
    async fn test_posts_json_object_with_field_names() {
        let (url, rx) = spawn_server(StatusCode::OK, r#"{"status":"success"}"#).await;

        let response = transport(&url)
            .send(&inspection_snapshot())
            .await
            .expect("send");
        assert!(response.is_success());

        let (content_type, payload) = rx.await.expect("request captured");
        assert_eq!(content_type.as_deref(), Some("application/json"));
        assert_eq!(
            payload,
            json!({"date": "2024-03-04", "batchNumber": "B-42", "section": "Rolling"})
        );
    }

    #[tokio::test]
    async fn test_application_error_is_returned_as_response() {
        let (url, _rx) = spawn_server(
            StatusCode::OK,
            r#"{"status":"error","message":"Invalid date format"}"#,
        )
        .await;

        let response = transport(&url)
            .send(&inspection_snapshot())
            .await
            .expect("send");
        assert!(!response.is_success());
        assert_eq!(response.message.as_deref(), Some("Invalid date format"));
    }

    #[tokio::test]
    async fn test_non_2xx_is_error_with_server_message() {
        let (url, _rx) = spawn_server(
            StatusCode::BAD_REQUEST,
            r#"{"status":"error","message":"All fields are required"}"#,
        )
        .await;

        let err = transport(&url)
            .send(&inspection_snapshot())
            .await
            .expect_err("400 must fail");
        match err {
            TransportError::Status { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "All fields are required");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_non_2xx_without_json_uses_reason() {
        let (url, _rx) = spawn_server(StatusCode::INTERNAL_SERVER_ERROR, "boom").await;

        let err = transport(&url)
            .send(&inspection_snapshot())
            .await
            .expect_err("500 must fail");
        assert_eq!(
            err.to_string(),
            "server returned 500: Internal Server Error"
        );
    }

    #[tokio::test]
    async fn test_malformed_json_is_decode_error() {
        let (url, _rx) = spawn_server(StatusCode::OK, "<html>not json</html>").await;

        let err = transport(&url)
            .send(&inspection_snapshot())
            .await
            .expect_err("html must fail");
        assert!(matches!(err, TransportError::Decode(_)));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_request_error() {
        std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("addr");
        drop(listener);

        let err = transport(&format!("http://{addr}/"))
            .send(&inspection_snapshot())
            .await
            .expect_err("closed port must fail");
        assert!(matches!(err, TransportError::Request(_)));
    }
}
