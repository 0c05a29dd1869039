//! Practicum review API

use reqwest::{Client, StatusCode, header};
use serde_json::Value;
use tracing::debug;

use crate::error::{ClientError, Result};

/// Homework statuses endpoint of the Practicum user API
pub const DEFAULT_PRACTICUM_ENDPOINT: &str =
    "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// HTTP client for the Practicum homework review API
#[derive(Debug, Clone)]
pub struct PracticumClient {
    /// Full URL of the homework statuses endpoint
    endpoint: String,
    /// OAuth token sent with every request
    token: String,
    /// HTTP client instance
    client: Client,
}

impl PracticumClient {
    /// Create a new review API client
    ///
    /// # Arguments
    /// * `endpoint` - Full URL of the homework statuses endpoint
    /// * `token` - Practicum OAuth token
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_client(endpoint, token, Client::new())
    }

    /// Create a new review API client with a custom HTTP client
    ///
    /// Use this to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(
        endpoint: impl Into<String>,
        token: impl Into<String>,
        client: Client,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.into(),
            client,
        }
    }

    /// Get the endpoint this client polls
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Value of the `Authorization` header
    fn authorization(&self) -> String {
        format!("OAuth {}", self.token)
    }

    /// Build the statuses request for `from_date`
    fn request(&self, from_date: i64) -> reqwest::RequestBuilder {
        self.client
            .get(&self.endpoint)
            .header(header::AUTHORIZATION, self.authorization())
            .query(&[("from_date", from_date)])
    }

    /// Fetch homework statuses changed since `from_date`
    ///
    /// Only `200 OK` counts as success; the body is returned as raw JSON so the
    /// caller can validate its shape.
    ///
    /// # Arguments
    /// * `from_date` - Unix timestamp bounding the requested window
    pub async fn homework_statuses(&self, from_date: i64) -> Result<Value> {
        debug!("Requesting homework statuses from_date={}", from_date);

        let response = self.request(from_date).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = crate::error_body(response).await;
            return Err(ClientError::api_error(status.as_u16(), body));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = PracticumClient::new(DEFAULT_PRACTICUM_ENDPOINT, "token");
        assert_eq!(client.endpoint(), DEFAULT_PRACTICUM_ENDPOINT);
    }

    #[test]
    fn test_authorization_header() {
        let client = PracticumClient::new(DEFAULT_PRACTICUM_ENDPOINT, "y0_secret");
        assert_eq!(client.authorization(), "OAuth y0_secret");
    }

    #[test]
    fn test_request_shape() {
        let client = PracticumClient::new("https://example.com/statuses/", "abc");
        let request = client.request(1_700_000_000).build().unwrap();

        assert_eq!(
            request.url().as_str(),
            "https://example.com/statuses/?from_date=1700000000"
        );
        assert_eq!(request.headers()[header::AUTHORIZATION], "OAuth abc");
    }

    #[tokio::test]
    async fn test_transport_failure_is_request_failed() {
        // Nothing listens on port 9 of localhost
        let client = PracticumClient::new("http://127.0.0.1:9/statuses/", "abc");
        let err = client.homework_statuses(0).await.unwrap_err();
        assert!(matches!(err, ClientError::RequestFailed(_)));
    }

    /// Serves `response` verbatim to the first connection, returns the endpoint URL
    async fn serve_once(response: String) -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 4096];
            let _ = socket.read(&mut request).await;
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });

        format!("http://{}/statuses/", addr)
    }

    fn http_response(status_line: &str, body: &str) -> String {
        format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        )
    }

    async fn fetch(response: String) -> Result<Value> {
        let endpoint = serve_once(response).await;
        PracticumClient::new(endpoint, "abc")
            .homework_statuses(0)
            .await
    }

    #[tokio::test]
    async fn test_ok_returns_json() {
        let body = r#"{"homeworks": [], "current_date": 1700000000}"#;
        let value = fetch(http_response("200 OK", body)).await.unwrap();
        assert_eq!(value["current_date"], 1_700_000_000);
    }

    #[tokio::test]
    async fn test_other_success_codes_are_rejected() {
        let err = fetch(http_response("201 Created", r#"{"homeworks": []}"#))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::ApiError { status: 201, .. }));

        let err = fetch("HTTP/1.1 204 No Content\r\nConnection: close\r\n\r\n".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::ApiError { status: 204, .. }));
    }

    #[tokio::test]
    async fn test_server_error_is_api_error() {
        let err = fetch(http_response("500 Internal Server Error", "boom"))
            .await
            .unwrap_err();

        match err {
            ClientError::ApiError { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("expected ApiError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_long_error_body_is_truncated() {
        let body = format!("<html>{}</html>", "x".repeat(6000));
        let err = fetch(http_response("502 Bad Gateway", &body))
            .await
            .unwrap_err();

        match err {
            ClientError::ApiError { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message.chars().count(), crate::MAX_ERROR_BODY_CHARS);
                assert!(message.starts_with("<html>"));
            }
            other => panic!("expected ApiError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_invalid_json_is_parse_error() {
        let err = fetch(http_response("200 OK", "not json")).await.unwrap_err();
        assert!(matches!(err, ClientError::ParseError(_)));
        assert_eq!(err.status(), None);
    }
}
