//! Telegram Bot API

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ClientError, Result};

/// Public Telegram Bot API host
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Longest text `sendMessage` accepts, in characters
pub const MAX_MESSAGE_CHARS: usize = 4096;

/// HTTP client for the Telegram Bot API
#[derive(Clone)]
pub struct TelegramClient {
    /// Base URL of the Bot API (e.g., "https://api.telegram.org")
    api_url: String,
    /// Bot token; part of every method URL
    token: String,
    /// HTTP client instance
    client: Client,
}

impl std::fmt::Debug for TelegramClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramClient")
            .field("api_url", &self.api_url)
            .finish_non_exhaustive()
    }
}

impl TelegramClient {
    /// Create a client for the public Bot API
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_client(DEFAULT_TELEGRAM_API_URL, token, Client::new())
    }

    /// Create a client against a custom Bot API host and HTTP client
    ///
    /// # Arguments
    /// * `api_url` - Base URL of the Bot API (a local Bot API server works too)
    /// * `token` - Bot token issued by BotFather
    /// * `client` - A configured reqwest Client
    pub fn with_client(
        api_url: impl Into<String>,
        token: impl Into<String>,
        client: Client,
    ) -> Self {
        let api_url = api_url.into();
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            token: token.into(),
            client,
        }
    }

    /// Get the Bot API base URL
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.api_url, self.token, method)
    }

    /// Send a plain text message to a chat
    ///
    /// A delivery counts as successful only when the HTTP status is 2xx and
    /// the Bot API reports `"ok": true`.
    ///
    /// # Arguments
    /// * `chat_id` - Destination chat identifier
    /// * `text` - Message body
    pub async fn send_message(&self, chat_id: i64, text: &str) -> Result<()> {
        debug!("Sending Telegram message to chat {}", chat_id);

        // The token is part of the URL; keep it out of transport errors.
        let response = self
            .client
            .post(self.method_url("sendMessage"))
            .json(&SendMessage { chat_id, text })
            .send()
            .await
            .map_err(|e| ClientError::RequestFailed(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            let body = crate::error_body(response).await;
            return Err(ClientError::api_error(status.as_u16(), body));
        }

        let reply: BotResponse = response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))?;

        reply.into_result(status.as_u16())
    }
}

#[derive(Debug, Serialize)]
struct SendMessage<'a> {
    chat_id: i64,
    text: &'a str,
}

/// Envelope every Bot API method replies with
#[derive(Debug, Deserialize)]
struct BotResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    error_code: Option<u16>,
}

impl BotResponse {
    fn into_result(self, http_status: u16) -> Result<()> {
        if self.ok {
            return Ok(());
        }

        Err(ClientError::api_error(
            self.error_code.unwrap_or(http_status),
            self.description
                .unwrap_or_else(|| "Telegram reported failure".to_string()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = TelegramClient::with_client("http://localhost:8081/", "t", Client::new());
        assert_eq!(client.api_url(), "http://localhost:8081");
    }

    #[test]
    fn test_method_url() {
        let client = TelegramClient::new("123:ABC");
        assert_eq!(
            client.method_url("sendMessage"),
            "https://api.telegram.org/bot123:ABC/sendMessage"
        );
    }

    #[test]
    fn test_debug_hides_token() {
        let client = TelegramClient::new("123:SECRET");
        assert!(!format!("{:?}", client).contains("SECRET"));
    }

    #[test]
    fn test_send_message_body() {
        let body = serde_json::to_value(SendMessage {
            chat_id: 5970585663,
            text: "hi",
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"chat_id": 5970585663_i64, "text": "hi"}));
    }

    #[test]
    fn test_bot_response_ok() {
        let reply: BotResponse =
            serde_json::from_str(r#"{"ok": true, "result": {"message_id": 1}}"#).unwrap();
        assert!(reply.into_result(200).is_ok());
    }

    #[test]
    fn test_bot_response_failure() {
        let reply: BotResponse = serde_json::from_str(
            r#"{"ok": false, "error_code": 400, "description": "Bad Request: chat not found"}"#,
        )
        .unwrap();

        let err = reply.into_result(200).unwrap_err();
        assert_eq!(err.status(), Some(400));
        assert!(err.to_string().contains("chat not found"));
    }

    #[tokio::test]
    async fn test_transport_error_hides_token() {
        let client =
            TelegramClient::with_client("http://127.0.0.1:9", "123:SECRET", Client::new());
        let err = client.send_message(1, "hi").await.unwrap_err();
        assert!(matches!(err, ClientError::RequestFailed(_)));
        assert!(!err.to_string().contains("SECRET"));
    }
}
