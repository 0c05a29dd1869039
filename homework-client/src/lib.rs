//! Homework HTTP Clients
//!
//! Thin, typed HTTP clients for the two remote services the homework bot
//! talks to:
//! - [`PracticumClient`]: the Practicum homework review API (status source)
//! - [`TelegramClient`]: the Telegram Bot API (notification sink)
//!
//! Neither client retries. A call either returns the decoded response or a
//! [`ClientError`] describing what went wrong; the caller decides what to do
//! next.
//!
//! # Example
//!
//! ```no_run
//! use homework_client::{PracticumClient, TelegramClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let practicum = PracticumClient::new(
//!         "https://practicum.yandex.ru/api/user_api/homework_statuses/",
//!         "practicum-token",
//!     );
//!     let telegram = TelegramClient::new("telegram-token");
//!
//!     let statuses = practicum.homework_statuses(0).await?;
//!     telegram.send_message(5970585663, &statuses.to_string()).await?;
//!     Ok(())
//! }
//! ```

pub mod error;
mod practicum;
mod telegram;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use practicum::{DEFAULT_PRACTICUM_ENDPOINT, PracticumClient};
pub use telegram::{DEFAULT_TELEGRAM_API_URL, MAX_MESSAGE_CHARS, TelegramClient};

/// Longest error body kept in a [`ClientError::ApiError`], in characters
pub const MAX_ERROR_BODY_CHARS: usize = 512;

/// Cuts `text` to at most `max_chars` characters, marking the cut with `…`
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if max_chars == 0 {
        return String::new();
    }
    if text.chars().nth(max_chars).is_none() {
        return text.to_string();
    }

    let mut truncated: String = text.chars().take(max_chars - 1).collect();
    truncated.push('…');
    truncated
}

/// Read the body of a failed response for inclusion in an error
async fn error_body(response: reqwest::Response) -> String {
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    truncate_chars(&body, MAX_ERROR_BODY_CHARS)
}
