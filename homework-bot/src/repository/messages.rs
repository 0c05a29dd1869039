//! Messages repository
//!
//! Delivers text to the single configured Telegram chat.

use async_trait::async_trait;
use homework_client::{ClientError, TelegramClient};

/// Repository trait for delivering messages to the configured destination
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Sends `text` to the destination chat, once
    async fn send_message(&self, text: &str) -> Result<(), ClientError>;
}

/// Telegram implementation of MessageRepository
pub struct TelegramMessageRepository {
    client: TelegramClient,
    chat_id: i64,
}

impl TelegramMessageRepository {
    /// Creates a new Telegram messages repository
    ///
    /// # Arguments
    /// * `client` - Bot API client
    /// * `chat_id` - Chat that receives every message
    pub fn new(client: TelegramClient, chat_id: i64) -> Self {
        Self { client, chat_id }
    }
}

#[async_trait]
impl MessageRepository for TelegramMessageRepository {
    async fn send_message(&self, text: &str) -> Result<(), ClientError> {
        self.client.send_message(self.chat_id, text).await
    }
}
