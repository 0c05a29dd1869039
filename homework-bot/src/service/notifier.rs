//! Notifier service
//!
//! Best-effort delivery of notification text. Both status updates and
//! failure reports go through here, so a delivery failure is logged and
//! dropped instead of being handed back to the poll loop.

use homework_client::{MAX_MESSAGE_CHARS, truncate_chars};
use std::sync::Arc;
use tracing::{debug, error, warn};

use crate::repository::MessageRepository;

/// Delivers notifications to the configured chat, swallowing failures
#[derive(Clone)]
pub struct Notifier {
    messages: Arc<dyn MessageRepository>,
}

impl Notifier {
    /// Creates a notifier over a message repository
    pub fn new(messages: Arc<dyn MessageRepository>) -> Self {
        Self { messages }
    }

    /// Attempts exactly one delivery of `text`
    ///
    /// Text longer than a chat message allows is cut to fit. Returns whether
    /// the message was delivered. Callers may log this but must not retry
    /// on it.
    pub async fn notify(&self, text: &str) -> bool {
        debug!("Sending message to chat");

        let fitted = truncate_chars(text, MAX_MESSAGE_CHARS);
        if fitted != text {
            warn!("Message truncated to {} characters", MAX_MESSAGE_CHARS);
        }

        match self.messages.send_message(&fitted).await {
            Ok(()) => {
                debug!("Message delivered: {}", fitted);
                true
            }
            Err(e) => {
                error!("Failed to deliver message: {}", e);
                false
            }
        }
    }
}
