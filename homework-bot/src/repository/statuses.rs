//! Statuses repository
//!
//! Fetches raw homework statuses from the Practicum review API.

use async_trait::async_trait;
use homework_client::{ClientError, PracticumClient};
use homework_core::Cursor;
use serde_json::Value;

/// Repository trait for reading homework statuses
#[async_trait]
pub trait StatusRepository: Send + Sync {
    /// Fetches the raw statuses payload for the window starting at `cursor`
    ///
    /// Performs exactly one request; retrying is up to the caller.
    async fn fetch_statuses(&self, cursor: Cursor) -> Result<Value, ClientError>;
}

/// HTTP implementation of StatusRepository
pub struct HttpStatusRepository {
    client: PracticumClient,
}

impl HttpStatusRepository {
    /// Creates a new HTTP statuses repository
    pub fn new(client: PracticumClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StatusRepository for HttpStatusRepository {
    async fn fetch_statuses(&self, cursor: Cursor) -> Result<Value, ClientError> {
        self.client.homework_statuses(cursor.as_unix()).await
    }
}
