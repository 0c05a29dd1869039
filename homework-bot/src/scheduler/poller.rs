//! Status poller
//!
//! Polls the review API on a fixed interval and tells the chat when the
//! status of the latest homework changes. Any error inside a cycle is
//! reported to the chat as well; the loop itself never stops.

use std::sync::Arc;
use thiserror::Error;
use tokio::time::{self, Duration};
use tracing::{debug, error, info, warn};

use homework_client::ClientError;
use homework_core::{Cursor, InterpretError, SchemaError, check_response, parse_status};

use crate::repository::StatusRepository;
use crate::service::Notifier;

/// Prefix of the message sent when a cycle fails
pub const FAILURE_PREFIX: &str = "Сбой в работе программы";

/// Everything that can abandon a poll cycle
#[derive(Debug, Error)]
pub enum CycleError {
    /// Review API could not be reached or did not answer 200
    #[error("review API request failed: {0}")]
    Fetch(#[from] ClientError),

    /// Response body does not have the documented shape
    #[error("unexpected review API response: {0}")]
    Schema(#[from] SchemaError),

    /// Latest homework record cannot be turned into a notification
    #[error("cannot interpret homework: {0}")]
    Interpret(#[from] InterpretError),
}

/// What a single poll cycle ended with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Status changed and a notification was attempted
    Notified,
    /// Status is the same as the last one notified
    Unchanged,
    /// The response held no homeworks
    NoUpdates,
    /// The cycle was abandoned and a failure report was attempted
    Failed,
}

/// Poller that tracks the latest homework of a single student
pub struct StatusPoller {
    statuses: Arc<dyn StatusRepository>,
    notifier: Notifier,
    cursor: Cursor,
    retry_period: Duration,
    last_message: Option<String>,
}

impl StatusPoller {
    /// Creates a new status poller
    ///
    /// # Arguments
    /// * `statuses` - Source of raw status payloads
    /// * `notifier` - Best-effort chat delivery
    /// * `cursor` - Window start sent with every request; never advanced
    /// * `retry_period` - Pause after every cycle
    pub fn new(
        statuses: Arc<dyn StatusRepository>,
        notifier: Notifier,
        cursor: Cursor,
        retry_period: Duration,
    ) -> Self {
        Self {
            statuses,
            notifier,
            cursor,
            retry_period,
            last_message: None,
        }
    }

    /// Cursor sent with every request
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Text of the last status notification, if any
    pub fn last_message(&self) -> Option<&str> {
        self.last_message.as_deref()
    }

    /// Runs the polling loop until the process is terminated
    pub async fn run(&mut self) {
        info!(
            "Starting status poller (interval: {:?}, from_date: {})",
            self.retry_period, self.cursor
        );

        loop {
            let outcome = self.tick().await;
            debug!("Cycle finished: {:?}", outcome);
        }
    }

    /// Runs one cycle, then sleeps for the retry period whatever happened
    pub async fn tick(&mut self) -> CycleOutcome {
        let outcome = self.poll_once().await;
        time::sleep(self.retry_period).await;
        outcome
    }

    /// Performs a single poll cycle without the trailing sleep
    pub async fn poll_once(&mut self) -> CycleOutcome {
        debug!("Polling homework statuses");

        match self.check_statuses().await {
            Ok(Some(message)) => self.deliver(message).await,
            Ok(None) => {
                debug!("No homeworks in response");
                CycleOutcome::NoUpdates
            }
            Err(e) => {
                error!("Error during poll cycle: {}", e);
                if let CycleError::Fetch(cause) = &e {
                    if cause.is_unauthorized() {
                        warn!("Review API rejected the token; check PRACTICUM_TOKEN");
                    }
                }
                self.notifier
                    .notify(&format!("{}: {}", FAILURE_PREFIX, e))
                    .await;
                CycleOutcome::Failed
            }
        }
    }

    /// Fetches, validates and interprets; `None` when there is nothing to report
    async fn check_statuses(&self) -> Result<Option<String>, CycleError> {
        let response = self.statuses.fetch_statuses(self.cursor).await?;
        let homeworks = check_response(&response)?;

        let message = homeworks.first().map(parse_status).transpose()?;
        Ok(message)
    }

    /// Sends `message` unless it was the last one sent
    async fn deliver(&mut self, message: String) -> CycleOutcome {
        if self.last_message.as_deref() == Some(message.as_str()) {
            debug!("No new statuses");
            return CycleOutcome::Unchanged;
        }

        info!("Homework status changed");
        if !self.notifier.notify(&message).await {
            warn!("Status change was not delivered and will not be resent");
        }

        // Remembered even when delivery failed: at most one attempt per change.
        self.last_message = Some(message);
        CycleOutcome::Notified
    }
}
