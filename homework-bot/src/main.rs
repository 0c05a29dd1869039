//! Homework Bot
//!
//! A long-running notifier that watches the review status of a student's
//! latest Practicum homework and reports changes to a Telegram chat.
//!
//! Architecture:
//! - Configuration: flags and environment variables, `.env` loaded first
//! - Repositories: review API and Telegram behind narrow traits
//! - Services: best-effort notification delivery
//! - Scheduler: the poll loop and its failure handling
//!
//! The bot requests the same one-month window on every poll, notifies only
//! when the composed status text changes, and reports every failed cycle to
//! the chat before sleeping until the next one.

mod config;
mod repository;
mod scheduler;
mod service;

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Cli, Config};
use crate::repository::{HttpStatusRepository, TelegramMessageRepository};
use crate::scheduler::StatusPoller;
use crate::service::Notifier;
use homework_client::{PracticumClient, TelegramClient};
use homework_core::Cursor;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine; real environment variables still apply.
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "homework_bot=debug,homework_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting homework bot");

    let config = match Cli::parse().into_config() {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration unavailable, shutting down: {:#}", e);
            return Err(e);
        }
    };
    info!(
        "Loaded configuration: endpoint={}, chat_id={}",
        config.endpoint, config.telegram_chat_id
    );

    let mut poller = build_poller(&config)?;

    info!("Bot initialized successfully");
    poller.run().await;

    Ok(())
}

/// Wires clients, repositories and the notifier into a poller
fn build_poller(config: &Config) -> Result<StatusPoller> {
    let http = reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()
        .context("Failed to build HTTP client")?;

    let practicum = PracticumClient::with_client(
        config.endpoint.clone(),
        config.practicum_token.clone(),
        http.clone(),
    );
    let telegram = TelegramClient::with_client(
        config.telegram_api_url.clone(),
        config.telegram_token.clone(),
        http,
    );

    let statuses = Arc::new(HttpStatusRepository::new(practicum));
    let messages = Arc::new(TelegramMessageRepository::new(
        telegram,
        config.telegram_chat_id,
    ));

    Ok(StatusPoller::new(
        statuses,
        Notifier::new(messages),
        Cursor::month_ago(),
        config.retry_period,
    ))
}
