//! Bot configuration
//!
//! Command-line flags (each backed by an environment variable) and the
//! validated configuration the rest of the bot runs on.

use std::time::Duration;

use clap::Parser;
use homework_client::{DEFAULT_PRACTICUM_ENDPOINT, DEFAULT_TELEGRAM_API_URL};

/// Chat that receives notifications unless overridden
pub const DEFAULT_CHAT_ID: i64 = 5970585663;

/// Seconds between two polls of the review API
pub const DEFAULT_RETRY_PERIOD_SECS: u64 = 600;

/// Upper bound on a single HTTP request, in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Parser, Debug)]
#[command(name = "homework-bot")]
#[command(about = "Forwards Practicum homework review status changes to Telegram", long_about = None)]
pub struct Cli {
    /// Practicum OAuth token
    #[arg(long, env = "PRACTICUM_TOKEN", hide_env_values = true)]
    pub practicum_token: Option<String>,

    /// Telegram bot token
    #[arg(long, env = "TELEGRAM_TOKEN", hide_env_values = true)]
    pub telegram_token: Option<String>,

    /// Telegram chat that receives notifications
    #[arg(
        long,
        env = "TELEGRAM_CHAT_ID",
        default_value_t = DEFAULT_CHAT_ID,
        allow_negative_numbers = true
    )]
    pub telegram_chat_id: i64,

    /// Homework statuses endpoint
    #[arg(long, env = "PRACTICUM_ENDPOINT", default_value = DEFAULT_PRACTICUM_ENDPOINT)]
    pub endpoint: String,

    /// Telegram Bot API base URL
    #[arg(long, env = "TELEGRAM_API_URL", default_value = DEFAULT_TELEGRAM_API_URL)]
    pub telegram_api_url: String,

    /// Seconds to wait between polls
    #[arg(long, env = "RETRY_PERIOD", default_value_t = DEFAULT_RETRY_PERIOD_SECS)]
    pub retry_period: u64,

    /// HTTP request timeout in seconds
    #[arg(long, env = "REQUEST_TIMEOUT", default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    pub request_timeout: u64,
}

impl Cli {
    /// Turns parsed flags into a validated configuration
    ///
    /// Fails naming every missing credential at once.
    pub fn into_config(self) -> anyhow::Result<Config> {
        let practicum_token = self.practicum_token.filter(|t| !t.is_empty());
        let telegram_token = self.telegram_token.filter(|t| !t.is_empty());

        let mut missing = Vec::new();
        if practicum_token.is_none() {
            missing.push("PRACTICUM_TOKEN");
        }
        if telegram_token.is_none() {
            missing.push("TELEGRAM_TOKEN");
        }
        if self.telegram_chat_id == 0 {
            missing.push("TELEGRAM_CHAT_ID");
        }
        if !missing.is_empty() {
            anyhow::bail!(
                "Missing required environment variables: {}",
                missing.join(", ")
            );
        }

        let mut config = Config::new(
            practicum_token.unwrap_or_default(),
            telegram_token.unwrap_or_default(),
            self.telegram_chat_id,
        );
        config.endpoint = self.endpoint;
        config.telegram_api_url = self.telegram_api_url;
        config.retry_period = Duration::from_secs(self.retry_period);
        config.request_timeout = Duration::from_secs(self.request_timeout);
        config.validate()?;
        Ok(config)
    }
}

/// Bot configuration
///
/// Loaded once at startup and read-only afterwards.
#[derive(Clone)]
pub struct Config {
    /// Practicum OAuth token
    pub practicum_token: String,

    /// Telegram bot token
    pub telegram_token: String,

    /// Chat that receives every notification
    pub telegram_chat_id: i64,

    /// Homework statuses endpoint
    pub endpoint: String,

    /// Telegram Bot API base URL
    pub telegram_api_url: String,

    /// Pause between two polls
    pub retry_period: Duration,

    /// Upper bound on a single HTTP request
    pub request_timeout: Duration,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("endpoint", &self.endpoint)
            .field("telegram_api_url", &self.telegram_api_url)
            .field("retry_period", &self.retry_period)
            .field("request_timeout", &self.request_timeout)
            .finish_non_exhaustive()
    }
}

impl Config {
    /// Creates a configuration with default endpoints and intervals
    pub fn new(practicum_token: String, telegram_token: String, telegram_chat_id: i64) -> Self {
        Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            endpoint: DEFAULT_PRACTICUM_ENDPOINT.to_string(),
            telegram_api_url: DEFAULT_TELEGRAM_API_URL.to_string(),
            retry_period: Duration::from_secs(DEFAULT_RETRY_PERIOD_SECS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.practicum_token.is_empty() {
            anyhow::bail!("practicum_token cannot be empty");
        }

        if self.telegram_token.is_empty() {
            anyhow::bail!("telegram_token cannot be empty");
        }

        if self.telegram_chat_id == 0 {
            anyhow::bail!("telegram_chat_id cannot be 0");
        }

        for (name, url) in [
            ("endpoint", &self.endpoint),
            ("telegram_api_url", &self.telegram_api_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                anyhow::bail!("{} must start with http:// or https://", name);
            }
        }

        if self.retry_period.is_zero() {
            anyhow::bail!("retry_period must be greater than 0");
        }

        if self.request_timeout.is_zero() {
            anyhow::bail!("request_timeout must be greater than 0");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("homework-bot").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = Config::new("p".to_string(), "t".to_string(), DEFAULT_CHAT_ID);
        assert_eq!(config.retry_period, Duration::from_secs(600));
        assert_eq!(config.endpoint, DEFAULT_PRACTICUM_ENDPOINT);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::new("p".to_string(), "t".to_string(), 1);
        assert!(config.validate().is_ok());

        config.telegram_token = String::new();
        assert!(config.validate().is_err());
        config.telegram_token = "t".to_string();

        config.endpoint = "not-a-url".to_string();
        assert!(config.validate().is_err());
        config.endpoint = "http://localhost:8080/statuses/".to_string();
        assert!(config.validate().is_ok());

        config.retry_period = Duration::ZERO;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_cli_into_config() {
        let config = parse(&[
            "--practicum-token",
            "p",
            "--telegram-token",
            "t",
            "--telegram-chat-id",
            "42",
            "--retry-period",
            "5",
        ])
        .into_config()
        .unwrap();

        assert_eq!(config.practicum_token, "p");
        assert_eq!(config.telegram_chat_id, 42);
        assert_eq!(config.retry_period, Duration::from_secs(5));
        assert_eq!(config.telegram_api_url, DEFAULT_TELEGRAM_API_URL);
    }

    #[test]
    fn test_cli_accepts_group_chat_id() {
        let config = parse(&[
            "--practicum-token",
            "p",
            "--telegram-token",
            "t",
            "--telegram-chat-id",
            "-1001234567890",
        ])
        .into_config()
        .unwrap();

        assert_eq!(config.telegram_chat_id, -1001234567890);
    }

    #[test]
    fn test_cli_reports_every_missing_credential() {
        let cli = Cli {
            practicum_token: None,
            telegram_token: Some(String::new()),
            telegram_chat_id: DEFAULT_CHAT_ID,
            endpoint: DEFAULT_PRACTICUM_ENDPOINT.to_string(),
            telegram_api_url: DEFAULT_TELEGRAM_API_URL.to_string(),
            retry_period: DEFAULT_RETRY_PERIOD_SECS,
            request_timeout: DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        let err = cli.into_config().unwrap_err().to_string();
        assert!(err.contains("PRACTICUM_TOKEN"));
        assert!(err.contains("TELEGRAM_TOKEN"));
        assert!(!err.contains("TELEGRAM_CHAT_ID"));
    }

    #[test]
    fn test_debug_hides_tokens() {
        let config = Config::new("p-secret".to_string(), "t-secret".to_string(), 1);
        let debug = format!("{:?}", config);
        assert!(!debug.contains("secret"));
    }
}
