/*
[INPUT]:  Environment variables and command-line values
[OUTPUT]: API credentials and logging configuration
[POS]:    Configuration layer - startup settings
[UPDATE]: When adding new configuration options
*/

use std::path::PathBuf;

use futures_testnet_adapter::Credentials;

pub const API_KEY_ENV: &str = "BINANCE_TESTNET_API_KEY";
pub const API_SECRET_ENV: &str = "BINANCE_TESTNET_API_SECRET";
pub const DEFAULT_LOG_FILE: &str = "trading_bot.log";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// `EnvFilter` directive, e.g. "info" or "futures_testnet_bot=debug"
    pub level: String,
    /// Append-only log file
    pub file: PathBuf,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

/// Read credentials from the process environment
pub fn credentials_from_env() -> Option<Credentials> {
    credentials_from_lookup(|key| std::env::var(key).ok())
}

/// Both values must be present and non-blank.
pub fn credentials_from_lookup<F>(lookup: F) -> Option<Credentials>
where
    F: Fn(&str) -> Option<String>,
{
    let non_blank = |key: &str| {
        lookup(key)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    };

    let api_key = non_blank(API_KEY_ENV)?;
    let api_secret = non_blank(API_SECRET_ENV)?;
    Some(Credentials::new(api_key, api_secret))
}
