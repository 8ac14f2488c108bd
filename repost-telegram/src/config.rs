//! Minimal bot config: token, API URL, log path.
//! External: loaded from env vars BOT_TOKEN, TELEGRAM_API_URL, LOG_FILE.

use repost_core::{RepostError, Result};
use std::env;

/// Runtime configuration for the repost bot.
pub struct RepostConfig {
    pub bot_token: String,
    pub telegram_api_url: Option<String>,
    pub log_file: Option<String>,
}

impl RepostConfig {
    /// Loads from env vars: BOT_TOKEN required; TELEGRAM_API_URL, LOG_FILE optional.
    pub fn from_env() -> Result<Self> {
        let bot_token =
            env::var("BOT_TOKEN").map_err(|_| RepostError::Config("BOT_TOKEN not set".into()))?;
        let telegram_api_url = env::var("TELEGRAM_API_URL").ok();
        let log_file = env::var("LOG_FILE").ok();
        Ok(Self {
            bot_token,
            telegram_api_url,
            log_file,
        })
    }

    /// Builds a config with the given token and everything else unset.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: None,
            log_file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_token() {
        let config = RepostConfig::with_token("test_token".to_string());
        assert_eq!(config.bot_token, "test_token");
        assert!(config.telegram_api_url.is_none());
        assert!(config.log_file.is_none());
    }
}
