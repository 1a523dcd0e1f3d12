//! Telegram connection settings: token and optional API URL. Loaded from env.

use deckbot_core::ConfigError;
use std::env;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelegramConfig {
    /// TOKEN, falling back to BOT_TOKEN
    pub bot_token: String,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
}

impl TelegramConfig {
    /// Load from environment variables. `token` (e.g. from the command line) overrides the env.
    pub fn from_env(token: Option<String>) -> Result<Self, ConfigError> {
        let bot_token = token
            .or_else(|| env::var("TOKEN").ok())
            .or_else(|| env::var("BOT_TOKEN").ok())
            .filter(|t| !t.trim().is_empty())
            .ok_or(ConfigError::Missing("TOKEN"))?;
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok()
            .filter(|s| !s.trim().is_empty());

        let config = Self {
            bot_token,
            telegram_api_url,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_token(bot_token: impl Into<String>) -> Self {
        Self {
            bot_token: bot_token.into(),
            telegram_api_url: None,
        }
    }

    /// telegram_api_url must be a valid URL if set.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(url) = &self.telegram_api_url {
            if let Err(e) = reqwest::Url::parse(url) {
                return Err(ConfigError::invalid("TELEGRAM_API_URL", url.clone(), e.to_string()));
            }
        }
        Ok(())
    }

    /// Builds the teloxide client, pointing it at the custom API URL when one is configured.
    pub fn build_bot(&self) -> Result<teloxide::Bot, ConfigError> {
        let bot = teloxide::Bot::new(self.bot_token.clone());
        match &self.telegram_api_url {
            Some(url) => {
                let url = reqwest::Url::parse(url).map_err(|e| {
                    ConfigError::invalid("TELEGRAM_API_URL", url.clone(), e.to_string())
                })?;
                Ok(bot.set_api_url(url))
            }
            None => Ok(bot),
        }
    }
}
