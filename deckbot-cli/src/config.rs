//! Bot configuration: Telegram connection, deck settings, logging and the user allowlist.

use anyhow::Result;
use deck_handlers::DeckConfig;
use deckbot_core::ConfigError;
use deckbot_telegram::TelegramConfig;
use std::env;

#[derive(Debug, Clone)]
pub struct BotConfig {
    pub telegram: TelegramConfig,
    pub deck: DeckConfig,
    /// LOG_FILE
    pub log_file: String,
    /// ALLOWED_USER_IDS: comma-separated Telegram user ids; empty admits everyone
    pub allowed_user_ids: Vec<i64>,
}

pub const DEFAULT_LOG_FILE: &str = "logs/deckbot.log";

fn parse_user_ids(raw: &str) -> Result<Vec<i64>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<i64>()
                .map_err(|e| ConfigError::invalid("ALLOWED_USER_IDS", raw, e.to_string()))
        })
        .collect()
}

impl BotConfig {
    /// Load from environment variables. `token` overrides TOKEN / BOT_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let telegram = TelegramConfig::from_env(token)?;
        let deck = DeckConfig::from_env()?;
        let log_file = env::var("LOG_FILE")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());
        let allowed_user_ids = match env::var("ALLOWED_USER_IDS") {
            Ok(raw) => parse_user_ids(&raw)?,
            Err(_) => Vec::new(),
        };

        Ok(Self {
            telegram,
            deck,
            log_file,
            allowed_user_ids,
        })
    }

    pub fn validate(&self) -> Result<()> {
        self.telegram.validate()?;
        if let Some(max) = self.deck.max_slide_count {
            if self.deck.default_slide_count > max {
                anyhow::bail!(
                    "DEFAULT_SLIDE_COUNT ({}) exceeds MAX_SLIDE_COUNT ({})",
                    self.deck.default_slide_count,
                    max
                );
            }
        }
        Ok(())
    }
}
