//! Deck settings: content provider and slide-count policy. Loaded from env.

use deckbot_core::ConfigError;
use std::env;
use wiki_client::WikiConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckConfig {
    /// WIKI_LANGUAGE, WIKI_USER_AGENT, WIKI_API_URL
    pub wiki: WikiConfig,
    /// DEFAULT_SLIDE_COUNT: slides (title included) when `/make` has no count
    pub default_slide_count: usize,
    /// MAX_SLIDE_COUNT: optional cap; larger requests are clamped. Unset honors any count.
    pub max_slide_count: Option<usize>,
    /// FLAT_SLIDE_LIMIT: content slides in a deck built from a plain text message
    pub flat_slide_limit: usize,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            wiki: WikiConfig::default(),
            default_slide_count: deck::DEFAULT_SLIDE_COUNT,
            max_slide_count: None,
            flat_slide_limit: deck::FLAT_SLIDE_LIMIT,
        }
    }
}

fn env_opt_usize(key: &'static str) -> Result<Option<usize>, ConfigError> {
    match env::var(key) {
        Ok(raw) => match raw.trim().parse::<usize>() {
            Ok(v) if v > 0 => Ok(Some(v)),
            Ok(_) => Err(ConfigError::invalid(key, raw, "must be greater than zero")),
            Err(e) => Err(ConfigError::invalid(key, raw, e.to_string())),
        },
        Err(_) => Ok(None),
    }
}

fn env_usize(key: &'static str, default: usize) -> Result<usize, ConfigError> {
    Ok(env_opt_usize(key)?.unwrap_or(default))
}

impl DeckConfig {
    /// Load from environment variables; unset keys take the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let language = env::var("WIKI_LANGUAGE")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| WikiConfig::DEFAULT_LANGUAGE.to_string());
        if !language.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(ConfigError::invalid(
                "WIKI_LANGUAGE",
                language,
                "expected a language code such as ru or en",
            ));
        }
        let user_agent = env::var("WIKI_USER_AGENT")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| WikiConfig::DEFAULT_USER_AGENT.to_string());
        let mut wiki = WikiConfig::new(language, user_agent);
        if let Ok(url) = env::var("WIKI_API_URL") {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::invalid("WIKI_API_URL", url, "expected an http(s) URL"));
            }
            wiki = wiki.with_api_url(url);
        }

        let default_slide_count = env_usize("DEFAULT_SLIDE_COUNT", defaults.default_slide_count)?;
        let max_slide_count = env_opt_usize("MAX_SLIDE_COUNT")?;
        let flat_slide_limit = env_usize("FLAT_SLIDE_LIMIT", defaults.flat_slide_limit)?;

        if let Some(max) = max_slide_count {
            if default_slide_count > max {
                return Err(ConfigError::invalid(
                    "DEFAULT_SLIDE_COUNT",
                    default_slide_count.to_string(),
                    format!("exceeds MAX_SLIDE_COUNT ({})", max),
                ));
            }
        }

        Ok(Self {
            wiki,
            default_slide_count,
            max_slide_count,
            flat_slide_limit,
        })
    }
}
