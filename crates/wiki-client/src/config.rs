//! Content provider settings: language edition, User-Agent and optional endpoint override.

/// Wikipedia client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WikiConfig {
    /// Language edition code, e.g. `ru` → `https://ru.wikipedia.org`.
    pub language: String,
    /// Identifying User-Agent; Wikimedia rejects anonymous clients.
    pub user_agent: String,
    /// Full URL of an `api.php` endpoint; overrides the URL derived from `language`.
    pub api_url: Option<String>,
}

impl WikiConfig {
    pub const DEFAULT_LANGUAGE: &'static str = "ru";
    pub const DEFAULT_USER_AGENT: &'static str = "deckbot/0.1 (https://github.com/deckbot/deckbot)";

    pub fn new(language: impl Into<String>, user_agent: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            user_agent: user_agent.into(),
            api_url: None,
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = Some(api_url.into());
        self
    }

    /// The `api.php` endpoint requests go to.
    pub fn endpoint(&self) -> String {
        match &self.api_url {
            Some(url) => url.clone(),
            None => format!("https://{}.wikipedia.org/w/api.php", self.language),
        }
    }
}

impl Default for WikiConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LANGUAGE, Self::DEFAULT_USER_AGENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_from_language() {
        let config = WikiConfig::new("en", "agent");
        assert_eq!(config.endpoint(), "https://en.wikipedia.org/w/api.php");
        assert_eq!(WikiConfig::default().endpoint(), "https://ru.wikipedia.org/w/api.php");
    }

    #[test]
    fn test_endpoint_override() {
        let config = WikiConfig::default().with_api_url("http://127.0.0.1:9999/w/api.php");
        assert_eq!(config.endpoint(), "http://127.0.0.1:9999/w/api.php");
    }
}
