//! Wikipedia content provider over the MediaWiki action API (`prop=extracts`).

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::{ContentProvider, Lookup, Summary, WikiConfig, WikiError};

/// Looks up page intros on a Wikipedia language edition.
#[derive(Debug, Clone)]
pub struct WikipediaClient {
    client: Client,
    config: WikiConfig,
}

impl WikipediaClient {
    /// Creates a client that sends `config.user_agent` on every request.
    pub fn new(config: WikiConfig) -> Result<Self, WikiError> {
        let client = Client::builder().user_agent(&config.user_agent).build()?;
        Ok(Self { client, config })
    }
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    query: Option<Query>,
    #[serde(default)]
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    code: String,
    #[serde(default)]
    info: String,
}

#[derive(Debug, Deserialize)]
struct Query {
    #[serde(default)]
    pages: Vec<Page>,
}

#[derive(Debug, Deserialize)]
struct Page {
    #[serde(default)]
    title: String,
    #[serde(default)]
    missing: bool,
    #[serde(default)]
    invalid: bool,
    #[serde(default)]
    extract: Option<String>,
}

impl QueryResponse {
    fn into_lookup(self) -> Result<Lookup, WikiError> {
        if let Some(err) = self.error {
            return Err(WikiError::Query {
                code: err.code,
                info: err.info,
            });
        }
        let page = match self.query.and_then(|q| q.pages.into_iter().next()) {
            Some(page) => page,
            None => return Ok(Lookup::NotFound),
        };
        if page.missing || page.invalid {
            return Ok(Lookup::NotFound);
        }
        let text = page
            .extract
            .ok_or_else(|| WikiError::Decode(format!("page {:?} has no extract", page.title)))?;
        Ok(Lookup::Found(Summary {
            title: page.title,
            text: text.trim().to_string(),
        }))
    }
}

#[async_trait]
impl ContentProvider for WikipediaClient {
    #[instrument(skip(self), fields(language = %self.config.language))]
    async fn fetch_summary(&self, topic: &str) -> Result<Lookup, WikiError> {
        let endpoint = self.config.endpoint();
        info!(topic = %topic, endpoint = %endpoint, "step: wikipedia lookup request");

        let response = self
            .client
            .get(&endpoint)
            .query(&[
                ("action", "query"),
                ("prop", "extracts"),
                ("exintro", "1"),
                ("explaintext", "1"),
                ("redirects", "1"),
                ("format", "json"),
                ("formatversion", "2"),
                ("titles", topic),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(WikiError::Api { status, body });
        }

        let body = response.text().await?;
        let parsed: QueryResponse = serde_json::from_str(&body)
            .map_err(|e| WikiError::Decode(format!("{}: {}", e, body)))?;
        let lookup = parsed.into_lookup()?;

        match &lookup {
            Lookup::Found(summary) => info!(
                topic = %topic,
                title = %summary.title,
                summary_len = summary.text.len(),
                "step: wikipedia lookup done"
            ),
            Lookup::NotFound => info!(topic = %topic, "step: wikipedia page does not exist"),
        }
        Ok(lookup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<Lookup, WikiError> {
        serde_json::from_str::<QueryResponse>(json).unwrap().into_lookup()
    }

    #[test]
    fn test_found_page_trims_extract() {
        let lookup = parse(
            r#"{"batchcomplete":true,"query":{"pages":[{"pageid":1,"ns":0,"title":"Рим","extract":"Рим — столица Италии. Основан в 753 году до н. э.\n"}]}}"#,
        )
        .unwrap();
        assert_eq!(
            lookup,
            Lookup::Found(Summary {
                title: "Рим".to_string(),
                text: "Рим — столица Италии. Основан в 753 году до н. э.".to_string(),
            })
        );
    }

    #[test]
    fn test_missing_and_invalid_pages_are_not_found() {
        let missing = parse(r#"{"query":{"pages":[{"ns":0,"title":"Xyzzy","missing":true}]}}"#);
        assert_eq!(missing.unwrap(), Lookup::NotFound);
        let invalid = parse(
            r#"{"query":{"pages":[{"title":"<>","invalidreason":"bad title","invalid":true}]}}"#,
        );
        assert_eq!(invalid.unwrap(), Lookup::NotFound);
    }

    #[test]
    fn test_no_pages_is_not_found() {
        assert_eq!(parse(r#"{"batchcomplete":true}"#).unwrap(), Lookup::NotFound);
    }

    #[test]
    fn test_api_error_is_error() {
        let err =
            parse(r#"{"error":{"code":"badvalue","info":"Unrecognized value"}}"#).unwrap_err();
        assert!(matches!(err, WikiError::Query { ref code, .. } if code == "badvalue"));
    }

    #[test]
    fn test_existing_page_without_extract_is_error() {
        let err = parse(r#"{"query":{"pages":[{"pageid":3,"ns":0,"title":"Rome"}]}}"#).unwrap_err();
        assert!(matches!(err, WikiError::Decode(_)));
    }
}
