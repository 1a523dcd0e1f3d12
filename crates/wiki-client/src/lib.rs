//! # wiki-client
//!
//! Defines the [`ContentProvider`] trait (topic → summary lookup) and a Wikipedia implementation
//! backed by the MediaWiki action API. Used by deck-handlers to fetch the text a deck is built from.

mod config;
mod error;
mod wikipedia;

use async_trait::async_trait;

pub use config::WikiConfig;
pub use error::WikiError;
pub use wikipedia::WikipediaClient;

/// Plain-text synopsis of a topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Canonical page title reported by the provider (after redirects).
    pub title: String,
    pub text: String,
}

/// Outcome of a single lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Found(Summary),
    NotFound,
}

/// Encyclopedia lookup interface: one best-effort call per topic, no retry and no caching.
#[async_trait]
pub trait ContentProvider: Send + Sync {
    /// Looks up `topic` by exact title and returns its summary, or [`Lookup::NotFound`] when the page
    /// does not exist. Transport failures are errors, never `NotFound`.
    async fn fetch_summary(&self, topic: &str) -> Result<Lookup, WikiError>;
}
