//! Fetch → decompose → serialize, shared by the deck handlers.

use std::path::PathBuf;
use std::sync::Arc;

use deck::{build_chunked_deck, build_flat_deck, first_sentences, Deck, DeckArtifact};
use deckbot_core::{DeckbotError, DocumentUpload, Result};
use tracing::{info, instrument};
use wiki_client::{ContentProvider, Lookup};

use crate::messages;

/// A deck together with its serialized artifact.
#[derive(Debug)]
pub struct AssembledDeck {
    pub deck: Deck,
    pub artifact: DeckArtifact,
}

impl AssembledDeck {
    /// Document attachment for this deck: `"{topic}.pptx"` with a caption. A memory buffer moves
    /// into the upload. A temp file is referenced by path and comes back as the returned guard,
    /// which must be held until the send completes.
    pub fn into_upload(self) -> (DocumentUpload, Option<DeckArtifact>) {
        let file_name = messages::file_name(&self.deck.topic);
        let caption = messages::caption(&self.deck.topic);
        match self.artifact {
            DeckArtifact::Memory(cursor) => (
                DocumentUpload::from_bytes(file_name, cursor.into_inner()).with_caption(caption),
                None,
            ),
            DeckArtifact::File(file) => {
                let upload =
                    DocumentUpload::from_path(file_name, file.path()).with_caption(caption);
                (upload, Some(DeckArtifact::File(file)))
            }
        }
    }
}

/// Outcome of an assembly request.
#[derive(Debug)]
pub enum Assembly {
    Ready(AssembledDeck),
    /// The content provider has no page for the topic; nothing was produced.
    NotFound,
}

/// Builds decks from content-provider summaries.
#[derive(Clone)]
pub struct DeckAssembler {
    provider: Arc<dyn ContentProvider>,
    temp_dir: PathBuf,
    flat_slide_limit: usize,
}

impl DeckAssembler {
    pub fn new(provider: Arc<dyn ContentProvider>) -> Self {
        Self {
            provider,
            temp_dir: std::env::temp_dir(),
            flat_slide_limit: deck::FLAT_SLIDE_LIMIT,
        }
    }

    /// Directory for temporary `.pptx` files (default: the system temp dir).
    pub fn with_temp_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = dir.into();
        self
    }

    pub fn with_flat_slide_limit(mut self, limit: usize) -> Self {
        self.flat_slide_limit = limit;
        self
    }

    async fn summary(&self, topic: &str) -> Result<Option<String>> {
        match self
            .provider
            .fetch_summary(topic)
            .await
            .map_err(|e| DeckbotError::Provider(e.to_string()))?
        {
            Lookup::Found(summary) => Ok(Some(summary.text)),
            Lookup::NotFound => Ok(None),
        }
    }

    /// Count-driven deck (`slide_count` slides, title included) serialized to a scoped temp file.
    #[instrument(skip(self))]
    pub async fn assemble_chunked(&self, topic: &str, slide_count: usize) -> Result<Assembly> {
        let Some(summary) = self.summary(topic).await? else {
            return Ok(Assembly::NotFound);
        };

        let deck = build_chunked_deck(topic, &summary, slide_count);
        let dir = self.temp_dir.clone();
        let (deck, artifact) = tokio::task::spawn_blocking(move || {
            let artifact = DeckArtifact::to_tempfile_in(&deck, &dir);
            (deck, artifact)
        })
        .await
        .map_err(|e| DeckbotError::Deck(format!("deck writer task failed: {}", e)))?;
        let artifact = artifact.map_err(|e| DeckbotError::Deck(e.to_string()))?;

        info!(
            topic = %topic,
            slides = deck.len(),
            summary_len = summary.len(),
            "step: chunked deck assembled"
        );
        Ok(Assembly::Ready(AssembledDeck { deck, artifact }))
    }

    /// Flat deck (one sentence per slide, at most the configured limit) serialized in memory.
    #[instrument(skip(self))]
    pub async fn assemble_flat(&self, topic: &str) -> Result<Assembly> {
        let Some(summary) = self.summary(topic).await? else {
            return Ok(Assembly::NotFound);
        };

        let sentences = first_sentences(&summary, self.flat_slide_limit);
        let deck = build_flat_deck(topic, &sentences);
        let artifact =
            DeckArtifact::to_memory(&deck).map_err(|e| DeckbotError::Deck(e.to_string()))?;

        info!(
            topic = %topic,
            slides = deck.len(),
            summary_len = summary.len(),
            "step: flat deck assembled"
        );
        Ok(Assembly::Ready(AssembledDeck { deck, artifact }))
    }
}
