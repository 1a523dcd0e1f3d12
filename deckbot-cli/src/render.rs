//! Offline rendering: fetch, build and write a deck without Telegram.

use anyhow::{Context, Result};
use deck_handlers::{Assembly, DeckAssembler, DeckConfig, MakeRequest};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use wiki_client::{ContentProvider, WikipediaClient};

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub topic: String,
    pub slides: Option<i64>,
    pub flat: bool,
    pub out: Option<PathBuf>,
}

impl RenderOptions {
    pub fn out_path(&self) -> PathBuf {
        self.out
            .clone()
            .unwrap_or_else(|| PathBuf::from(deck_handlers::messages::file_name(&self.topic)))
    }
}

/// Renders a deck for `options.topic` and writes it to [`RenderOptions::out_path`]. Returns the
/// slide titles, or `None` when the topic was not found (nothing is written).
pub async fn render_deck(
    config: &DeckConfig,
    options: &RenderOptions,
) -> Result<Option<Vec<String>>> {
    let provider: Arc<dyn ContentProvider> = Arc::new(WikipediaClient::new(config.wiki.clone())?);
    let assembler = DeckAssembler::new(provider).with_flat_slide_limit(config.flat_slide_limit);

    let assembly = if options.flat {
        assembler.assemble_flat(&options.topic).await?
    } else {
        let request = MakeRequest {
            topic: options.topic.clone(),
            slide_count: options.slides,
        };
        let slide_count =
            request.resolve_slide_count(config.default_slide_count, config.max_slide_count);
        assembler.assemble_chunked(&options.topic, slide_count).await?
    };

    let assembled = match assembly {
        Assembly::Ready(assembled) => assembled,
        Assembly::NotFound => return Ok(None),
    };

    let titles = assembled.deck.titles().map(str::to_string).collect();
    let bytes = assembled.artifact.into_bytes()?;
    let out = options.out_path();
    tokio::fs::write(&out, &bytes)
        .await
        .with_context(|| format!("write {}", out.display()))?;

    info!(path = %out.display(), bytes = bytes.len(), "deck written");
    Ok(Some(titles))
}
