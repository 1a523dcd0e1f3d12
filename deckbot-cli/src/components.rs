//! Component factory: builds BotComponents from config and assembles the handler chain.

use anyhow::Result;
use deck_handlers::{DeckAssembler, MakeDeckHandler, StartHandler, TopicHandler};
use deckbot_core::Bot;
use deckbot_telegram::TelegramBotAdapter;
use handler_chain::HandlerChain;
use middleware::{AuthMiddleware, LoggingMiddleware};
use std::sync::Arc;
use tracing::{info, instrument};
use wiki_client::{ContentProvider, WikipediaClient};

use crate::config::BotConfig;

/// Dependencies shared by the handlers.
#[derive(Clone)]
pub struct BotComponents {
    pub teloxide_bot: teloxide::Bot,
    /// Outbound delivery used by handlers; a TelegramBotAdapter unless overridden in tests.
    pub handler_bot: Arc<dyn Bot>,
    pub provider: Arc<dyn ContentProvider>,
}

/// Builds BotComponents. When `handler_bot_override` is `Some`, handlers send through it instead of
/// Telegram.
#[instrument(skip(config, handler_bot_override))]
pub fn build_bot_components(
    config: &BotConfig,
    handler_bot_override: Option<Arc<dyn Bot>>,
) -> Result<BotComponents> {
    let teloxide_bot = config.telegram.build_bot()?;
    let handler_bot: Arc<dyn Bot> = match handler_bot_override {
        Some(bot) => bot,
        None => Arc::new(TelegramBotAdapter::new(teloxide_bot.clone())),
    };
    let provider: Arc<dyn ContentProvider> =
        Arc::new(WikipediaClient::new(config.deck.wiki.clone())?);

    info!(
        wiki_endpoint = %config.deck.wiki.endpoint(),
        default_slide_count = config.deck.default_slide_count,
        max_slide_count = ?config.deck.max_slide_count,
        "components built"
    );

    Ok(BotComponents {
        teloxide_bot,
        handler_bot,
        provider,
    })
}

/// Builds the handler chain: logging → auth, then /start → /make → plain topic.
pub fn build_handler_chain(config: &BotConfig, components: &BotComponents) -> HandlerChain {
    let assembler = DeckAssembler::new(components.provider.clone())
        .with_flat_slide_limit(config.deck.flat_slide_limit);

    HandlerChain::new()
        .add_middleware(Arc::new(LoggingMiddleware))
        .add_middleware(Arc::new(AuthMiddleware::new(config.allowed_user_ids.clone())))
        .add_handler(Arc::new(StartHandler::new(components.handler_bot.clone())))
        .add_handler(Arc::new(MakeDeckHandler::new(
            assembler.clone(),
            components.handler_bot.clone(),
            &config.deck,
        )))
        .add_handler(Arc::new(TopicHandler::new(
            assembler,
            components.handler_bot.clone(),
        )))
}
