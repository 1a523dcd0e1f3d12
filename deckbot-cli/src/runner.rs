//! Bot entry point: logging, components, handler chain, REPL.

use anyhow::Result;
use deckbot_core::init_tracing;
use deckbot_telegram::run_repl;
use tracing::{info, instrument};

use crate::components::{build_bot_components, build_handler_chain};
use crate::config::BotConfig;

/// Main entry: validate config, init logging, build components and chain, then run the REPL.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(&config.log_file)?;

    info!(
        log_file = %config.log_file,
        allowed_users = config.allowed_user_ids.len(),
        custom_api_url = config.telegram.telegram_api_url.is_some(),
        "Initializing bot"
    );

    let components = build_bot_components(&config, None)?;
    let handler_chain = build_handler_chain(&config, &components);

    info!(handlers = handler_chain.handler_count(), "Bot started successfully");
    run_repl(components.teloxide_bot.clone(), handler_chain).await
}
