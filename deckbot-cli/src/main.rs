//! deckbot: run the Telegram bot, or render a deck locally.

use anyhow::Result;
use clap::Parser;
use deck_handlers::{messages, DeckConfig};
use deckbot_cli::{render_deck, run_bot, BotConfig, Cli, Commands, RenderOptions};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = BotConfig::load(token)?;
            run_bot(config).await
        }
        Commands::Render {
            topic,
            slides,
            flat,
            out,
        } => handle_render(topic.join(" "), slides, flat, out).await,
    }
}

async fn handle_render(
    topic: String,
    slides: Option<i64>,
    flat: bool,
    out: Option<std::path::PathBuf>,
) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string()))
        .with_target(false)
        .init();

    let config = DeckConfig::from_env()?;
    let options = RenderOptions {
        topic,
        slides,
        flat,
        out,
    };

    match render_deck(&config, &options).await? {
        Some(titles) => {
            for (i, title) in titles.iter().enumerate() {
                println!("{:>3}. {}", i + 1, title);
            }
            println!("Written: {}", options.out_path().display());
            Ok(())
        }
        None => anyhow::bail!(messages::NOT_FOUND),
    }
}
