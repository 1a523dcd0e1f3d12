//! # deckbot-cli
//!
//! Wires config, components and the handler chain together. `deckbot run` starts the Telegram REPL;
//! `deckbot render` builds a deck locally without Telegram.

pub mod cli;
pub mod components;
pub mod config;
pub mod render;
pub mod runner;

pub use cli::{Cli, Commands};
pub use components::{build_bot_components, build_handler_chain, BotComponents};
pub use config::BotConfig;
pub use render::{render_deck, RenderOptions};
pub use runner::run_bot;
