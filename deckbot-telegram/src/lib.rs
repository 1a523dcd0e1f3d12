//! # deckbot-telegram
//!
//! Telegram layer: adapters to [`deckbot_core`] types, a [`deckbot_core::Bot`] implementation that
//! sends text and documents, connection config, and the REPL runner.
//! Knows nothing about decks or content providers.

mod adapters;
mod bot_adapter;
mod config;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use config::TelegramConfig;
pub use runner::run_repl;
