//! # deck-handlers
//!
//! Handlers that turn chat requests into slide decks:
//! - [`StartHandler`]: `/start`, `/help` usage text.
//! - [`MakeDeckHandler`]: `/make <topic> [count]`, chunked deck delivered from a scoped temp file.
//! - [`TopicHandler`]: plain text message as topic, flat deck delivered from memory.
//!
//! All three share a [`DeckAssembler`] (content provider → deck → artifact).

mod assembler;
mod command;
mod config;
mod make_handler;
pub mod messages;
mod start_handler;
mod topic_handler;

pub use assembler::{AssembledDeck, Assembly, DeckAssembler};
pub use command::MakeRequest;
pub use config::DeckConfig;
pub use make_handler::MakeDeckHandler;
pub use start_handler::StartHandler;
pub use topic_handler::TopicHandler;
