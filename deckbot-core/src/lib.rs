//! # deckbot-core
//!
//! Core types and traits for the deck bot: [`Bot`], [`Handler`], [`Middleware`], message and user types,
//! error types and tracing initialization. Transport-agnostic; used by deckbot-telegram, handler-chain
//! and deck-handlers.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::{Bot, DocumentSource, DocumentUpload};
pub use error::{ConfigError, DeckbotError, HandlerError, Result};
pub use logger::init_tracing;
pub use types::{
    Chat, Handler, HandlerResponse, Message, Middleware, ToCoreMessage,
    ToCoreUser, User,
};
