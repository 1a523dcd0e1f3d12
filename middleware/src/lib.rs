//! # middleware
//!
//! Cross-cutting [`Middleware`](deckbot_core::Middleware) implementations wrapped around the deck
//! handlers: request/response logging and an optional user allowlist.

mod logging_auth;

pub use logging_auth::{AuthMiddleware, LoggingMiddleware};

#[cfg(test)]
mod test;
