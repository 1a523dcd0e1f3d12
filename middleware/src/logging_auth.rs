//! Request logging and the optional user allowlist.

use async_trait::async_trait;
use deckbot_core::{HandlerError, HandlerResponse, Message, Middleware, Result};
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Logs what each message asks for in before() and how the chain ended in after(). Never stops
/// the chain.
pub struct LoggingMiddleware;

#[async_trait]
impl Middleware for LoggingMiddleware {
    async fn before(&self, message: &Message) -> Result<bool> {
        let username = message.user.username.as_deref().unwrap_or("unknown");
        match message.command() {
            Some((command, args)) => info!(
                user_id = message.user.id,
                chat_id = message.chat.id,
                username = %username,
                command = %command,
                args = %args,
                "command received"
            ),
            None => info!(
                user_id = message.user.id,
                chat_id = message.chat.id,
                username = %username,
                topic = %message.content.trim(),
                "topic received"
            ),
        }
        Ok(true)
    }

    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        match response {
            HandlerResponse::Reply(file_name) => info!(
                user_id = message.user.id,
                file_name = %file_name,
                "request completed with document"
            ),
            HandlerResponse::Stop => debug!(user_id = message.user.id, "request completed"),
            HandlerResponse::Continue => debug!(
                user_id = message.user.id,
                message_id = %message.id,
                "no handler claimed message"
            ),
        }
        Ok(())
    }
}

/// Rejects users outside the allowlist with [`HandlerError::Unauthorized`]. An empty allowlist
/// admits everyone.
pub struct AuthMiddleware {
    allowed_users: HashSet<i64>,
}

impl AuthMiddleware {
    pub fn new(allowed_users: impl IntoIterator<Item = i64>) -> Self {
        Self {
            allowed_users: allowed_users.into_iter().collect(),
        }
    }

    pub fn admits(&self, user_id: i64) -> bool {
        self.allowed_users.is_empty() || self.allowed_users.contains(&user_id)
    }
}

#[async_trait]
impl Middleware for AuthMiddleware {
    async fn before(&self, message: &Message) -> Result<bool> {
        if self.admits(message.user.id) {
            return Ok(true);
        }
        warn!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            "user not in ALLOWED_USER_IDS"
        );
        Err(HandlerError::Unauthorized.into())
    }
}
