//! `/start` and `/help`: reply with usage text.

use async_trait::async_trait;
use deckbot_core::{Bot, Handler, HandlerResponse, Message, Result};
use std::sync::Arc;

use crate::messages;

pub struct StartHandler {
    bot: Arc<dyn Bot>,
}

impl StartHandler {
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Handler for StartHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        match message.command() {
            Some(("start", _)) | Some(("help", _)) => {
                self.bot.reply_to(message, messages::USAGE).await?;
                Ok(HandlerResponse::Stop)
            }
            _ => Ok(HandlerResponse::Continue),
        }
    }
}
