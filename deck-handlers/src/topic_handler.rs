//! Plain text message as topic: flat deck (one sentence per slide), delivered from memory.

use async_trait::async_trait;
use deckbot_core::{Bot, Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::assembler::{Assembly, DeckAssembler};
use crate::messages;

/// Treats any non-command text as a topic. Commands fall through to later handlers.
pub struct TopicHandler {
    assembler: DeckAssembler,
    bot: Arc<dyn Bot>,
}

impl TopicHandler {
    pub fn new(assembler: DeckAssembler, bot: Arc<dyn Bot>) -> Self {
        Self { assembler, bot }
    }
}

#[async_trait]
impl Handler for TopicHandler {
    #[instrument(skip(self, message), fields(user_id = message.user.id, chat_id = message.chat.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let topic = message.content.trim();
        if topic.is_empty() || topic.starts_with('/') {
            debug!("not a topic message");
            return Ok(HandlerResponse::Continue);
        }

        self.bot
            .send_message(&message.chat, &messages::making_flat(topic))
            .await?;

        let assembled = match self.assembler.assemble_flat(topic).await? {
            Assembly::Ready(assembled) => assembled,
            Assembly::NotFound => {
                info!(topic = %topic, "topic not found");
                self.bot.send_message(&message.chat, messages::NOT_FOUND).await?;
                return Ok(HandlerResponse::Stop);
            }
        };

        let slides = assembled.deck.len();
        let (upload, _temp_file) = assembled.into_upload();
        let file_name = upload.file_name.clone();
        self.bot.send_document(&message.chat, upload).await?;

        info!(topic = %topic, slides, "deck sent");
        Ok(HandlerResponse::Reply(file_name))
    }
}
