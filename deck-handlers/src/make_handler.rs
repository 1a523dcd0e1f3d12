//! `/make <topic> [count]`: chunked deck, delivered from a temporary file.

use async_trait::async_trait;
use deckbot_core::{Bot, Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::assembler::{Assembly, DeckAssembler};
use crate::command::MakeRequest;
use crate::config::DeckConfig;
use crate::messages;

/// Handles `/make`. Sends an acknowledgment, then either the deck document or the not-found text.
pub struct MakeDeckHandler {
    assembler: DeckAssembler,
    bot: Arc<dyn Bot>,
    default_slide_count: usize,
    max_slide_count: Option<usize>,
}

impl MakeDeckHandler {
    pub fn new(assembler: DeckAssembler, bot: Arc<dyn Bot>, config: &DeckConfig) -> Self {
        Self {
            assembler,
            bot,
            default_slide_count: config.default_slide_count,
            max_slide_count: config.max_slide_count,
        }
    }

    async fn make(&self, message: &Message, request: MakeRequest) -> Result<HandlerResponse> {
        let slide_count =
            request.resolve_slide_count(self.default_slide_count, self.max_slide_count);
        if request.exceeds(self.max_slide_count) {
            warn!(
                asked = ?request.slide_count,
                slide_count,
                "slide count clamped to MAX_SLIDE_COUNT"
            );
        }
        let topic = request.topic;

        self.bot
            .send_message(&message.chat, &messages::making_chunked(&topic, slide_count))
            .await?;

        let assembled = match self.assembler.assemble_chunked(&topic, slide_count).await? {
            Assembly::Ready(assembled) => assembled,
            Assembly::NotFound => {
                info!(topic = %topic, "topic not found");
                self.bot.send_message(&message.chat, messages::NOT_FOUND).await?;
                return Ok(HandlerResponse::Stop);
            }
        };

        let slides = assembled.deck.len();
        // The temp file lives until `_temp_file` drops at the end of this scope, even if the send
        // fails.
        let (upload, _temp_file) = assembled.into_upload();
        let file_name = upload.file_name.clone();
        self.bot.send_document(&message.chat, upload).await?;

        info!(user_id = message.user.id, topic = %topic, slides, "deck sent");
        Ok(HandlerResponse::Reply(file_name))
    }
}

#[async_trait]
impl Handler for MakeDeckHandler {
    #[instrument(skip(self, message), fields(user_id = message.user.id, chat_id = message.chat.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let args = match message.command() {
            Some(("make", args)) => args,
            _ => return Ok(HandlerResponse::Continue),
        };

        match MakeRequest::parse(args) {
            Some(request) => self.make(message, request).await,
            None => {
                self.bot.reply_to(message, messages::NEED_TOPIC).await?;
                Ok(HandlerResponse::Stop)
            }
        }
    }
}
