//! Wraps teloxide::Bot and implements [`deckbot_core::Bot`]: text via sendMessage, decks via
//! sendDocument.

use async_trait::async_trait;
use deckbot_core::{Bot as CoreBot, Chat, DeckbotError, DocumentSource, DocumentUpload, Result};
use teloxide::payloads::setters::*;
use teloxide::prelude::*;
use teloxide::types::{ChatId, InputFile};
use tracing::debug;

/// Thin wrapper around teloxide::Bot that implements deckbot-core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

fn input_file(document: DocumentUpload) -> (InputFile, Option<String>) {
    let file = match document.source {
        DocumentSource::Path(path) => InputFile::file(path),
        DocumentSource::Bytes(bytes) => InputFile::memory(bytes),
    };
    (file.file_name(document.file_name), document.caption)
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| DeckbotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn send_document(&self, chat: &Chat, document: DocumentUpload) -> Result<()> {
        debug!(chat_id = chat.id, file_name = %document.file_name, "sending document");
        let (file, caption) = input_file(document);
        let request = self.bot.send_document(ChatId(chat.id), file);
        let request = match caption {
            Some(caption) => request.caption(caption),
            None => request,
        };
        request
            .await
            .map_err(|e| DeckbotError::Bot(e.to_string()))?;
        Ok(())
    }
}
