//! Bot abstraction for sending messages and documents.
//!
//! [`Bot`] is transport-agnostic; deckbot-telegram implements it via teloxide and tests substitute
//! a recording mock.

use crate::error::Result;
use crate::types::{Chat, Message};
use async_trait::async_trait;
use std::path::PathBuf;

/// Where the bytes of an outgoing document come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    /// A file on disk. The caller keeps the file alive until `send_document` returns.
    Path(PathBuf),
    /// An in-memory buffer.
    Bytes(Vec<u8>),
}

/// A document attachment: file name shown to the user, content and optional caption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentUpload {
    pub file_name: String,
    pub source: DocumentSource,
    pub caption: Option<String>,
}

impl DocumentUpload {
    pub fn from_path(file_name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            file_name: file_name.into(),
            source: DocumentSource::Path(path.into()),
            caption: None,
        }
    }

    pub fn from_bytes(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            source: DocumentSource::Bytes(bytes),
            caption: None,
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}

/// Abstraction for outbound delivery. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends a reply to the given message (same chat).
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }
    /// Sends a document attachment to the given chat.
    async fn send_document(&self, chat: &Chat, document: DocumentUpload) -> Result<()>;
}
