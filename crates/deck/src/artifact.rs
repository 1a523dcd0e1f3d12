//! Transient deck artifacts handed to the delivery step.
//!
//! [`DeckArtifact::File`] owns a [`NamedTempFile`]: the file is removed when the artifact is dropped,
//! whichever way the request ends. [`DeckArtifact::Memory`] never touches the disk.

use std::io::{Cursor, Read, Seek, SeekFrom, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::DeckError;
use crate::outline::Deck;
use crate::pptx::write_pptx;

const TEMP_PREFIX: &str = "deck-";
const TEMP_SUFFIX: &str = ".pptx";

#[derive(Debug)]
pub enum DeckArtifact {
    File(NamedTempFile),
    Memory(Cursor<Vec<u8>>),
}

impl DeckArtifact {
    /// Serializes `deck` into a new `deck-<random>.pptx` inside `dir`.
    pub fn to_tempfile_in(deck: &Deck, dir: &Path) -> Result<Self, DeckError> {
        let mut file = tempfile::Builder::new()
            .prefix(TEMP_PREFIX)
            .suffix(TEMP_SUFFIX)
            .tempfile_in(dir)?;
        write_pptx(deck, file.as_file_mut())?;
        file.as_file_mut().flush()?;
        debug!(path = %file.path().display(), slides = deck.len(), "deck written to temp file");
        Ok(Self::File(file))
    }

    /// Serializes `deck` into a memory buffer positioned at its start.
    pub fn to_memory(deck: &Deck) -> Result<Self, DeckError> {
        let mut cursor = write_pptx(deck, Cursor::new(Vec::new()))?;
        cursor.set_position(0);
        Ok(Self::Memory(cursor))
    }

    /// Path of the backing temp file, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            DeckArtifact::File(file) => Some(file.path()),
            DeckArtifact::Memory(_) => None,
        }
    }

    /// Reads the whole package from the start.
    pub fn read_bytes(&mut self) -> Result<Vec<u8>, DeckError> {
        let mut out = Vec::new();
        match self {
            DeckArtifact::File(file) => {
                let f = file.as_file_mut();
                f.seek(SeekFrom::Start(0))?;
                f.read_to_end(&mut out)?;
            }
            DeckArtifact::Memory(cursor) => {
                cursor.set_position(0);
                cursor.read_to_end(&mut out)?;
                cursor.set_position(0);
            }
        }
        Ok(out)
    }

    /// Consumes a memory artifact into its buffer; file artifacts are read and then deleted.
    pub fn into_bytes(self) -> Result<Vec<u8>, DeckError> {
        match self {
            DeckArtifact::Memory(cursor) => Ok(cursor.into_inner()),
            mut file @ DeckArtifact::File(_) => file.read_bytes(),
        }
    }
}
