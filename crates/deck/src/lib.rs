//! # deck
//!
//! Turns summary text into a slide deck and serializes it as a `.pptx` (PresentationML) package.
//!
//! - [`outline`]: the slide model and the two decomposition policies (chunks of three sentences
//!   across a requested slide count, or one sentence per slide).
//! - [`pptx`]: writes a [`Deck`] to any `Write + Seek` sink as a zip of OOXML parts.
//! - [`artifact`]: transient outputs handed to delivery: a scoped temporary file or a memory buffer.

pub mod artifact;
mod error;
pub mod outline;
pub mod pptx;
mod templates;

pub use artifact::DeckArtifact;
pub use error::DeckError;
pub use outline::{
    build_chunked_deck, build_flat_deck, chunk_sentences, first_sentences, split_sentences, Deck,
    Slide, SlideKind, DEFAULT_SLIDE_COUNT, FLAT_SLIDE_LIMIT, FLAT_SUBTITLE, NO_MORE_INFO,
    SENTENCES_PER_SLIDE, SENTENCE_DELIMITER, TITLE_SUBTITLE,
};
pub use pptx::{write_pptx, SLIDE_HEIGHT_EMU, SLIDE_WIDTH_EMU};
