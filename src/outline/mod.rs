//! Document outlining: chunk splitting and nested-bullet rendering.
//!
//! Logseq documents are outlines: every block of content is a bullet in a
//! nested list whose nesting mirrors the heading hierarchy. This module
//! re-parses (already rewritten) markdown into typed chunks and re-emits
//! them as an indented outline.

pub mod build;
pub mod split;

pub use build::{outline_chunks, OutlineOptions};
pub use split::{split_into_chunks, Chunk, ChunkKind};

use serde::{Deserialize, Serialize};

/// How a list chunk nests relative to an immediately preceding paragraph.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ListNesting {
    /// Lists stay at the same level as sibling paragraphs.
    None,
    /// Lists nest one level under the preceding paragraph's bullet.
    #[default]
    Paragraph,
    /// Lists nest under a standalone empty bullet after the paragraph.
    Separate,
}

/// Split markdown into chunks and render them as an outline.
pub fn outline_markdown(markdown: &str, options: &OutlineOptions) -> String {
    let chunks = split_into_chunks(markdown);
    outline_chunks(&chunks, options)
}
