//! Logsidian - convert Obsidian-flavored markdown into Logseq graphs.
//!
//! # Overview
//!
//! Logsidian rewrites Obsidian markdown into Logseq's outline format:
//! - Inline rewrite rules (frontmatter properties, callouts, tasks,
//!   highlights, wiki-links, numbered lists, embeds)
//! - Chunk splitting with unbreakable code/block spans
//! - Outline building driven by the heading hierarchy
//! - Whole-vault migration (journals, pages, assets)
//!
//! # Example
//!
//! ```
//! use logsidian::{convert_document, TranslationConfig};
//!
//! let config = TranslationConfig::default();
//! let page = convert_document("# Inbox\n\n- [ ] sort notes", &config).unwrap();
//! assert_eq!(page, "- # Inbox\n  - TODO sort notes");
//! ```

pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod migrate;
pub mod outline;
pub mod rules;
pub mod types;

pub use config::TranslationConfig;
pub use convert::{convert_document, convert_parts};
pub use error::{ConvertError, Result};
pub use outline::{outline_markdown, ListNesting, OutlineOptions};
