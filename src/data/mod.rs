//! Content collections: the chapter registry and the journal.
//!
//! # Collections
//!
//! ```text
//! ┌──────────────────────────┐      ┌──────────────────────────────┐
//! │ ChapterRegistry          │      │ JournalStore                 │
//! │ (compiled in, immutable) │      │ (<journal>/*.mdx, re-read on │
//! │                          │      │  every query)                │
//! └────────────┬─────────────┘      └──────────────┬───────────────┘
//!              │                                   │
//!              │          query::Entry             │ CachedJournal
//!              └───────────────┬───────────────────┘ (snapshot + refresh)
//!                              ▼
//!              sort_newest_first / with_tag / count_tags
//!                              │
//!                              ▼
//!                    export: /_data/*.json
//! ```
//!
//! Both collections sort newest first, filter tags by exact match and
//! count tags the same way, through [`query`].

mod cache;
mod chapters;
pub mod export;
pub mod frontmatter;
mod journal;
pub mod query;
mod registry;
mod types;

pub use cache::CachedJournal;
pub use chapters::{Chapter, ChapterLinks, ChapterRegistry};
pub use frontmatter::PostFrontmatter;
pub use journal::{JournalStore, Post, PostMeta};
pub use query::Entry;
pub use registry::CHAPTERS;
pub use types::TagCount;
