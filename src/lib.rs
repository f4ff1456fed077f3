//! chapbook - content collections for a portfolio and journal site.
//!
//! Two collections back the site's pages:
//!
//! - **Chapters**: long-form project write-ups compiled into the crate,
//!   served by [`ChapterRegistry`].
//! - **Journal**: dated posts read from a directory of front-matter files,
//!   served by [`JournalStore`] (or [`CachedJournal`] for a load-once view).
//!
//! ```no_run
//! use chapbook::Site;
//! use std::path::Path;
//!
//! let site = Site::load(Path::new("."))?;
//! for post in site.journal().list_all() {
//!     println!("{} ({})", post.frontmatter.title, post.reading_time);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod logger;
pub mod site;
pub mod utils;

pub use config::{Mode, SiteConfig};
pub use data::{
    CachedJournal, Chapter, ChapterLinks, ChapterRegistry, JournalStore, Post, PostFrontmatter,
    PostMeta, TagCount,
};
pub use error::ContentError;
pub use site::Site;
