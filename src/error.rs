//! Content error types.
//!
//! Query operations never return these: a missing record is `None` and a
//! broken file is skipped. They surface from the single-record loaders and
//! from registry validation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating content records.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("`{0}` has no front-matter block")]
    MissingFrontmatter(PathBuf),

    #[error("front-matter of `{path}` is malformed")]
    Frontmatter {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid date `{0}`")]
    InvalidDate(String),

    #[error("duplicate slug `{0}`")]
    DuplicateSlug(String),

    #[error("invalid slug `{0}`")]
    InvalidSlug(String),

    #[error("record `{slug}` has an empty `{field}`")]
    EmptyField { slug: String, field: &'static str },
}

pub type Result<T, E = ContentError> = std::result::Result<T, E>;
