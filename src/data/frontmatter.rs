//! Front-matter parsing for journal posts.
//!
//! A post file starts with a YAML header fenced by `---` lines:
//!
//! ```text
//! ---
//! title: Hello
//! description: First post
//! date: 2024-01-15
//! tags: [rust, notes]
//! ---
//! Body text...
//! ```
//!
//! A leading BOM and CRLF line endings are accepted. A file without the
//! header fence is malformed.

use std::{collections::BTreeMap, path::Path};

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ContentError, Result};

/// Typed post header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostFrontmatter {
    pub title: String,
    pub description: String,

    /// ISO 8601 date string, kept as written
    pub date: String,

    /// Absent or null means no tags
    #[serde(default, deserialize_with = "nullable_seq")]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub draft: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,

    /// Any other header keys, passed through untouched
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

fn nullable_seq<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Split raw file text into `(header, body)`.
///
/// Returns `None` when the text does not open with a `---` line or the
/// header is never closed.
pub fn split(raw: &str) -> Option<(&str, &str)> {
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    let mut lines = raw.split_inclusive('\n');

    let first = lines.next()?;
    if !is_fence(first) {
        return None;
    }

    let header_start = first.len();
    let mut offset = header_start;
    for line in lines {
        if is_fence(line) {
            let header = &raw[header_start..offset];
            let body = &raw[offset + line.len()..];
            return Some((header, body));
        }
        offset += line.len();
    }

    None
}

#[inline]
fn is_fence(line: &str) -> bool {
    line.trim_end() == "---"
}

/// Parse raw post text into its header and body.
///
/// `path` is only used for error reporting.
pub fn parse<'a>(raw: &'a str, path: &Path) -> Result<(PostFrontmatter, &'a str)> {
    let (header, body) =
        split(raw).ok_or_else(|| ContentError::MissingFrontmatter(path.to_path_buf()))?;

    let frontmatter =
        serde_yaml::from_str(header).map_err(|source| ContentError::Frontmatter {
            path: path.to_path_buf(),
            source,
        })?;

    Ok((frontmatter, body))
}
