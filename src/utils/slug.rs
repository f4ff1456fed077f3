//! Slug derivation and validation.
//!
//! Post slugs come from file names; chapter slugs are written by hand.
//! Both must be a single URL path segment.

use regex::Regex;
use std::{path::Path, sync::LazyLock};

/// Characters forbidden in a slug used as a path segment
const FORBIDDEN_CHARS: &[char] = &[
    '/', '\\', '<', '>', ':', '|', '?', '*', '#', '"', '\t', '\r', '\n',
];

static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s-]").unwrap());
static SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s_-]+").unwrap());

/// Convert free text to a URL slug.
///
/// Transliterates to ASCII, lowercases, drops punctuation and collapses
/// whitespace, underscores and hyphens into single hyphens.
///
/// ```ignore
/// assert_eq!(slugify("  Hello, World!  "), "hello-world");
/// ```
pub fn slugify(text: &str) -> String {
    let ascii = deunicode::deunicode(text).to_lowercase();
    let stripped = NON_WORD.replace_all(ascii.trim(), "");
    let joined = SEPARATORS.replace_all(&stripped, "-");
    joined.trim_matches('-').to_owned()
}

/// Check that a slug is usable as a single path segment.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug != "."
        && slug != ".."
        && slug.trim() == slug
        && !slug.contains(FORBIDDEN_CHARS)
}

/// Derive a slug from a file path with the given extension.
///
/// Returns `None` when the extension does not match (case-sensitive, as
/// the file system is) or the stem is not a valid slug.
///
/// | Path | Extension | Slug |
/// |------|-----------|------|
/// | `journal/hello-world.mdx` | `mdx` | `Some("hello-world")` |
/// | `journal/notes.md` | `mdx` | `None` |
/// | `journal/.mdx` | `mdx` | `None` |
pub fn slug_from_path(path: &Path, extension: &str) -> Option<String> {
    if path.extension()? != extension {
        return None;
    }
    let stem = path.file_stem()?.to_str()?;
    is_valid_slug(stem).then(|| stem.to_owned())
}
