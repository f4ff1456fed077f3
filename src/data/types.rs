//! Data types shared by both collections.
//!
//! These types are serialized to JSON for page and feed consumers.

use serde::Serialize;

/// A tag with the number of times it occurs in a collection,
/// exposed in `tags.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}
