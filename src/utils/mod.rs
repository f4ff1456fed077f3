//! Helpers shared by the content collections.

pub mod date;
pub mod slug;
pub mod text;
