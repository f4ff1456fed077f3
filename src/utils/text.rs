//! Text helpers for post bodies and summaries.

use serde::Serialize;

/// Average adult reading speed used for estimates.
pub const DEFAULT_WORDS_PER_MINUTE: u32 = 200;

/// Reading time estimate for a body of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadingTime {
    pub words: usize,
    pub minutes: u32,
    /// Display form, e.g. "3 min read"
    pub text: String,
}

impl ReadingTime {
    /// Estimate reading time: whitespace-separated words over `words_per_minute`,
    /// rounded up to whole minutes.
    pub fn estimate(content: &str, words_per_minute: u32) -> Self {
        let words = content.split_whitespace().count();
        let wpm = words_per_minute.max(1) as usize;
        let minutes = u32::try_from(words.div_ceil(wpm)).unwrap_or(u32::MAX);

        Self {
            words,
            minutes,
            text: format!("{minutes} min read"),
        }
    }
}

/// Truncate text to `max_chars` characters, appending an ellipsis when cut.
pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        None => text.to_owned(),
        Some((end, _)) => format!("{}…", text[..end].trim_end()),
    }
}
