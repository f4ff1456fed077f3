//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// [site] Section Defaults
// ============================================================================

pub mod site {
    pub fn url() -> Option<String> {
        None
    }

    pub fn author() -> String {
        "<YOUR_NAME>".into()
    }

    pub fn email() -> String {
        "user@noreply.chapbook".into()
    }

    pub fn language() -> String {
        "en-US".into()
    }
}

// ============================================================================
// [content] Section Defaults
// ============================================================================

pub mod content {
    use std::path::PathBuf;

    use crate::utils::text::DEFAULT_WORDS_PER_MINUTE;

    pub fn journal() -> PathBuf {
        "content/journal".into()
    }

    pub fn extension() -> String {
        "mdx".into()
    }

    pub fn words_per_minute() -> u32 {
        DEFAULT_WORDS_PER_MINUTE
    }
}
