//! `[content]` section configuration and the draft visibility [`Mode`].

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{env, path::PathBuf};

/// Environment variable that selects the runtime mode.
pub const MODE_ENV_VAR: &str = "CHAPBOOK_ENV";

/// Runtime mode. Drafts are hidden from every query in production.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Production,
    #[default]
    Development,
}

impl Mode {
    /// Read the mode from `CHAPBOOK_ENV`; unset means development.
    pub fn from_env() -> Self {
        Self::from_env_value(env::var(MODE_ENV_VAR).ok().as_deref()).unwrap_or_default()
    }

    /// Interpret a raw environment value. `None` when the variable is unset.
    pub fn from_env_value(value: Option<&str>) -> Option<Self> {
        value.map(|v| {
            if v.trim().eq_ignore_ascii_case("production") {
                Self::Production
            } else {
                Self::Development
            }
        })
    }

    /// Resolve the effective mode: environment first, then config, then default.
    pub fn resolve(configured: Option<Self>) -> Self {
        Self::from_env_value(env::var(MODE_ENV_VAR).ok().as_deref())
            .or(configured)
            .unwrap_or_default()
    }

    #[inline]
    pub const fn hides_drafts(self) -> bool {
        matches!(self, Self::Production)
    }
}

/// `[content]` section in chapbook.toml - where and how posts are read.
///
/// # Example
/// ```toml
/// [content]
/// journal = "content/journal"
/// extension = "mdx"
/// words_per_minute = 200
/// mode = "production"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ContentConfig {
    /// Journal post directory, relative to the site root.
    #[serde(default = "defaults::content::journal")]
    #[educe(Default = defaults::content::journal())]
    pub journal: PathBuf,

    /// Post file extension, without the leading dot.
    #[serde(default = "defaults::content::extension")]
    #[educe(Default = defaults::content::extension())]
    pub extension: String,

    /// Reading speed for reading time estimates.
    #[serde(default = "defaults::content::words_per_minute")]
    #[educe(Default = defaults::content::words_per_minute())]
    pub words_per_minute: u32,

    /// Pinned mode; `CHAPBOOK_ENV` overrides it when set.
    #[serde(default)]
    pub mode: Option<Mode>,
}
