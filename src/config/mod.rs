//! Site configuration management for `chapbook.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                         |
//! |-------------|-------------------------------------------------|
//! | `[site]`    | Site metadata (name, title, author, url)        |
//! | `[content]` | Journal directory, extension, reading speed, mode |
//! | `[extra]`   | User-defined custom fields                      |
//!
//! # Example
//!
//! ```toml
//! [site]
//! name = "Alice Example"
//! description = "Projects and notes"
//! url = "https://alice.dev"
//!
//! [content]
//! journal = "content/journal"
//! extension = "mdx"
//!
//! [extra]
//! twitter = "@alice"
//! ```

mod content;
pub mod defaults;
mod error;
mod site;

pub use content::{ContentConfig, MODE_ENV_VAR, Mode};
pub use error::ConfigError;
pub use site::SiteInfo;

use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

/// Config file name looked up in the site root.
pub const CONFIG_FILE: &str = "chapbook.toml";

/// Root configuration structure representing chapbook.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Basic site information
    #[serde(default)]
    pub site: SiteInfo,

    /// Content sources
    #[serde(default)]
    pub content: ContentConfig,

    /// User-defined extra fields
    #[serde(default)]
    pub extra: HashMap<String, toml::Value>,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let mut config = Self::from_str(&content)?;
        config.config_path = normalize_path(path);
        Ok(config)
    }

    /// Load `chapbook.toml` from `root`, falling back to defaults when absent.
    ///
    /// Relative content paths are resolved against `root`.
    pub fn load(root: &Path) -> Result<Self> {
        let config_path = root.join(CONFIG_FILE);
        let mut config = if config_path.exists() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };

        config.content.journal = normalize_path(&root.join(&config.content.journal));
        config.validate()?;
        Ok(config)
    }

    /// Journal post directory.
    pub fn journal_dir(&self) -> &Path {
        &self.content.journal
    }

    /// Effective mode: `CHAPBOOK_ENV` when set, else `[content] mode`, else development.
    pub fn mode(&self) -> Mode {
        Mode::resolve(self.content.mode)
    }

    /// Validate field values that serde cannot check.
    pub fn validate(&self) -> Result<()> {
        if let Some(url) = &self.site.url
            && !url.starts_with("http")
        {
            bail!(ConfigError::Validation(
                "[site.url] must start with http:// or https://".into()
            ));
        }

        let ext = &self.content.extension;
        if ext.is_empty() {
            bail!(ConfigError::Validation("[content.extension] must not be empty".into()));
        }
        if ext.starts_with('.') || ext.contains(['/', '\\']) {
            bail!(ConfigError::Validation(format!(
                "[content.extension] must be a bare extension like \"mdx\", got {ext:?}"
            )));
        }

        if self.content.words_per_minute == 0 {
            bail!(ConfigError::Validation(
                "[content.words_per_minute] must be greater than zero".into()
            ));
        }

        Ok(())
    }
}

/// Normalize a path to absolute, using canonicalize if the path exists
fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        // For non-existent paths, manually make them absolute
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir()
                .map(|cwd| cwd.join(path))
                .unwrap_or_else(|_| path.to_path_buf())
        }
    })
}

// ============================================================================
// Tests
// ============================================================================
