//! `[site]` section configuration.
//!
//! Contains basic site information like name, author, description, etc.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[site]` section in chapbook.toml - basic site metadata.
///
/// # Example
/// ```toml
/// [site]
/// name = "Alice Example"
/// title = "Alice Example - Software Engineer"
/// description = "Projects and notes"
/// url = "https://alice.dev"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteInfo {
    /// Owner name, shown in headers and feed authorship.
    #[serde(default)]
    pub name: String,

    /// Site title displayed in browser tab.
    #[serde(default)]
    pub title: String,

    /// Site description for meta tags and feeds.
    #[serde(default)]
    pub description: String,

    /// Base URL for absolute links.
    #[serde(default = "defaults::site::url")]
    #[educe(Default = defaults::site::url())]
    pub url: Option<String>,

    /// Author name for feeds.
    #[serde(default = "defaults::site::author")]
    #[educe(Default = defaults::site::author())]
    pub author: String,

    /// Author email for feeds.
    #[serde(default = "defaults::site::email")]
    #[educe(Default = defaults::site::email())]
    pub email: String,

    /// BCP 47 language code (e.g., "en-US").
    #[serde(default = "defaults::site::language")]
    #[educe(Default = defaults::site::language())]
    pub language: String,
}

impl SiteInfo {
    /// Absolute URL for a site path, or the path itself when no base URL is set.
    pub fn absolute_url(&self, path: &str) -> String {
        match &self.url {
            Some(base) => format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/')),
            None => path.to_owned(),
        }
    }
}
