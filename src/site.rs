//! The site's content collections, wired from `chapbook.toml`.

use std::path::Path;

use anyhow::{Context, Result};

use crate::{
    config::{Mode, SiteConfig},
    data::{CachedJournal, ChapterRegistry, JournalStore},
    log,
};

/// Chapter registry and journal store for one site root.
#[derive(Debug, Clone)]
pub struct Site {
    config: SiteConfig,
    mode: Mode,
    chapters: ChapterRegistry,
    journal: JournalStore,
}

impl Site {
    /// Build from an already loaded config, with the built-in chapters.
    pub fn new(config: SiteConfig, mode: Mode) -> Self {
        let journal = JournalStore::from_config(&config, mode);
        Self {
            config,
            mode,
            chapters: ChapterRegistry::builtin(),
            journal,
        }
    }

    /// Replace the chapter registry.
    pub fn with_chapters(mut self, chapters: ChapterRegistry) -> Self {
        self.chapters = chapters;
        self
    }

    /// Load `chapbook.toml` from `root` and resolve the mode from
    /// `CHAPBOOK_ENV` and the config.
    pub fn load(root: &Path) -> Result<Self> {
        let config = SiteConfig::load(root)
            .with_context(|| format!("failed to load site config from {}", root.display()))?;
        let mode = config.mode();

        log!("config"; "{mode:?} mode, journal at {}", config.journal_dir().display());
        Ok(Self::new(config, mode))
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub const fn mode(&self) -> Mode {
        self.mode
    }

    pub fn chapters(&self) -> &ChapterRegistry {
        &self.chapters
    }

    pub fn journal(&self) -> &JournalStore {
        &self.journal
    }

    /// A cached view over the journal, loaded now.
    pub fn cached_journal(&self) -> CachedJournal {
        CachedJournal::new(self.journal.clone())
    }
}
