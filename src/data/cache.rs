//! Load-once view over a [`JournalStore`] with explicit refresh.
//!
//! Readers get a consistent snapshot through `arc-swap`; a refresh builds
//! the next snapshot off to the side and replaces the old one atomically.
//! Readers holding the old snapshot keep it until they drop it.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
    time::SystemTime,
};

use arc_swap::ArcSwap;
use walkdir::WalkDir;

use super::{
    journal::{JournalStore, Post, PostMeta},
    query,
    types::TagCount,
};
use crate::log;

/// Directory state a snapshot was built from: every post file with its mtime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Fingerprint {
    files: Vec<(PathBuf, Option<SystemTime>)>,
}

impl Fingerprint {
    fn scan(store: &JournalStore) -> Self {
        let dir = store.dir();
        if !dir.is_dir() {
            return Self::default();
        }

        let ext = store.extension();
        let mut files: Vec<(PathBuf, Option<SystemTime>)> = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_file() && has_extension(e.path(), ext))
            .map(|e| {
                let mtime = e.metadata().ok().and_then(|m| m.modified().ok());
                (e.into_path(), mtime)
            })
            .collect();

        files.sort();
        Self { files }
    }
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension().is_some_and(|e| e == ext)
}

#[derive(Debug, Default)]
struct Snapshot {
    /// Visible posts, newest first
    posts: Vec<Post>,
    /// Every post file slug, drafts included
    slugs: Vec<String>,
    fingerprint: Fingerprint,
}

/// Cached journal queries.
///
/// Nothing changes until [`refresh`](Self::refresh) or
/// [`refresh_if_stale`](Self::refresh_if_stale) is called.
#[derive(Debug)]
pub struct CachedJournal {
    store: JournalStore,
    snapshot: ArcSwap<Snapshot>,
}

impl CachedJournal {
    /// Wrap `store` and load the first snapshot.
    pub fn new(store: JournalStore) -> Self {
        let snapshot = Self::build(&store);
        Self {
            store,
            snapshot: ArcSwap::from_pointee(snapshot),
        }
    }

    fn build(store: &JournalStore) -> Snapshot {
        // Fingerprint first: a write racing the load makes the next check stale
        let fingerprint = Fingerprint::scan(store);
        Snapshot {
            posts: store.load_visible(),
            slugs: store.list_slugs(),
            fingerprint,
        }
    }

    pub fn store(&self) -> &JournalStore {
        &self.store
    }

    /// Reload every post from disk.
    pub fn refresh(&self) {
        let next = Self::build(&self.store);
        log!("cache"; "loaded {} posts from {}", next.posts.len(), self.store.dir().display());
        self.snapshot.store(Arc::new(next));
    }

    /// Reload only when a post file was added, removed or had its mtime
    /// changed since the last load.
    ///
    /// Edits that keep a file's mtime are not seen; call [`refresh`](Self::refresh).
    /// Returns `true` if a reload happened.
    pub fn refresh_if_stale(&self) -> bool {
        let current = Fingerprint::scan(&self.store);
        if current == self.snapshot.load().fingerprint {
            return false;
        }
        self.refresh();
        true
    }

    pub fn len(&self) -> usize {
        self.snapshot.load().posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn list_all(&self) -> Vec<PostMeta> {
        self.snapshot.load().posts.iter().map(Post::meta).collect()
    }

    pub fn get_by_slug(&self, slug: &str) -> Option<Post> {
        self.snapshot
            .load()
            .posts
            .iter()
            .find(|p| p.slug == slug)
            .cloned()
    }

    pub fn list_by_tag(&self, tag: &str) -> Vec<PostMeta> {
        query::with_tag(self.list_all(), tag)
    }

    pub fn list_tags(&self) -> Vec<TagCount> {
        query::count_tags(&self.snapshot.load().posts)
    }

    /// Slug of every post file at the last load, drafts included, sorted ascending.
    pub fn list_slugs(&self) -> Vec<String> {
        self.snapshot.load().slugs.clone()
    }

    /// Slugs of cached posts, sorted ascending.
    pub fn list_visible_slugs(&self) -> Vec<String> {
        let mut slugs: Vec<String> = self
            .snapshot
            .load()
            .posts
            .iter()
            .map(|p| p.slug.clone())
            .collect();
        slugs.sort();
        slugs
    }
}
