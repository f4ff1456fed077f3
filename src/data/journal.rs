//! Journal posts backed by a directory of front-matter files.
//!
//! Every query reads the directory again; nothing is cached here. For a
//! load-once view with explicit refresh, see [`super::cache::CachedJournal`].
//!
//! # Visibility
//!
//! | Mode        | Draft in listings | Draft via `get_by_slug` | Draft in `list_slugs` |
//! |-------------|-------------------|-------------------------|-----------------------|
//! | Development | yes               | yes                     | yes                   |
//! | Production  | no                | no                      | yes                   |
//!
//! `list_visible_slugs` follows the lookup column instead.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Serialize;
use walkdir::WalkDir;

use super::{
    frontmatter::{self, PostFrontmatter},
    query::{self, Entry},
    types::TagCount,
};
use crate::{
    config::{Mode, SiteConfig},
    error::{ContentError, Result},
    log,
    utils::{
        date::ContentDate,
        slug::{is_valid_slug, slug_from_path},
        text::{DEFAULT_WORDS_PER_MINUTE, ReadingTime},
    },
};

/// A full journal post including its body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub slug: String,
    pub frontmatter: PostFrontmatter,
    /// Raw body after the header, handed to the renderer as is
    pub content: String,
    pub reading_time: String,
}

/// Post metadata without the body, exposed in `journal.json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostMeta {
    pub slug: String,
    pub frontmatter: PostFrontmatter,
    pub reading_time: String,
}

impl Post {
    pub fn meta(&self) -> PostMeta {
        PostMeta {
            slug: self.slug.clone(),
            frontmatter: self.frontmatter.clone(),
            reading_time: self.reading_time.clone(),
        }
    }

    pub fn into_meta(self) -> PostMeta {
        PostMeta {
            slug: self.slug,
            frontmatter: self.frontmatter,
            reading_time: self.reading_time,
        }
    }

    pub fn is_draft(&self) -> bool {
        self.frontmatter.draft
    }
}

impl Entry for Post {
    fn slug(&self) -> &str {
        &self.slug
    }

    fn date(&self) -> &str {
        &self.frontmatter.date
    }

    fn tags(&self) -> impl Iterator<Item = &str> {
        self.frontmatter.tags.iter().map(String::as_str)
    }
}

impl Entry for PostMeta {
    fn slug(&self) -> &str {
        &self.slug
    }

    fn date(&self) -> &str {
        &self.frontmatter.date
    }

    fn tags(&self) -> impl Iterator<Item = &str> {
        self.frontmatter.tags.iter().map(String::as_str)
    }
}

/// File-backed journal post store.
#[derive(Debug, Clone)]
pub struct JournalStore {
    dir: PathBuf,
    extension: String,
    words_per_minute: u32,
    mode: Mode,
}

impl JournalStore {
    /// Store over `dir` reading `.mdx` files.
    pub fn new(dir: impl Into<PathBuf>, mode: Mode) -> Self {
        Self {
            dir: dir.into(),
            extension: "mdx".into(),
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
            mode,
        }
    }

    /// Store configured from the `[content]` section.
    pub fn from_config(config: &SiteConfig, mode: Mode) -> Self {
        Self::new(config.journal_dir(), mode)
            .with_extension(&config.content.extension)
            .with_words_per_minute(config.content.words_per_minute)
    }

    /// Post file extension, without the leading dot.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_words_per_minute(mut self, words_per_minute: u32) -> Self {
        self.words_per_minute = words_per_minute;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Whether `post` may be returned by queries in the current mode.
    #[inline]
    pub fn is_visible(&self, post: &Post) -> bool {
        !(self.mode.hides_drafts() && post.is_draft())
    }

    /// Every file in the directory with the post extension.
    ///
    /// A missing directory yields nothing; other directory errors are logged.
    fn candidate_files(&self) -> Vec<PathBuf> {
        if !self.dir.is_dir() {
            return Vec::new();
        }

        WalkDir::new(&self.dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(err) => {
                    log!("journal"; "cannot read entry in {}: {err}", self.dir.display());
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .map(walkdir::DirEntry::into_path)
            .filter(|path| path.extension().is_some_and(|e| e == self.extension.as_str()))
            .collect()
    }

    /// Post files as `(slug, path)`, sorted by slug.
    ///
    /// Candidates whose file name is not a valid slug are skipped and logged.
    fn post_files(&self) -> Vec<(String, PathBuf)> {
        let mut files: Vec<(String, PathBuf)> = self
            .candidate_files()
            .into_iter()
            .filter_map(|path| match slug_from_path(&path, &self.extension) {
                Some(slug) => Some((slug, path)),
                None => {
                    log!("journal"; "skipping {}: file name is not a valid slug", path.display());
                    None
                }
            })
            .collect();

        files.sort_by(|a, b| a.0.cmp(&b.0));
        files
    }

    /// Read and parse one post file, regardless of draft status.
    ///
    /// The whole file is read before parsing, so a post is never observed
    /// half-written from this side.
    pub fn load_file(&self, slug: &str, path: &Path) -> Result<Post> {
        let raw = fs::read_to_string(path).map_err(|err| ContentError::Io(path.to_path_buf(), err))?;
        let (frontmatter, body) = frontmatter::parse(&raw, path)?;
        let reading_time = ReadingTime::estimate(body, self.words_per_minute).text;

        Ok(Post {
            slug: slug.to_owned(),
            frontmatter,
            content: body.to_owned(),
            reading_time,
        })
    }

    /// Load every visible post, newest first.
    ///
    /// Malformed files are skipped with a diagnostic; posts with an
    /// unparsable date are kept and sorted last.
    pub(crate) fn load_visible(&self) -> Vec<Post> {
        let mut posts: Vec<Post> = self
            .post_files()
            .into_iter()
            .filter_map(|(slug, path)| match self.load_file(&slug, &path) {
                Ok(post) => Some(post),
                Err(err) => {
                    log!("journal"; "skipping {}: {}", path.display(), error_chain(&err));
                    None
                }
            })
            .filter(|post| self.is_visible(post))
            .collect();

        for post in &posts {
            if ContentDate::parse(&post.frontmatter.date).is_none() {
                log!("journal"; "`{}` has unparsable date {:?}, sorting it last", post.slug, post.frontmatter.date);
            }
        }

        query::sort_newest_first(&mut posts);
        posts
    }

    /// Visible posts without bodies, newest first.
    pub fn list_all(&self) -> Vec<PostMeta> {
        self.load_visible().into_iter().map(Post::into_meta).collect()
    }

    /// Full post for `slug`, or `None` when it does not exist, cannot be
    /// parsed, or is a draft hidden in production.
    pub fn get_by_slug(&self, slug: &str) -> Option<Post> {
        if !is_valid_slug(slug) {
            return None;
        }

        let path = self.dir.join(format!("{slug}.{}", self.extension));
        if !path.is_file() {
            return None;
        }

        match self.load_file(slug, &path) {
            Ok(post) => self.is_visible(&post).then_some(post),
            Err(err) => {
                log!("journal"; "cannot load {}: {}", path.display(), error_chain(&err));
                None
            }
        }
    }

    /// Visible posts carrying `tag` (exact match), newest first.
    pub fn list_by_tag(&self, tag: &str) -> Vec<PostMeta> {
        query::with_tag(self.list_all(), tag)
    }

    /// Tag counts over visible posts, most used first.
    pub fn list_tags(&self) -> Vec<TagCount> {
        query::count_tags(&self.load_visible())
    }

    /// Slug of every post file, drafts included, sorted ascending.
    pub fn list_slugs(&self) -> Vec<String> {
        self.post_files().into_iter().map(|(slug, _)| slug).collect()
    }

    /// Slugs that `get_by_slug` resolves in the current mode, sorted ascending.
    pub fn list_visible_slugs(&self) -> Vec<String> {
        let mut slugs: Vec<String> = self.load_visible().into_iter().map(|p| p.slug).collect();
        slugs.sort();
        slugs
    }
}

/// Render an error with its source chain on one line.
pub(crate) fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_post(dir: &Path, slug: &str, header: &str, body: &str) {
        fs::write(
            dir.join(format!("{slug}.mdx")),
            format!("---\n{header}\n---\n{body}"),
        )
        .unwrap();
    }

    fn header(title: &str, date: &str, tags: &str) -> String {
        format!("title: {title}\ndescription: About {title}\ndate: {date}\ntags: {tags}")
    }

    fn slugs(posts: &[PostMeta]) -> Vec<&str> {
        posts.iter().map(|p| p.slug.as_str()).collect()
    }

    fn journal() -> TempDir {
        let dir = TempDir::new().unwrap();
        write_post(dir.path(), "first", &header("First", "2024-01-10", "[rust]"), "one two three");
        write_post(dir.path(), "second", &header("Second", "2024-03-05", "[rust, web]"), "body");
        write_post(
            dir.path(),
            "wip",
            &format!("{}\ndraft: true", header("Wip", "2024-06-01", "[web]")),
            "draft body",
        );
        dir
    }

    #[test]
    fn test_list_all_newest_first() {
        let dir = journal();
        let store = JournalStore::new(dir.path(), Mode::Development);
        assert_eq!(slugs(&store.list_all()), ["wip", "second", "first"]);
    }

    #[test]
    fn test_list_all_projects_metadata() {
        let dir = journal();
        let store = JournalStore::new(dir.path(), Mode::Production);
        let posts = store.list_all();
        let first = posts.iter().find(|p| p.slug == "first").unwrap();
        assert_eq!(first.frontmatter.title, "First");
        assert_eq!(first.reading_time, "1 min read");

        let json = serde_json::to_value(first).unwrap();
        assert!(json.get("content").is_none());
        assert_eq!(json["readingTime"], "1 min read");
    }

    #[test]
    fn test_drafts_hidden_in_production() {
        let dir = journal();
        let store = JournalStore::new(dir.path(), Mode::Production);

        assert_eq!(slugs(&store.list_all()), ["second", "first"]);
        assert!(store.get_by_slug("wip").is_none());
        assert!(store.list_by_tag("web").iter().all(|p| p.slug != "wip"));
    }

    #[test]
    fn test_drafts_visible_in_development() {
        let dir = journal();
        let store = JournalStore::new(dir.path(), Mode::Development);

        assert!(store.list_all().iter().any(|p| p.slug == "wip"));
        let post = store.get_by_slug("wip").unwrap();
        assert!(post.is_draft());
        assert_eq!(post.content, "draft body");
    }

    #[test]
    fn test_listing_and_lookup_agree() {
        let dir = journal();
        for mode in [Mode::Production, Mode::Development] {
            let store = JournalStore::new(dir.path(), mode);
            let listed = store.list_all();
            for slug in store.list_slugs() {
                let found = store.get_by_slug(&slug).is_some();
                let in_list = listed.iter().any(|p| p.slug == slug);
                assert_eq!(found, in_list, "{slug} disagrees in {mode:?}");
            }
        }
    }

    #[test]
    fn test_get_by_slug_full_record() {
        let dir = journal();
        let store = JournalStore::new(dir.path(), Mode::Production);
        let post = store.get_by_slug("first").unwrap();
        assert_eq!(post.slug, "first");
        assert_eq!(post.content, "one two three");
        assert_eq!(post.frontmatter.tags, ["rust"]);
        assert_eq!(post.meta().slug, "first");
    }

    #[test]
    fn test_get_by_slug_not_found() {
        let dir = journal();
        let store = JournalStore::new(dir.path(), Mode::Development);
        assert!(store.get_by_slug("missing").is_none());
        assert!(store.get_by_slug("").is_none());
    }

    #[test]
    fn test_get_by_slug_rejects_path_traversal() {
        let root = TempDir::new().unwrap();
        let journal = root.path().join("journal");
        fs::create_dir(&journal).unwrap();
        write_post(root.path(), "secret", &header("Secret", "2024-01-01", "[]"), "");

        let store = JournalStore::new(&journal, Mode::Development);
        assert!(store.get_by_slug("../secret").is_none());
    }

    #[test]
    fn test_list_tags() {
        let dir = TempDir::new().unwrap();
        write_post(dir.path(), "a", &header("A", "2024-01-01", "[x, y]"), "");
        write_post(dir.path(), "b", &header("B", "2024-02-01", "[y]"), "");

        let store = JournalStore::new(dir.path(), Mode::Production);
        assert_eq!(
            store.list_tags(),
            vec![
                TagCount { tag: "y".into(), count: 2 },
                TagCount { tag: "x".into(), count: 1 },
            ]
        );
    }

    #[test]
    fn test_list_tags_excludes_hidden_drafts() {
        let dir = journal();
        let production = JournalStore::new(dir.path(), Mode::Production).list_tags();
        let development = JournalStore::new(dir.path(), Mode::Development).list_tags();

        let web = |tags: &[TagCount]| tags.iter().find(|t| t.tag == "web").map(|t| t.count);
        assert_eq!(web(&production), Some(1));
        assert_eq!(web(&development), Some(2));
    }

    #[test]
    fn test_list_by_tag() {
        let dir = journal();
        let store = JournalStore::new(dir.path(), Mode::Production);
        assert_eq!(slugs(&store.list_by_tag("rust")), ["second", "first"]);
        assert!(store.list_by_tag("Rust").is_empty());
    }

    #[test]
    fn test_list_slugs_includes_drafts() {
        let dir = journal();
        let store = JournalStore::new(dir.path(), Mode::Production);
        assert_eq!(store.list_slugs(), ["first", "second", "wip"]);
        assert_eq!(store.list_visible_slugs(), ["first", "second"]);
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = JournalStore::new(dir.path().join("nope"), Mode::Production);
        assert!(store.list_all().is_empty());
        assert!(store.list_slugs().is_empty());
        assert!(store.list_tags().is_empty());
        assert!(store.get_by_slug("anything").is_none());
    }

    #[test]
    fn test_empty_directory_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = JournalStore::new(dir.path(), Mode::Development);
        assert!(store.list_all().is_empty());
        assert!(store.list_slugs().is_empty());
        assert!(store.list_tags().is_empty());
    }

    #[test]
    fn test_ignores_other_extensions_and_subdirectories() {
        let dir = journal();
        fs::write(dir.path().join("notes.md"), "---\ntitle: x\n---\n").unwrap();
        fs::write(dir.path().join("README"), "readme").unwrap();
        fs::create_dir(dir.path().join("nested.mdx")).unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        write_post(&dir.path().join("sub"), "deep", &header("Deep", "2024-01-01", "[]"), "");

        let store = JournalStore::new(dir.path(), Mode::Development);
        assert_eq!(store.list_slugs(), ["first", "second", "wip"]);
    }

    #[test]
    fn test_invalid_file_name_is_skipped() {
        let dir = TempDir::new().unwrap();
        write_post(dir.path(), "ok", &header("Ok", "2024-01-01", "[x]"), "");
        write_post(dir.path(), "notes #1", &header("Notes", "2024-02-01", "[x]"), "");

        let store = JournalStore::new(dir.path(), Mode::Development);
        // Still a candidate, rejected only at slug derivation
        assert_eq!(store.candidate_files().len(), 2);
        assert_eq!(store.list_slugs(), ["ok"]);
        assert_eq!(slugs(&store.list_all()), ["ok"]);
        assert_eq!(store.list_tags(), vec![TagCount { tag: "x".into(), count: 1 }]);
        assert!(store.get_by_slug("notes #1").is_none());
    }

    #[test]
    fn test_local_date_time_sorts_by_instant() {
        let dir = TempDir::new().unwrap();
        write_post(dir.path(), "older", &header("Older", "2020-01-01", "[]"), "");
        write_post(dir.path(), "newest", &header("Newest", "2025-06-01T09:00:00", "[]"), "");
        write_post(dir.path(), "spaced", &header("Spaced", "\"2025-05-01 09:00:00\"", "[]"), "");

        let store = JournalStore::new(dir.path(), Mode::Development);
        assert_eq!(slugs(&store.list_all()), ["newest", "spaced", "older"]);
    }

    #[test]
    fn test_custom_extension() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("plain.md"),
            format!("---\n{}\n---\nbody", header("Plain", "2024-01-01", "[]")),
        )
        .unwrap();

        let store = JournalStore::new(dir.path(), Mode::Development).with_extension("md");
        assert_eq!(store.list_slugs(), ["plain"]);
        assert!(store.get_by_slug("plain").is_some());
    }

    #[test]
    fn test_malformed_file_is_skipped() {
        let dir = journal();
        fs::write(dir.path().join("broken.mdx"), "no header at all").unwrap();
        fs::write(dir.path().join("partial.mdx"), "---\ntitle: Only a title\n---\n").unwrap();

        let store = JournalStore::new(dir.path(), Mode::Development);
        assert_eq!(slugs(&store.list_all()), ["wip", "second", "first"]);
        assert!(store.get_by_slug("broken").is_none());
        // Path enumeration is file based and still sees them
        assert!(store.list_slugs().contains(&"broken".to_string()));
    }

    #[test]
    fn test_load_file_reports_malformed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.mdx");
        fs::write(&path, "no header").unwrap();

        let store = JournalStore::new(dir.path(), Mode::Development);
        assert!(matches!(
            store.load_file("broken", &path),
            Err(ContentError::MissingFrontmatter(_))
        ));
        assert!(matches!(
            store.load_file("gone", &dir.path().join("gone.mdx")),
            Err(ContentError::Io(..))
        ));
    }

    #[test]
    fn test_unparsable_date_sorts_last() {
        let dir = TempDir::new().unwrap();
        write_post(dir.path(), "undated", &header("Undated", "someday", "[]"), "");
        write_post(dir.path(), "dated", &header("Dated", "2001-01-01", "[]"), "");

        let store = JournalStore::new(dir.path(), Mode::Development);
        assert_eq!(slugs(&store.list_all()), ["dated", "undated"]);
    }

    #[test]
    fn test_equal_dates_ordered_by_slug() {
        let dir = TempDir::new().unwrap();
        write_post(dir.path(), "b-post", &header("B", "2024-05-05", "[]"), "");
        write_post(dir.path(), "a-post", &header("A", "2024-05-05", "[]"), "");

        let store = JournalStore::new(dir.path(), Mode::Development);
        assert_eq!(slugs(&store.list_all()), ["a-post", "b-post"]);
    }

    #[test]
    fn test_listing_is_idempotent() {
        let dir = journal();
        let store = JournalStore::new(dir.path(), Mode::Development);
        assert_eq!(store.list_all(), store.list_all());
        assert_eq!(store.list_tags(), store.list_tags());
        assert_eq!(store.list_slugs(), store.list_slugs());
    }

    #[test]
    fn test_reads_fresh_on_every_call() {
        let dir = journal();
        let store = JournalStore::new(dir.path(), Mode::Development);
        assert_eq!(store.list_all().len(), 3);

        write_post(dir.path(), "later", &header("Later", "2025-01-01", "[]"), "");
        assert_eq!(store.list_all()[0].slug, "later");
    }

    #[test]
    fn test_words_per_minute_applies() {
        let dir = TempDir::new().unwrap();
        write_post(dir.path(), "long", &header("Long", "2024-01-01", "[]"), &"word ".repeat(300));

        let default = JournalStore::new(dir.path(), Mode::Development);
        assert_eq!(default.get_by_slug("long").unwrap().reading_time, "2 min read");

        let fast = default.clone().with_words_per_minute(300);
        assert_eq!(fast.get_by_slug("long").unwrap().reading_time, "1 min read");
    }

    #[test]
    fn test_from_config() {
        let mut config = SiteConfig::default();
        config.content.journal = PathBuf::from("/srv/site/posts");
        config.content.extension = "md".into();

        let store = JournalStore::from_config(&config, Mode::Production);
        assert_eq!(store.dir(), Path::new("/srv/site/posts"));
        assert_eq!(store.extension(), "md");
        assert_eq!(store.mode(), Mode::Production);
    }

    #[test]
    fn test_error_chain_includes_source() {
        let yaml_err = serde_yaml::from_str::<u32>("[").unwrap_err();
        let err = ContentError::Frontmatter {
            path: PathBuf::from("x.mdx"),
            source: yaml_err,
        };
        let chain = error_chain(&err);
        assert!(chain.starts_with("front-matter of `x.mdx` is malformed: "));
    }
}
