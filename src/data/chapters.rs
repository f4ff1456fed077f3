//! Chapters: project case studies compiled into the binary.
//!
//! [`ChapterRegistry`] is a read-only view over a fixed list of
//! [`Chapter`] records. The built-in list lives in `registry.rs`; other
//! lists can be supplied through [`ChapterRegistry::new`], which checks the
//! slug and display-field invariants once up front.

use std::borrow::Cow;

use rustc_hash::FxHashSet;
use serde::Serialize;

use super::{
    query::{self, Entry},
    registry::CHAPTERS,
    types::TagCount,
};
use crate::{
    error::{ContentError, Result},
    log,
    utils::{date::ContentDate, slug::is_valid_slug},
};

/// External links for a chapter. Each is independently optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ChapterLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo: Option<&'static str>,
}

impl ChapterLinks {
    pub const NONE: Self = Self {
        live: None,
        github: None,
        demo: None,
    };

    pub const fn is_empty(&self) -> bool {
        self.live.is_none() && self.github.is_none() && self.demo.is_none()
    }
}

/// A project case study, exposed in `chapters.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    /// Unique identifier and URL path segment
    pub slug: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    /// `YYYY-MM` or `YYYY-MM-DD`; used for ordering
    pub date: &'static str,
    pub tags: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<&'static str>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub featured: bool,
    pub context: &'static str,
    pub what_i_built: &'static str,
    pub key_decisions: &'static [&'static str],
    pub challenges: &'static [&'static str],
    pub outcomes: &'static [&'static str],
    pub tech_stack: &'static [&'static str],
    #[serde(skip_serializing_if = "ChapterLinks::is_empty")]
    pub links: ChapterLinks,
}

impl Chapter {
    /// Parsed date, `None` if the registry holds an unparsable string.
    pub fn parsed_date(&self) -> Option<ContentDate> {
        ContentDate::parse(self.date)
    }
}

impl Entry for Chapter {
    fn slug(&self) -> &str {
        self.slug
    }

    fn date(&self) -> &str {
        self.date
    }

    fn tags(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().copied()
    }
}

/// Read-only queries over a fixed chapter list.
#[derive(Debug, Clone)]
pub struct ChapterRegistry {
    chapters: Cow<'static, [Chapter]>,
}

impl Default for ChapterRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ChapterRegistry {
    /// The chapters compiled into this crate.
    pub fn builtin() -> Self {
        Self {
            chapters: Cow::Borrowed(CHAPTERS),
        }
    }

    /// Build a registry from caller-supplied chapters after validating them.
    pub fn new(chapters: Vec<Chapter>) -> Result<Self> {
        Self::validate(&chapters)?;
        Ok(Self {
            chapters: Cow::Owned(chapters),
        })
    }

    /// Check slug uniqueness and required display fields.
    ///
    /// Unparsable dates are not rejected: they are logged and sort last.
    pub fn validate(chapters: &[Chapter]) -> Result<()> {
        let mut seen = FxHashSet::default();

        for chapter in chapters {
            if !is_valid_slug(chapter.slug) {
                return Err(ContentError::InvalidSlug(chapter.slug.to_owned()));
            }
            if !seen.insert(chapter.slug) {
                return Err(ContentError::DuplicateSlug(chapter.slug.to_owned()));
            }

            for (field, value) in [
                ("title", chapter.title),
                ("subtitle", chapter.subtitle),
                ("description", chapter.description),
            ] {
                if value.trim().is_empty() {
                    return Err(ContentError::EmptyField {
                        slug: chapter.slug.to_owned(),
                        field,
                    });
                }
            }

            if chapter.parsed_date().is_none() {
                log!("chapters"; "`{}` has unparsable date {:?}, sorting it last", chapter.slug, chapter.date);
            }
        }

        Ok(())
    }

    /// All chapters in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &Chapter> {
        self.chapters.iter()
    }

    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    /// All chapters, newest first. Equal dates keep registry order.
    pub fn list_all(&self) -> Vec<&Chapter> {
        let mut chapters: Vec<&Chapter> = self.chapters.iter().collect();
        query::sort_newest_first(&mut chapters);
        chapters
    }

    /// Featured chapters, newest first.
    pub fn list_featured(&self) -> Vec<&Chapter> {
        self.list_all().into_iter().filter(|c| c.featured).collect()
    }

    pub fn get_by_slug(&self, slug: &str) -> Option<&Chapter> {
        self.chapters.iter().find(|c| c.slug == slug)
    }

    /// Chapters carrying `tag` (exact match), newest first.
    pub fn list_by_tag(&self, tag: &str) -> Vec<&Chapter> {
        query::with_tag(self.list_all(), tag)
    }

    /// Every tag with its occurrence count, most used first.
    pub fn list_tags_with_counts(&self) -> Vec<TagCount> {
        query::count_tags(self.chapters.iter())
    }

    /// Every slug once, in registry order. Used for static path generation.
    pub fn list_slugs(&self) -> Vec<&str> {
        self.chapters.iter().map(|c| c.slug).collect()
    }
}
