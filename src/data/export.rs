//! JSON data files for templates and feed builders.
//!
//! | File            | Content                                         |
//! |-----------------|-------------------------------------------------|
//! | `chapters.json` | every chapter, newest first                     |
//! | `journal.json`  | visible post metadata, newest first             |
//! | `tags.json`     | `{"chapters": [...], "journal": [...]}` counts  |

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::Serialize;

use super::types::TagCount;
use crate::{log, site::Site};

pub const CHAPTERS_FILE: &str = "chapters.json";
pub const JOURNAL_FILE: &str = "journal.json";
pub const TAGS_FILE: &str = "tags.json";

type DataFileGenerator = fn(&Site) -> Result<String>;

const DATA_FILES: &[(&str, DataFileGenerator)] = &[
    (CHAPTERS_FILE, chapters_to_json),
    (JOURNAL_FILE, journal_to_json),
    (TAGS_FILE, tags_to_json),
];

#[derive(Serialize)]
struct TagsIndex {
    chapters: Vec<TagCount>,
    journal: Vec<TagCount>,
}

pub fn chapters_to_json(site: &Site) -> Result<String> {
    Ok(serde_json::to_string_pretty(&site.chapters().list_all())?)
}

pub fn journal_to_json(site: &Site) -> Result<String> {
    Ok(serde_json::to_string_pretty(&site.journal().list_all())?)
}

pub fn tags_to_json(site: &Site) -> Result<String> {
    let index = TagsIndex {
        chapters: site.chapters().list_tags_with_counts(),
        journal: site.journal().list_tags(),
    };
    Ok(serde_json::to_string_pretty(&index)?)
}

/// Names of every data file produced by [`write_to_disk`].
pub fn data_file_names() -> impl Iterator<Item = &'static str> {
    DATA_FILES.iter().map(|(name, _)| *name)
}

/// Render a single data file by name. `None` for unknown names.
pub fn render(site: &Site, name: &str) -> Option<Result<String>> {
    DATA_FILES
        .iter()
        .find(|(file, _)| *file == name)
        .map(|(_, generator)| generator(site))
}

/// Write all data files into `data_dir`, creating it when needed.
pub fn write_to_disk(site: &Site, data_dir: &Path) -> Result<()> {
    fs::create_dir_all(data_dir)
        .with_context(|| format!("failed to create {}", data_dir.display()))?;

    for (name, generator) in DATA_FILES {
        let path = data_dir.join(name);
        let json = generator(site).with_context(|| format!("failed to render {name}"))?;
        fs::write(&path, json).with_context(|| format!("failed to write {}", path.display()))?;
    }

    log!("export"; "wrote {} data files to {}", DATA_FILES.len(), data_dir.display());
    Ok(())
}
