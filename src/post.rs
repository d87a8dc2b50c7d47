//! Plain-text posts: `key: value` header lines, a `content:` line, then the
//! body. Parsing never fails.

use std::collections::BTreeMap;

use log::debug;
use serde::Serialize;

mod excerpt;
mod header;
mod paragraph;
mod title;

pub(crate) use paragraph::{ParagraphBlock, Segment};

pub(crate) const FAILED_EXCERPT: &str = "Failed to load this post.";
pub(crate) const FAILED_BODY: &str = "This post could not be loaded.";

#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub(crate) struct Metadata(BTreeMap<String, String>);

impl Metadata {
    pub fn insert(&mut self, key: &str, value: &str) {
        self.0.insert(key.to_ascii_lowercase(), value.trim().to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(&key.to_ascii_lowercase()).map(String::as_str)
    }

    /// Like [`Metadata::get`], but empty values count as absent.
    pub fn field(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    pub fn title(&self) -> Option<&str> {
        self.field("title")
    }

    pub fn preview_text(&self) -> Option<&str> {
        self.field("previewtext")
    }

    pub fn written(&self) -> Option<&str> {
        self.field("written")
    }

    pub fn edited(&self) -> Option<&str> {
        self.field("edited")
    }

    pub fn author(&self) -> Option<&str> {
        self.field("author")
    }

    pub fn read_time(&self) -> Option<&str> {
        self.field("readtime")
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct PostRecord {
    pub source: String,
    pub title: String,
    pub meta: Metadata,
    pub excerpt: String,
    pub paragraphs: Vec<ParagraphBlock>,
    pub failed: bool,
}

impl PostRecord {
    pub fn parse(filename: &str, content: &str) -> Self {
        let header::SplitPost { meta, body } = header::split(content);
        let (title, body) = title::resolve(meta.title(), &body, filename);
        let paragraphs = paragraph::build(body, None);
        let excerpt = excerpt::resolve(meta.preview_text(), body);
        debug!(
            "parsed {filename:?}: title {title:?}, {} header fields, {} paragraphs",
            meta.len(),
            paragraphs.len()
        );

        Self {
            source: filename.to_string(),
            title,
            meta,
            excerpt,
            paragraphs,
            failed: false,
        }
    }

    pub fn failed(filename: &str) -> Self {
        Self {
            source: filename.to_string(),
            title: filename.to_string(),
            meta: Metadata::default(),
            excerpt: FAILED_EXCERPT.to_string(),
            paragraphs: vec![ParagraphBlock::from_text(FAILED_BODY)],
            failed: true,
        }
    }
}
