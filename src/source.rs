//! Document sources: headings and page text handed over by the conversion layer.
//!
//! A source is a JSON document:
//!
//! ```json
//! {
//!   "title": "Project Plan",
//!   "headings": [{"level": "H1", "text": "1. Introduction"}],
//!   "pages": ["page one text", "page two text"]
//! }
//! ```
//!
//! `pages` may also be an object keyed by page number (`{"1": "...", "2": "..."}`).

use crate::error::{Error, Result};
use crate::model::{is_meaningful, Heading, HeadingLevel, PageCorpus};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// A heading as supplied by the structural extractor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingInput {
    /// Nesting level
    pub level: HeadingLevel,

    /// Heading text
    pub text: String,
}

/// Per-page text, either in page order or keyed by page number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PagesInput {
    /// Page texts in order, first item is page 1
    List(Vec<String>),

    /// Page texts keyed by page number
    Numbered(BTreeMap<String, String>),
}

impl Default for PagesInput {
    fn default() -> Self {
        PagesInput::List(Vec::new())
    }
}

impl PagesInput {
    /// Build the page corpus, validating explicit page numbers.
    pub fn to_corpus(&self) -> Result<PageCorpus> {
        match self {
            PagesInput::List(pages) => Ok(PageCorpus::from_pages(pages.iter().cloned())),
            PagesInput::Numbered(pages) => {
                let mut entries = Vec::with_capacity(pages.len());
                for (key, text) in pages {
                    let number: i64 = key.trim().parse().map_err(|_| {
                        Error::InvalidCorpus(format!("page key {:?} is not a number", key))
                    })?;
                    entries.push((number, text.clone()));
                }
                PageCorpus::from_numbered(entries)
            }
        }
    }
}

/// Everything needed to resolve one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSource {
    /// Document title, if the converter found one
    #[serde(default)]
    pub title: Option<String>,

    /// Headings in document order
    #[serde(default)]
    pub headings: Vec<HeadingInput>,

    /// Per-page text
    #[serde(default)]
    pub pages: PagesInput,
}

impl DocumentSource {
    /// Parse a source from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a source from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Build the page corpus.
    pub fn corpus(&self) -> Result<PageCorpus> {
        self.pages.to_corpus()
    }

    /// Headings with more than `min_chars` trimmed characters, in order.
    pub fn headings(&self, min_chars: usize) -> Vec<Heading> {
        self.headings
            .iter()
            .filter(|input| {
                let keep = is_meaningful(&input.text, min_chars);
                if !keep {
                    debug!("Dropping short heading {:?}", input.text);
                }
                keep
            })
            .map(|input| Heading {
                level: input.level,
                text: input.text.trim().to_string(),
            })
            .collect()
    }

    /// The title, or `fallback` when none was supplied.
    pub fn title_or(&self, fallback: &str) -> String {
        self.title
            .as_deref()
            .map(str::trim)
            .filter(|title| !title.is_empty())
            .unwrap_or(fallback)
            .to_string()
    }
}

/// Load a page corpus from a file.
///
/// `.json` files hold a [`PagesInput`]; `.txt` files hold form-feed
/// separated page text as written by `pdftotext`.
pub fn load_corpus<P: AsRef<Path>>(path: P) -> Result<PageCorpus> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    match ext.as_str() {
        "json" => {
            let json = fs::read_to_string(path)?;
            let pages: PagesInput = serde_json::from_str(&json)?;
            pages.to_corpus()
        }
        "txt" => {
            let text = fs::read_to_string(path)?;
            Ok(PageCorpus::from_form_feed(&text))
        }
        _ => Err(Error::UnsupportedInput(format!(
            "cannot read pages from {}",
            path.display()
        ))),
    }
}
