//! Resolved outline types.

use super::HeadingLevel;
use serde::{Deserialize, Serialize};

/// The document title plus every heading with its resolved page.
///
/// Serializes to `{"title": ..., "outline": [{"level", "text", "page"}, ...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Outline {
    /// Document title
    pub title: String,

    /// Headings in document order
    #[serde(rename = "outline")]
    pub headings: Vec<OutlineEntry>,
}

impl Outline {
    /// Create an empty outline with a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            headings: Vec::new(),
        }
    }

    /// Number of headings.
    pub fn len(&self) -> usize {
        self.headings.len()
    }

    /// Check if the outline has no headings.
    pub fn is_empty(&self) -> bool {
        self.headings.is_empty()
    }

    /// Iterate over headings of one level.
    pub fn at_level(&self, level: HeadingLevel) -> impl Iterator<Item = &OutlineEntry> {
        self.headings.iter().filter(move |entry| entry.level == level)
    }

    /// Highest page any heading resolved to.
    pub fn last_page(&self) -> Option<u32> {
        self.headings.iter().map(|entry| entry.page).max()
    }
}

/// A heading with its page. The page is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineEntry {
    /// Nesting level
    pub level: HeadingLevel,

    /// Heading text as extracted
    pub text: String,

    /// Page number (1-indexed)
    pub page: u32,
}

impl OutlineEntry {
    /// Create a new outline entry.
    pub fn new(level: HeadingLevel, text: impl Into<String>, page: u32) -> Self {
        Self {
            level,
            text: text.into(),
            page,
        }
    }
}
