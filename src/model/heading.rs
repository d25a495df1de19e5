//! Heading types.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Headings whose trimmed text has this many characters or fewer are
/// rejected before they reach the resolver.
pub const MIN_HEADING_CHARS: usize = 2;

/// Nesting level of a heading (H1 = outermost).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    /// All levels, outermost first.
    pub const ALL: [HeadingLevel; 6] = [
        HeadingLevel::H1,
        HeadingLevel::H2,
        HeadingLevel::H3,
        HeadingLevel::H4,
        HeadingLevel::H5,
        HeadingLevel::H6,
    ];

    /// Create a level from its depth (1-6).
    pub fn from_depth(depth: u8) -> Option<Self> {
        match depth {
            1 => Some(HeadingLevel::H1),
            2 => Some(HeadingLevel::H2),
            3 => Some(HeadingLevel::H3),
            4 => Some(HeadingLevel::H4),
            5 => Some(HeadingLevel::H5),
            6 => Some(HeadingLevel::H6),
            _ => None,
        }
    }

    /// Depth of this level (1-6).
    pub fn depth(self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
            HeadingLevel::H4 => 4,
            HeadingLevel::H5 => 5,
            HeadingLevel::H6 => 6,
        }
    }

    /// Upper-case tag name ("H1".."H6").
    pub fn as_str(self) -> &'static str {
        match self {
            HeadingLevel::H1 => "H1",
            HeadingLevel::H2 => "H2",
            HeadingLevel::H3 => "H3",
            HeadingLevel::H4 => "H4",
            HeadingLevel::H5 => "H5",
            HeadingLevel::H6 => "H6",
        }
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HeadingLevel {
    type Err = Error;

    /// Accepts "H3", "h3" or "3".
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('H')
            .or_else(|| trimmed.strip_prefix('h'))
            .unwrap_or(trimmed);

        digits
            .parse::<u8>()
            .ok()
            .and_then(HeadingLevel::from_depth)
            .ok_or_else(|| Error::InvalidLevel(s.to_string()))
    }
}

impl TryFrom<String> for HeadingLevel {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// A structural section marker extracted upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// Nesting level
    pub level: HeadingLevel,

    /// Literal heading text as extracted
    pub text: String,
}

impl Heading {
    /// Create a heading.
    ///
    /// Fails when the trimmed text has [`MIN_HEADING_CHARS`] characters or fewer.
    pub fn new(level: HeadingLevel, text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if !is_meaningful(&text, MIN_HEADING_CHARS) {
            return Err(Error::InvalidHeading(text));
        }
        Ok(Self { level, text })
    }
}

/// Whether `text` has more than `min_chars` characters after trimming.
pub fn is_meaningful(text: &str, min_chars: usize) -> bool {
    text.trim().chars().count() > min_chars
}
