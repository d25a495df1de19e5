//! Page-indexed text corpus.

use crate::error::{Error, Result};
use crate::normalize::TextNormalizer;

/// Form feed, the page separator emitted by `pdftotext`.
const FORM_FEED: char = '\u{000C}';

/// One page of the corpus with its comparison forms computed up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusPage {
    /// Page number (1-indexed)
    pub number: u32,

    /// Page text as supplied
    pub raw: String,

    /// Normalized text
    pub normalized: String,

    /// Strict-normalized text (digits removed)
    pub strict: String,
}

impl CorpusPage {
    fn new(number: u32, raw: String, normalizer: &TextNormalizer) -> Self {
        Self {
            number,
            normalized: normalizer.normalize(&raw),
            strict: normalizer.normalize_strict(&raw),
            raw,
        }
    }
}

/// Full per-page text of a document.
///
/// Page numbers are contiguous starting at 1 and follow the physical page
/// order of the source. The corpus is immutable once built.
#[derive(Debug, Clone)]
pub struct PageCorpus {
    pages: Vec<CorpusPage>,
    normalizer: TextNormalizer,
}

impl PageCorpus {
    /// Create an empty corpus.
    pub fn new() -> Self {
        Self {
            pages: Vec::new(),
            normalizer: TextNormalizer::new(),
        }
    }

    /// Build a corpus from page texts in physical order (first item is page 1).
    pub fn from_pages<I, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let normalizer = TextNormalizer::new();
        let pages = pages
            .into_iter()
            .enumerate()
            .map(|(index, text)| CorpusPage::new(index as u32 + 1, text.into(), &normalizer))
            .collect();
        Self { pages, normalizer }
    }

    /// Build a corpus from explicitly numbered pages.
    ///
    /// Entries may arrive in any order, but the numbers must form the
    /// contiguous range `1..=n` with no duplicates.
    pub fn from_numbered<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (i64, S)>,
        S: Into<String>,
    {
        let mut numbered = Vec::new();
        for (number, text) in entries {
            let number = u32::try_from(number)
                .ok()
                .filter(|n| *n >= 1)
                .ok_or(Error::InvalidPageNumber(number))?;
            numbered.push((number, text.into()));
        }
        numbered.sort_by_key(|(number, _)| *number);

        for (index, (number, _)) in numbered.iter().enumerate() {
            let expected = index as u32 + 1;
            if *number != expected {
                let problem = if *number < expected {
                    format!("page {} appears more than once", number)
                } else {
                    format!("expected page {}, found page {}", expected, number)
                };
                return Err(Error::InvalidCorpus(problem));
            }
        }

        Ok(Self::from_pages(numbered.into_iter().map(|(_, text)| text)))
    }

    /// Split `pdftotext`-style output into pages on form feeds.
    ///
    /// The empty segment after a trailing form feed is not a page.
    pub fn from_form_feed(text: &str) -> Self {
        if text.is_empty() {
            return Self::new();
        }
        let body = text.strip_suffix(FORM_FEED).unwrap_or(text);
        Self::from_pages(body.split(FORM_FEED))
    }

    /// Recompute the comparison forms with a different normalizer.
    pub fn with_normalizer(self, normalizer: TextNormalizer) -> Self {
        let pages = self
            .pages
            .into_iter()
            .map(|page| CorpusPage::new(page.number, page.raw, &normalizer))
            .collect();
        Self { pages, normalizer }
    }

    /// The normalizer the comparison forms were computed with.
    pub fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    /// Number of pages.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Highest page number, 0 for an empty corpus.
    pub fn max_page(&self) -> u32 {
        self.page_count()
    }

    /// Check if the corpus has no pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Get a page by number (1-indexed).
    pub fn get_page(&self, number: u32) -> Option<&CorpusPage> {
        if number == 0 {
            return None;
        }
        self.pages.get((number - 1) as usize)
    }

    /// All pages in ascending order.
    pub fn pages(&self) -> &[CorpusPage] {
        &self.pages
    }

    /// Pages strictly after `last_found_page`, ascending.
    ///
    /// With `last_found_page == 0` this is the whole corpus.
    pub fn pages_after(&self, last_found_page: u32) -> &[CorpusPage] {
        self.pages
            .get(last_found_page as usize..)
            .unwrap_or(&[])
    }
}

impl Default for PageCorpus {
    fn default() -> Self {
        Self::new()
    }
}
