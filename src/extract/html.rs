//! Heading and title extraction from converter HTML.

use super::title::{looks_like_title, title_from_path, UNTITLED};
use crate::model::{is_meaningful, Heading, HeadingLevel};
use log::debug;
use scraper::{ElementRef, Html, Selector};
use std::path::Path;

const HEADING_SELECTOR: &str = "h1, h2, h3, h4, h5, h6";
const TITLE_CANDIDATE_SELECTOR: &str = "div, p, span";

/// A parsed HTML rendering of a document.
pub struct HtmlDocument {
    document: Html,
}

impl HtmlDocument {
    /// Parse an HTML document.
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }

    /// All `h1`..`h6` elements in document order.
    ///
    /// Text is whitespace-collapsed; headings with `min_chars` trimmed
    /// characters or fewer are skipped.
    pub fn headings(&self, min_chars: usize) -> Vec<Heading> {
        let Ok(selector) = Selector::parse(HEADING_SELECTOR) else {
            return Vec::new();
        };

        let mut headings = Vec::new();
        for element in self.document.select(&selector) {
            let Some(level) = heading_level(&element) else {
                continue;
            };
            let text = element_text(&element);
            if !is_meaningful(&text, min_chars) {
                debug!("Skipping short heading {:?}", text);
                continue;
            }
            headings.push(Heading { level, text });
        }
        headings
    }

    /// Pick a document title.
    ///
    /// Tries, in order: the `<title>` element, the first `<h1>`, the first
    /// `div`/`p`/`span` that looks like a title, the file name of `source`,
    /// and finally [`UNTITLED`].
    pub fn title(&self, source: Option<&Path>) -> String {
        if let Some(title) = self.first_text("title") {
            return title;
        }
        if let Some(title) = self.first_text("h1") {
            return title;
        }
        if let Some(title) = self.title_like_block() {
            return title;
        }
        source
            .and_then(title_from_path)
            .unwrap_or_else(|| UNTITLED.to_string())
    }

    fn first_text(&self, selector: &str) -> Option<String> {
        let selector = Selector::parse(selector).ok()?;
        let element = self.document.select(&selector).next()?;
        let text = element_text(&element);
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    fn title_like_block(&self) -> Option<String> {
        let selector = Selector::parse(TITLE_CANDIDATE_SELECTOR).ok()?;
        self.document
            .select(&selector)
            .map(|element| element_text(&element))
            .find(|text| looks_like_title(text))
    }
}

/// Extract headings from HTML, skipping text of `min_chars` characters or fewer.
pub fn extract_headings(html: &str, min_chars: usize) -> Vec<Heading> {
    HtmlDocument::parse(html).headings(min_chars)
}

/// Extract a document title from HTML, falling back to the source file name.
pub fn extract_title(html: &str, source: Option<&Path>) -> String {
    HtmlDocument::parse(html).title(source)
}

fn heading_level(element: &ElementRef) -> Option<HeadingLevel> {
    element.value().name().parse().ok()
}

fn element_text(element: &ElementRef) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}
