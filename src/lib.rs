//! # pagemark
//!
//! Reconciles the headings extracted from a document with the physical
//! pages they appear on.
//!
//! Document converters usually recover the heading structure of a PDF but
//! lose track of page numbers. Given the ordered headings and the plain
//! text of every page, pagemark finds the page each heading legitimately
//! starts on, skipping table-of-contents duplicates and tolerating noisy
//! text reconstruction.
//!
//! ## Quick Start
//!
//! ```
//! use pagemark::{resolve_outline, Heading, HeadingLevel, PageCorpus};
//!
//! fn main() -> pagemark::Result<()> {
//!     let corpus = PageCorpus::from_pages([
//!         "Contents\n1. Overview ..... 2",
//!         "1. Overview\nThis guide explains the product.",
//!     ]);
//!     let headings = vec![Heading::new(HeadingLevel::H1, "1. Overview")?];
//!
//!     let outline = resolve_outline("Product Guide", headings, &corpus)?;
//!     assert_eq!(outline.headings[0].page, 2);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Ordered match strategies**: exact, word overlap, sliding phrase
//! - **Table-of-contents aware**: the first hit of the first heading is skipped
//! - **Forward-only search**: headings never resolve behind earlier ones
//! - **Never fails**: unmatched headings get an estimated page
//! - **Diagnostics**: per-heading report of how each page was found
//! - **Batch processing**: documents resolved in parallel with Rayon

pub mod error;
pub mod extract;
pub mod model;
pub mod normalize;
pub mod render;
pub mod resolve;
pub mod source;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{CorpusPage, Heading, HeadingLevel, Outline, OutlineEntry, PageCorpus};
pub use normalize::{normalize, normalize_strict, TextNormalizer};
pub use render::JsonFormat;
pub use resolve::{
    OutlineBuilder, Resolution, ResolutionReport, ResolutionStats, ResolveOptions,
    ResolvedOutline, StrategyKind,
};
pub use source::{load_corpus, DocumentSource, HeadingInput, PagesInput};

use rayon::prelude::*;
use std::path::Path;

/// Resolve headings against a corpus with default options.
///
/// # Example
///
/// ```
/// use pagemark::{resolve_outline, Heading, HeadingLevel, PageCorpus};
///
/// let corpus = PageCorpus::from_pages(["foo", "bar baz qux"]);
/// let headings = vec![Heading::new(HeadingLevel::H2, "Bar Baz").unwrap()];
/// let outline = resolve_outline("Doc", headings, &corpus).unwrap();
/// assert_eq!(outline.headings[0].page, 2);
/// ```
pub fn resolve_outline<I>(title: &str, headings: I, corpus: &PageCorpus) -> Result<Outline>
where
    I: IntoIterator<Item = Heading>,
{
    let builder = OutlineBuilder::new(corpus, &ResolveOptions::default())?;
    Ok(builder.resolve(title, headings).outline)
}

/// Resolve headings with custom options.
///
/// The corpus is re-normalized first when `options.repair_text` differs
/// from the normalizer it was built with.
pub fn resolve_with_options<I>(
    title: &str,
    headings: I,
    corpus: PageCorpus,
    options: &ResolveOptions,
) -> Result<ResolvedOutline>
where
    I: IntoIterator<Item = Heading>,
{
    let corpus = if corpus.normalizer().repairs_text() == options.repair_text {
        corpus
    } else {
        corpus.with_normalizer(options.normalizer())
    };
    let builder = OutlineBuilder::new(&corpus, options)?;
    Ok(builder.resolve(title, headings))
}

/// Resolve a [`DocumentSource`].
///
/// A missing title becomes [`extract::UNTITLED`].
pub fn resolve_source(source: &DocumentSource, options: &ResolveOptions) -> Result<ResolvedOutline> {
    options.validate()?;
    let corpus = source.corpus()?;
    let headings = source.headings(options.min_heading_chars);
    let title = source.title_or(extract::UNTITLED);
    resolve_with_options(&title, headings, corpus, options)
}

/// Resolve the headings of a converter's HTML rendering.
///
/// The title comes from the HTML, falling back to `source_path`'s file name.
pub fn resolve_html(
    html: &str,
    corpus: PageCorpus,
    source_path: Option<&Path>,
    options: &ResolveOptions,
) -> Result<ResolvedOutline> {
    options.validate()?;
    let document = extract::HtmlDocument::parse(html);
    let headings = document.headings(options.min_heading_chars);
    let title = document.title(source_path);
    resolve_with_options(&title, headings, corpus, options)
}

/// Resolve many documents in parallel.
///
/// Each document gets its own corpus and cursor. Results are returned in
/// input order, paired with the caller's name for each source.
pub fn resolve_batch<N>(
    sources: Vec<(N, DocumentSource)>,
    options: &ResolveOptions,
) -> Vec<(N, Result<ResolvedOutline>)>
where
    N: Send,
{
    sources
        .into_par_iter()
        .map(|(name, source)| {
            let result = resolve_source(&source, options);
            (name, result)
        })
        .collect()
}
