//! Outline builder: one sequential resolution pass over a document's headings.

use super::locator::preview;
use super::{
    estimate_page, HeadingLocator, HeadingResolution, Resolution, ResolutionCursor,
    ResolutionReport, ResolveOptions,
};
use crate::error::Result;
use crate::model::{Heading, Outline, OutlineEntry, PageCorpus};
use log::{info, warn};

/// Result of resolving one document.
#[derive(Debug, Clone)]
pub struct ResolvedOutline {
    /// Title and headings with pages
    pub outline: Outline,

    /// How each heading was resolved
    pub report: ResolutionReport,
}

/// Resolves a document's headings against its page corpus.
///
/// The builder borrows the corpus read-only; every call to
/// [`resolve`](Self::resolve) starts from a fresh cursor, so one builder can
/// be reused and repeated passes give identical output.
#[derive(Debug)]
pub struct OutlineBuilder<'a> {
    corpus: &'a PageCorpus,
    locator: HeadingLocator,
}

impl<'a> OutlineBuilder<'a> {
    /// Create a builder over `corpus`.
    ///
    /// The corpus keeps the normalizer it was built with; use
    /// [`PageCorpus::with_normalizer`] with [`ResolveOptions::normalizer`]
    /// to apply `repair_text`.
    pub fn new(corpus: &'a PageCorpus, options: &ResolveOptions) -> Result<Self> {
        Ok(Self {
            corpus,
            locator: HeadingLocator::new(options)?,
        })
    }

    /// Create a builder with a custom locator.
    pub fn with_locator(corpus: &'a PageCorpus, locator: HeadingLocator) -> Self {
        Self { corpus, locator }
    }

    /// The corpus being searched.
    pub fn corpus(&self) -> &PageCorpus {
        self.corpus
    }

    /// Resolve every heading, in order, and assemble the outline.
    pub fn resolve<I>(&self, title: impl Into<String>, headings: I) -> ResolvedOutline
    where
        I: IntoIterator<Item = Heading>,
    {
        let mut outline = Outline::new(title);
        let mut report = ResolutionReport::new();
        let mut cursor = ResolutionCursor::new();

        for (index, heading) in headings.into_iter().enumerate() {
            let (page, resolution) = self.resolve_one(&heading.text, cursor, &outline.headings);
            cursor.advance(page);

            report.push(HeadingResolution {
                index,
                text: heading.text.clone(),
                page,
                resolution,
            });
            outline
                .headings
                .push(OutlineEntry::new(heading.level, heading.text, page));
        }

        info!(
            "Resolved {} headings: {} matched, {} estimated",
            report.stats.heading_count,
            report.stats.matched_count(),
            report.stats.estimated
        );

        ResolvedOutline { outline, report }
    }

    /// Resolve a single heading given the cursor and the headings before it.
    pub fn resolve_one(
        &self,
        text: &str,
        cursor: ResolutionCursor,
        processed: &[OutlineEntry],
    ) -> (u32, Resolution) {
        if let Some(located) = self.locator.locate(text, self.corpus, cursor) {
            info!("Found '{}' on page {}", preview(text), located.page);
            return (
                located.page,
                Resolution::Matched {
                    strategy: located.strategy,
                    candidates: located.candidates,
                },
            );
        }

        let estimate = estimate_page(cursor, self.corpus.max_page(), processed);
        warn!(
            "Could not locate '{}', estimating page {} ({:?})",
            preview(text),
            estimate.page,
            estimate.basis
        );
        (
            estimate.page,
            Resolution::Estimated {
                basis: estimate.basis,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::HeadingLevel;
    use crate::resolve::EstimateBasis;

    fn heading(level: HeadingLevel, text: &str) -> Heading {
        Heading::new(level, text).unwrap()
    }

    fn sample_corpus() -> PageCorpus {
        PageCorpus::from_pages([
            "Project Plan\nTable of Contents\n1. Introduction 3\n2. Timeline 4\n3. Budget 5",
            "Revision history",
            "1. Introduction\nThis plan describes the project.",
            "2. Timeline\nMilestones follow.",
            "3. Budget\nCosts are estimated below.",
        ])
    }

    #[test]
    fn test_resolve_sequence() {
        let corpus = sample_corpus();
        let builder = OutlineBuilder::new(&corpus, &ResolveOptions::default()).unwrap();
        let resolved = builder.resolve(
            "Project Plan",
            vec![
                heading(HeadingLevel::H1, "1. Introduction"),
                heading(HeadingLevel::H1, "2. Timeline"),
                heading(HeadingLevel::H1, "3. Budget"),
            ],
        );

        let pages: Vec<u32> = resolved.outline.headings.iter().map(|h| h.page).collect();
        assert_eq!(pages, vec![3, 4, 5]);
        assert_eq!(resolved.outline.title, "Project Plan");
        assert_eq!(resolved.report.stats.matched["exact"], 3);
        assert_eq!(resolved.report.stats.estimated, 0);
    }

    #[test]
    fn test_unresolved_heading_uses_cursor_estimate() {
        let corpus = sample_corpus();
        let builder = OutlineBuilder::new(&corpus, &ResolveOptions::default()).unwrap();
        let resolved = builder.resolve(
            "Project Plan",
            vec![
                heading(HeadingLevel::H1, "1. Introduction"),
                heading(HeadingLevel::H2, "Stakeholders"),
                heading(HeadingLevel::H1, "3. Budget"),
            ],
        );

        let pages: Vec<u32> = resolved.outline.headings.iter().map(|h| h.page).collect();
        assert_eq!(pages, vec![3, 4, 5]);
        assert_eq!(
            resolved.report.headings[1].resolution,
            Resolution::Estimated {
                basis: EstimateBasis::Cursor
            }
        );
    }

    #[test]
    fn test_first_unresolved_heading_is_page_one() {
        let corpus = sample_corpus();
        let builder = OutlineBuilder::new(&corpus, &ResolveOptions::default()).unwrap();
        let resolved = builder.resolve("Plan", vec![heading(HeadingLevel::H1, "Foreword")]);
        assert_eq!(resolved.outline.headings[0].page, 1);
        assert_eq!(
            resolved.report.headings[0].resolution,
            Resolution::Estimated {
                basis: EstimateBasis::FirstPage
            }
        );
    }

    #[test]
    fn test_resolve_is_repeatable() {
        let corpus = sample_corpus();
        let builder = OutlineBuilder::new(&corpus, &ResolveOptions::default()).unwrap();
        let headings = vec![
            heading(HeadingLevel::H1, "1. Introduction"),
            heading(HeadingLevel::H1, "Unknown Section"),
            heading(HeadingLevel::H1, "3. Budget"),
        ];

        let first = builder.resolve("Plan", headings.clone());
        let second = builder.resolve("Plan", headings);
        assert_eq!(first.outline, second.outline);
        assert_eq!(first.report, second.report);
    }

    #[test]
    fn test_empty_heading_list() {
        let corpus = sample_corpus();
        let builder = OutlineBuilder::new(&corpus, &ResolveOptions::default()).unwrap();
        let resolved = builder.resolve("Plan", Vec::new());
        assert!(resolved.outline.is_empty());
        assert_eq!(resolved.report.stats.heading_count, 0);
    }

    #[test]
    fn test_builder_rejects_invalid_options() {
        let corpus = PageCorpus::new();
        let options = ResolveOptions::new().with_phrase_window(0);
        assert!(OutlineBuilder::new(&corpus, &options).is_err());
    }
}
