//! Heading locator: runs the strategy chain over the forward search window.

use super::{HeadingQuery, MatchStrategy, ResolutionCursor, ResolveOptions};
use crate::error::Result;
use crate::model::PageCorpus;
use log::debug;

/// A successful match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Located {
    /// Selected page
    pub page: u32,

    /// Name of the strategy that produced the candidates
    pub strategy: String,

    /// All candidates of that strategy, best first
    pub candidates: Vec<u32>,
}

/// Pick a page from ranked candidates.
///
/// With several candidates on the first search of a document the second
/// one wins, since the first hit is usually a table-of-contents entry.
/// Otherwise the best-ranked candidate wins.
pub fn select_candidate(candidates: &[u32], first_search: bool) -> Option<u32> {
    match candidates {
        [] => None,
        [only] => Some(*only),
        [_, second, ..] if first_search => Some(*second),
        [best, ..] => Some(*best),
    }
}

/// Locates headings in a page corpus.
pub struct HeadingLocator {
    strategies: Vec<Box<dyn MatchStrategy>>,
    skip_first_occurrence: bool,
}

impl HeadingLocator {
    /// Create a locator with the strategy chain described by `options`.
    pub fn new(options: &ResolveOptions) -> Result<Self> {
        options.validate()?;
        let strategies = options
            .strategies
            .iter()
            .map(|kind| kind.build(options))
            .collect();
        Ok(Self {
            strategies,
            skip_first_occurrence: options.skip_first_occurrence,
        })
    }

    /// Create a locator with an explicit strategy chain.
    pub fn with_strategies(
        strategies: Vec<Box<dyn MatchStrategy>>,
        skip_first_occurrence: bool,
    ) -> Self {
        Self {
            strategies,
            skip_first_occurrence,
        }
    }

    /// Append a strategy to the end of the chain.
    pub fn push_strategy(&mut self, strategy: Box<dyn MatchStrategy>) {
        self.strategies.push(strategy);
    }

    /// Names of the strategies in attempt order.
    pub fn strategy_names(&self) -> Vec<&str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Find the page `heading` appears on, searching after the cursor.
    ///
    /// Returns `None` when no strategy yields a candidate.
    pub fn locate(
        &self,
        heading: &str,
        corpus: &PageCorpus,
        cursor: ResolutionCursor,
    ) -> Option<Located> {
        let window = corpus.pages_after(cursor.last_found_page());
        if window.is_empty() {
            debug!(
                "No pages to search for '{}' after page {}",
                preview(heading),
                cursor.last_found_page()
            );
            return None;
        }

        let query = HeadingQuery::new(heading, corpus.normalizer());
        let first_search = self.skip_first_occurrence && cursor.is_initial();

        debug!(
            "Searching '{}' -> '{}' starting from page {}",
            preview(heading),
            preview(&query.strict),
            cursor.search_start()
        );

        for strategy in &self.strategies {
            let candidates = strategy.attempt(&query, window);
            if let Some(page) = select_candidate(&candidates, first_search) {
                debug!(
                    "  {} candidates {:?}, selected page {}",
                    strategy.name(),
                    candidates,
                    page
                );
                return Some(Located {
                    page,
                    strategy: strategy.name().to_string(),
                    candidates,
                });
            }
            debug!("  {} found no candidates", strategy.name());
        }

        None
    }
}

impl std::fmt::Debug for HeadingLocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeadingLocator")
            .field("strategies", &self.strategy_names())
            .field("skip_first_occurrence", &self.skip_first_occurrence)
            .finish()
    }
}

/// First 50 characters of `text`, for log lines.
pub(crate) fn preview(text: &str) -> String {
    const PREVIEW_CHARS: usize = 50;
    if text.chars().count() <= PREVIEW_CHARS {
        return text.to_string();
    }
    let head: String = text.chars().take(PREVIEW_CHARS).collect();
    format!("{}...", head)
}
