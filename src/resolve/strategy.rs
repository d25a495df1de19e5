//! Match strategies for locating a heading in the corpus.
//!
//! Each strategy inspects the pages of the search window and returns the
//! qualifying page numbers, best first. The locator tries strategies in
//! order and stops at the first one that produces candidates.

use super::ResolveOptions;
use crate::model::CorpusPage;
use crate::normalize::TextNormalizer;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A heading prepared for matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingQuery {
    /// Heading text as extracted
    pub text: String,

    /// Strict-normalized heading text
    pub strict: String,

    /// Whitespace tokens of the strict form
    pub words: Vec<String>,
}

impl HeadingQuery {
    /// Prepare `text` with the corpus normalizer.
    pub fn new(text: &str, normalizer: &TextNormalizer) -> Self {
        let strict = normalizer.normalize_strict(text);
        let words = strict.split_whitespace().map(str::to_string).collect();
        Self {
            text: text.to_string(),
            strict,
            words,
        }
    }

    /// Number of words in the strict form.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}

/// Trait for heading match strategies.
///
/// Implement this trait to add a strategy to the locator chain.
pub trait MatchStrategy: Send + Sync {
    /// Short identifier used in logs and reports.
    fn name(&self) -> &str;

    /// Pages of `window` that match `query`, ranked best first.
    ///
    /// `window` is in ascending page order. An empty result means the
    /// strategy found nothing and the next one should be tried.
    fn attempt(&self, query: &HeadingQuery, window: &[CorpusPage]) -> Vec<u32>;
}

/// Built-in strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Strict heading text is a substring of the strict page text
    Exact,
    /// Most heading words occur on the page
    WordOverlap,
    /// A run of consecutive heading words occurs on the page
    Phrase,
}

impl StrategyKind {
    /// The default chain: exact, then word overlap, then phrase.
    pub const DEFAULT_CHAIN: [StrategyKind; 3] = [
        StrategyKind::Exact,
        StrategyKind::WordOverlap,
        StrategyKind::Phrase,
    ];

    /// Identifier reported by the strategy.
    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::Exact => ExactMatch::NAME,
            StrategyKind::WordOverlap => WordOverlapMatch::NAME,
            StrategyKind::Phrase => PhraseMatch::NAME,
        }
    }

    /// Instantiate the strategy with parameters from `options`.
    pub fn build(self, options: &ResolveOptions) -> Box<dyn MatchStrategy> {
        match self {
            StrategyKind::Exact => Box::new(ExactMatch),
            StrategyKind::WordOverlap => Box::new(WordOverlapMatch::new(
                options.overlap_threshold,
                options.min_overlap_words,
            )),
            StrategyKind::Phrase => Box::new(PhraseMatch::new(options.phrase_window)),
        }
    }
}

/// Literal substring match on strict-normalized text.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactMatch;

impl ExactMatch {
    /// Strategy identifier.
    pub const NAME: &'static str = "exact";
}

impl MatchStrategy for ExactMatch {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn attempt(&self, query: &HeadingQuery, window: &[CorpusPage]) -> Vec<u32> {
        // An empty strict form (digits and punctuation only) is contained in every page.
        window
            .iter()
            .filter(|page| page.strict.contains(query.strict.as_str()))
            .map(|page| page.number)
            .collect()
    }
}

/// Majority word-overlap match, ranked by the fraction of words found.
#[derive(Debug, Clone, Copy)]
pub struct WordOverlapMatch {
    threshold: f64,
    min_words: usize,
}

impl WordOverlapMatch {
    /// Strategy identifier.
    pub const NAME: &'static str = "word_overlap";

    /// Create a word-overlap strategy.
    pub fn new(threshold: f64, min_words: usize) -> Self {
        Self {
            threshold,
            min_words,
        }
    }

    /// Fraction of `words` contained in `text`.
    pub fn overlap(words: &[String], text: &str) -> f64 {
        if words.is_empty() {
            return 0.0;
        }
        let found = words
            .iter()
            .filter(|word| text.contains(word.as_str()))
            .count();
        found as f64 / words.len() as f64
    }
}

impl MatchStrategy for WordOverlapMatch {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn attempt(&self, query: &HeadingQuery, window: &[CorpusPage]) -> Vec<u32> {
        if query.word_count() < self.min_words {
            return Vec::new();
        }

        let mut scored: Vec<(u32, f64)> = window
            .iter()
            .map(|page| (page.number, Self::overlap(&query.words, &page.normalized)))
            .filter(|(_, fraction)| *fraction >= self.threshold)
            .collect();

        // Stable sort keeps ascending page order among equal fractions.
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        scored.into_iter().map(|(number, _)| number).collect()
    }
}

/// Sliding phrase match over consecutive heading words.
#[derive(Debug, Clone, Copy)]
pub struct PhraseMatch {
    window: usize,
}

impl PhraseMatch {
    /// Strategy identifier.
    pub const NAME: &'static str = "phrase";

    /// Create a phrase strategy with the given phrase length.
    pub fn new(window: usize) -> Self {
        Self { window }
    }

    /// All phrases of `window` consecutive words, in heading order.
    pub fn phrases(words: &[String], window: usize) -> Vec<String> {
        if window == 0 || words.len() < window {
            return Vec::new();
        }
        words.windows(window).map(|run| run.join(" ")).collect()
    }
}

impl MatchStrategy for PhraseMatch {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn attempt(&self, query: &HeadingQuery, window: &[CorpusPage]) -> Vec<u32> {
        let phrases = Self::phrases(&query.words, self.window);
        if phrases.is_empty() {
            return Vec::new();
        }

        window
            .iter()
            .filter(|page| {
                phrases
                    .iter()
                    .any(|phrase| page.normalized.contains(phrase.as_str()))
            })
            .map(|page| page.number)
            .collect()
    }
}
