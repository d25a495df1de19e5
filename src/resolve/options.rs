//! Resolution options and configuration.

use super::StrategyKind;
use crate::error::{Error, Result};
use crate::model::MIN_HEADING_CHARS;
use crate::normalize::TextNormalizer;

/// Default fraction of heading words a page must contain for a word-overlap match.
pub const DEFAULT_OVERLAP_THRESHOLD: f64 = 0.70;

/// Default number of consecutive heading words in a sliding phrase.
pub const DEFAULT_PHRASE_WINDOW: usize = 3;

/// Default minimum number of heading words for the word-overlap strategy.
pub const DEFAULT_MIN_OVERLAP_WORDS: usize = 2;

/// Options for resolving headings to pages.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolveOptions {
    /// Minimum fraction of heading words present on a page (word overlap)
    pub overlap_threshold: f64,

    /// Headings with fewer words skip the word-overlap strategy
    pub min_overlap_words: usize,

    /// Phrase length for the sliding-phrase strategy; shorter headings skip it
    pub phrase_window: usize,

    /// Pick the second candidate when several pages match before anything has resolved
    pub skip_first_occurrence: bool,

    /// Strategies in the order they are attempted
    pub strategies: Vec<StrategyKind>,

    /// Repair ligatures and line-break hyphenation before normalizing
    pub repair_text: bool,

    /// Extracted headings with this many trimmed characters or fewer are dropped
    pub min_heading_chars: usize,
}

impl ResolveOptions {
    /// Create new resolve options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the word-overlap threshold.
    pub fn with_overlap_threshold(mut self, threshold: f64) -> Self {
        self.overlap_threshold = threshold;
        self
    }

    /// Set the minimum word count for the word-overlap strategy.
    pub fn with_min_overlap_words(mut self, words: usize) -> Self {
        self.min_overlap_words = words;
        self
    }

    /// Set the sliding phrase length.
    pub fn with_phrase_window(mut self, window: usize) -> Self {
        self.phrase_window = window;
        self
    }

    /// Enable or disable the first-occurrence skip.
    pub fn with_skip_first_occurrence(mut self, skip: bool) -> Self {
        self.skip_first_occurrence = skip;
        self
    }

    /// Set the strategy chain.
    pub fn with_strategies(mut self, strategies: Vec<StrategyKind>) -> Self {
        self.strategies = strategies;
        self
    }

    /// Enable or disable text repair.
    pub fn with_repair(mut self, repair: bool) -> Self {
        self.repair_text = repair;
        self
    }

    /// Set the minimum heading length.
    pub fn with_min_heading_chars(mut self, chars: usize) -> Self {
        self.min_heading_chars = chars;
        self
    }

    /// Check that every option is in range.
    pub fn validate(&self) -> Result<()> {
        if !(self.overlap_threshold > 0.0 && self.overlap_threshold <= 1.0) {
            return Err(Error::InvalidOptions(format!(
                "overlap threshold must be in (0, 1], got {}",
                self.overlap_threshold
            )));
        }
        if self.min_overlap_words == 0 {
            return Err(Error::InvalidOptions(
                "minimum overlap word count must be at least 1".into(),
            ));
        }
        if self.phrase_window == 0 {
            return Err(Error::InvalidOptions(
                "phrase window must be at least 1".into(),
            ));
        }
        if self.strategies.is_empty() {
            return Err(Error::InvalidOptions(
                "at least one match strategy is required".into(),
            ));
        }
        Ok(())
    }

    /// Normalizer matching these options.
    pub fn normalizer(&self) -> TextNormalizer {
        TextNormalizer::new().with_repair(self.repair_text)
    }
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            overlap_threshold: DEFAULT_OVERLAP_THRESHOLD,
            min_overlap_words: DEFAULT_MIN_OVERLAP_WORDS,
            phrase_window: DEFAULT_PHRASE_WINDOW,
            skip_first_occurrence: true,
            strategies: StrategyKind::DEFAULT_CHAIN.to_vec(),
            repair_text: false,
            min_heading_chars: MIN_HEADING_CHARS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = ResolveOptions::default();
        assert_eq!(options.overlap_threshold, 0.70);
        assert_eq!(options.phrase_window, 3);
        assert_eq!(options.min_overlap_words, 2);
        assert!(options.skip_first_occurrence);
        assert!(!options.repair_text);
        assert_eq!(
            options.strategies,
            vec![
                StrategyKind::Exact,
                StrategyKind::WordOverlap,
                StrategyKind::Phrase
            ]
        );
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_resolve_options_builder() {
        let options = ResolveOptions::new()
            .with_overlap_threshold(0.85)
            .with_phrase_window(4)
            .with_skip_first_occurrence(false)
            .with_repair(true)
            .with_strategies(vec![StrategyKind::Exact]);

        assert_eq!(options.overlap_threshold, 0.85);
        assert_eq!(options.phrase_window, 4);
        assert!(!options.skip_first_occurrence);
        assert!(options.normalizer().repairs_text());
        assert_eq!(options.strategies, vec![StrategyKind::Exact]);
    }

    #[test]
    fn test_validate_threshold_range() {
        for bad in [0.0, -0.5, 1.01, f64::NAN] {
            let options = ResolveOptions::new().with_overlap_threshold(bad);
            assert!(matches!(options.validate(), Err(Error::InvalidOptions(_))));
        }
        assert!(ResolveOptions::new()
            .with_overlap_threshold(1.0)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_sizes_and_empty_chain() {
        assert!(ResolveOptions::new().with_phrase_window(0).validate().is_err());
        assert!(ResolveOptions::new()
            .with_min_overlap_words(0)
            .validate()
            .is_err());
        assert!(ResolveOptions::new()
            .with_strategies(Vec::new())
            .validate()
            .is_err());
    }
}
