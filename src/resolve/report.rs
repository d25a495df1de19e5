//! Per-heading diagnostics collected during resolution.

use super::EstimateBasis;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How a heading got its page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Resolution {
    /// A match strategy confirmed the page
    Matched {
        /// Strategy name
        strategy: String,
        /// Candidates of that strategy, best first
        candidates: Vec<u32>,
    },

    /// No strategy matched; the page was estimated
    Estimated {
        /// What the estimate is based on
        basis: EstimateBasis,
    },
}

impl Resolution {
    /// Check if the page was confirmed by a strategy.
    pub fn is_matched(&self) -> bool {
        matches!(self, Resolution::Matched { .. })
    }

    /// Name of the matching strategy, if any.
    pub fn strategy(&self) -> Option<&str> {
        match self {
            Resolution::Matched { strategy, .. } => Some(strategy),
            Resolution::Estimated { .. } => None,
        }
    }
}

/// Diagnostic record for one heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingResolution {
    /// Position of the heading in the input
    pub index: usize,

    /// Heading text
    pub text: String,

    /// Assigned page
    pub page: u32,

    /// How the page was obtained
    pub resolution: Resolution,
}

/// Counts of resolution outcomes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionStats {
    /// Total number of headings processed
    pub heading_count: u32,

    /// Headings matched, per strategy name
    pub matched: BTreeMap<String, u32>,

    /// Headings that fell back to an estimated page
    pub estimated: u32,
}

impl ResolutionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one resolution outcome.
    pub fn record(&mut self, resolution: &Resolution) {
        self.heading_count += 1;
        match resolution {
            Resolution::Matched { strategy, .. } => {
                *self.matched.entry(strategy.clone()).or_insert(0) += 1;
            }
            Resolution::Estimated { .. } => self.estimated += 1,
        }
    }

    /// Number of headings confirmed by any strategy.
    pub fn matched_count(&self) -> u32 {
        self.matched.values().sum()
    }

    /// Fraction of headings confirmed by a strategy (1.0 when there are none).
    pub fn match_rate(&self) -> f64 {
        if self.heading_count == 0 {
            return 1.0;
        }
        self.matched_count() as f64 / self.heading_count as f64
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &ResolutionStats) {
        self.heading_count += other.heading_count;
        self.estimated += other.estimated;
        for (strategy, count) in &other.matched {
            *self.matched.entry(strategy.clone()).or_insert(0) += count;
        }
    }
}

/// Diagnostics for one document's resolution pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionReport {
    /// One record per heading, in input order
    pub headings: Vec<HeadingResolution>,

    /// Aggregate counts
    pub stats: ResolutionStats,
}

impl ResolutionReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a heading record and count it.
    pub fn push(&mut self, record: HeadingResolution) {
        self.stats.record(&record.resolution);
        self.headings.push(record);
    }

    /// Records of headings whose page was estimated.
    pub fn estimated(&self) -> impl Iterator<Item = &HeadingResolution> {
        self.headings
            .iter()
            .filter(|record| !record.resolution.is_matched())
    }
}
