//! Fallback page estimation for headings the locator could not place.

use super::ResolutionCursor;
use crate::model::OutlineEntry;
use serde::{Deserialize, Serialize};

/// What an estimated page was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstimateBasis {
    /// The page after the resolution cursor
    Cursor,
    /// The page after the most recent processed heading
    PriorHeading,
    /// Nothing to go on; page 1
    FirstPage,
}

/// An estimated page and its basis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Estimate {
    /// Estimated page (always ≥ 1)
    pub page: u32,

    /// What the estimate is based on
    pub basis: EstimateBasis,
}

/// Estimate a page for an unresolved heading.
///
/// Returns the page after the cursor, or else after the latest processed
/// heading, clamped to the last page of the corpus. With neither, or with
/// an empty corpus and no history, the estimate is page 1.
pub fn estimate_page(
    cursor: ResolutionCursor,
    max_page: u32,
    processed: &[OutlineEntry],
) -> Estimate {
    let ceiling = max_page.max(1);

    if !cursor.is_initial() {
        return Estimate {
            page: next_page(cursor.last_found_page(), ceiling),
            basis: EstimateBasis::Cursor,
        };
    }

    match processed.iter().rev().map(|entry| entry.page).find(|p| *p > 0) {
        Some(prior) => Estimate {
            page: next_page(prior, ceiling),
            basis: EstimateBasis::PriorHeading,
        },
        None => Estimate {
            page: 1,
            basis: EstimateBasis::FirstPage,
        },
    }
}

fn next_page(page: u32, ceiling: u32) -> u32 {
    page.saturating_add(1).min(ceiling)
}
