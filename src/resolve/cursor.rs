//! The resolution cursor.

use serde::{Deserialize, Serialize};

/// Page of the most recently confirmed heading in one document.
///
/// Starts at 0 (nothing resolved) and only moves forward. Each document
/// resolution owns its own cursor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ResolutionCursor {
    last_found_page: u32,
}

impl ResolutionCursor {
    /// A cursor before any heading has resolved.
    pub fn new() -> Self {
        Self::default()
    }

    /// A cursor positioned at `page`.
    pub fn at(page: u32) -> Self {
        Self {
            last_found_page: page,
        }
    }

    /// Page of the last confirmed heading, 0 if none.
    pub fn last_found_page(self) -> u32 {
        self.last_found_page
    }

    /// True until the first heading has resolved.
    pub fn is_initial(self) -> bool {
        self.last_found_page == 0
    }

    /// First page of the forward search window.
    pub fn search_start(self) -> u32 {
        self.last_found_page + 1
    }

    /// Move to `page` if it lies strictly beyond the cursor.
    ///
    /// Returns whether the cursor moved.
    pub fn advance(&mut self, page: u32) -> bool {
        if page > self.last_found_page {
            self.last_found_page = page;
            true
        } else {
            false
        }
    }
}
