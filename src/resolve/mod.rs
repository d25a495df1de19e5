//! Heading-to-page resolution.
//!
//! The [`OutlineBuilder`] walks the heading list in document order. For each
//! heading the [`HeadingLocator`] tries its strategy chain over the pages
//! after the [`ResolutionCursor`]; when nothing matches,
//! [`estimate_page`] supplies a page instead. The cursor moves forward
//! whenever a heading lands beyond it.
//!
//! # Example
//!
//! ```
//! use pagemark::model::{Heading, HeadingLevel, PageCorpus};
//! use pagemark::resolve::{OutlineBuilder, ResolveOptions};
//!
//! let corpus = PageCorpus::from_pages([
//!     "Contents\nIntroduction to Systems",
//!     "Background",
//!     "Introduction to Systems details follow",
//! ]);
//! let builder = OutlineBuilder::new(&corpus, &ResolveOptions::default())?;
//! let resolved = builder.resolve(
//!     "Systems",
//!     vec![Heading::new(HeadingLevel::H1, "Introduction to Systems")?],
//! );
//! assert_eq!(resolved.outline.headings[0].page, 3);
//! # Ok::<(), pagemark::Error>(())
//! ```

mod builder;
mod cursor;
mod estimate;
mod locator;
mod options;
mod report;
mod strategy;

pub use builder::{OutlineBuilder, ResolvedOutline};
pub use cursor::ResolutionCursor;
pub use estimate::{estimate_page, Estimate, EstimateBasis};
pub use locator::{select_candidate, HeadingLocator, Located};
pub use options::{
    ResolveOptions, DEFAULT_MIN_OVERLAP_WORDS, DEFAULT_OVERLAP_THRESHOLD, DEFAULT_PHRASE_WINDOW,
};
pub use report::{HeadingResolution, Resolution, ResolutionReport, ResolutionStats};
pub use strategy::{
    ExactMatch, HeadingQuery, MatchStrategy, PhraseMatch, StrategyKind, WordOverlapMatch,
};
