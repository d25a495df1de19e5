//! Document model types for heading resolution.
//!
//! This module defines the inputs handed over by the conversion layer
//! (headings and the page corpus) and the resolved outline produced by
//! the resolver.

mod corpus;
mod heading;
mod outline;

pub use corpus::{CorpusPage, PageCorpus};
pub use heading::{is_meaningful, Heading, HeadingLevel, MIN_HEADING_CHARS};
pub use outline::{Outline, OutlineEntry};
