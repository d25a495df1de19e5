//! Heading and title extraction from converter output.
//!
//! Document converters emit an HTML rendering with `h1`..`h6` elements;
//! this module turns that rendering into the ordered heading list and the
//! title the resolver consumes.

mod html;
mod title;

pub use html::{extract_headings, extract_title, HtmlDocument};
pub use title::{is_title_case, looks_like_title, title_from_path, to_title_case, UNTITLED};
