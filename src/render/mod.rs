//! Rendering module for writing resolved outlines.

mod json;
mod text;

pub use json::{serialize, to_json, JsonFormat};
pub use text::to_text;
