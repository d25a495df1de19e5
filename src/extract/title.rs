//! Title heuristics shared by the extractors.

use std::path::Path;

/// Words that mark a short block of text as a probable document title.
pub const TITLE_KEYWORDS: [&str; 5] = ["overview", "guide", "manual", "document", "report"];

/// Title used when nothing better is available.
pub const UNTITLED: &str = "Untitled";

/// Check whether every cased word starts upper-case and continues lower-case.
///
/// Characters without case separate words, so "Step-By-Step" and "Part 2"
/// are title case. Text without any cased character is not.
pub fn is_title_case(text: &str) -> bool {
    let mut seen_cased = false;
    let mut previous_cased = false;

    for c in text.chars() {
        if c.is_uppercase() {
            if previous_cased {
                return false;
            }
            previous_cased = true;
            seen_cased = true;
        } else if c.is_lowercase() {
            if !previous_cased {
                return false;
            }
            previous_cased = true;
            seen_cased = true;
        } else {
            previous_cased = false;
        }
    }

    seen_cased
}

/// Upper-case the first letter of every word and lower-case the rest.
pub fn to_title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut previous_cased = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if previous_cased {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            previous_cased = true;
        } else {
            result.push(c);
            previous_cased = false;
        }
    }

    result
}

/// Whether a block of text looks like a document title.
///
/// It must be 11 to 99 characters long and either be title case or mention
/// one of [`TITLE_KEYWORDS`].
pub fn looks_like_title(text: &str) -> bool {
    let length = text.chars().count();
    if length <= 10 || length >= 100 {
        return false;
    }
    if is_title_case(text) {
        return true;
    }
    let lowered = text.to_lowercase();
    TITLE_KEYWORDS.iter().any(|keyword| lowered.contains(keyword))
}

/// Derive a title from a file name: "annual_report-2024.pdf" → "Annual Report 2024".
pub fn title_from_path(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_string_lossy();
    let spaced = stem.replace(['_', '-'], " ");
    let title = to_title_case(spaced.trim());
    if title.is_empty() {
        None
    } else {
        Some(title)
    }
}
