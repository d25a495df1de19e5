//! Text normalization for heading/page comparison.
//!
//! Two canonical forms are used throughout the crate:
//!
//! - [`normalize`]: lowercase, punctuation replaced by spaces, whitespace
//!   collapsed and trimmed.
//! - [`normalize_strict`]: the same, with digit runs removed, so that
//!   `"3. Overview"` compares equal to a body occurrence of `"Overview"`.
//!
//! A [`TextNormalizer`] can additionally repair common extraction noise
//! (ligatures, words hyphenated across line breaks) before normalizing.

use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;
use unicode_normalization::UnicodeNormalization;

const LIGATURES: [(&str, &str); 7] = [
    ("\u{FB00}", "ff"),  // ﬀ
    ("\u{FB01}", "fi"),  // ﬁ
    ("\u{FB02}", "fl"),  // ﬂ
    ("\u{FB03}", "ffi"), // ﬃ
    ("\u{FB04}", "ffl"), // ﬄ
    ("\u{FB05}", "st"),  // ﬅ
    ("\u{FB06}", "st"),  // ﬆ
];

/// Canonicalizes text into the forms compared by the heading locator.
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    repair: bool,
    non_word: Regex,
    whitespace: Regex,
    digits: Regex,
    hyphen_break: Regex,
}

impl TextNormalizer {
    /// Create a normalizer without text repair.
    pub fn new() -> Self {
        Self {
            repair: false,
            non_word: Regex::new(r"[^\w\s]+").unwrap(),
            whitespace: Regex::new(r"\s+").unwrap(),
            digits: Regex::new(r"\d+").unwrap(),
            hyphen_break: Regex::new(r"(\w)-[ \t]*\r?\n\s*(\w)").unwrap(),
        }
    }

    /// Enable or disable repair of extraction noise before normalizing.
    pub fn with_repair(mut self, repair: bool) -> Self {
        self.repair = repair;
        self
    }

    /// Whether this normalizer repairs text before normalizing.
    pub fn repairs_text(&self) -> bool {
        self.repair
    }

    /// Repair ligatures, Unicode composition and line-break hyphenation.
    ///
    /// Returns the input untouched when repair is disabled.
    pub fn repair<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if !self.repair {
            return Cow::Borrowed(text);
        }

        let mut result: String = text.nfc().collect();
        for (ligature, replacement) in LIGATURES {
            if result.contains(ligature) {
                result = result.replace(ligature, replacement);
            }
        }

        Cow::Owned(self.hyphen_break.replace_all(&result, "$1$2").into_owned())
    }

    /// Lowercase, replace punctuation runs with a space, collapse whitespace, trim.
    pub fn normalize(&self, text: &str) -> String {
        let text = self.repair(text);
        let lowered = text.to_lowercase();
        let spaced = self.non_word.replace_all(&lowered, " ");
        self.collapse(&spaced)
    }

    /// [`normalize`](Self::normalize), then drop digit runs.
    pub fn normalize_strict(&self, text: &str) -> String {
        let normalized = self.normalize(text);
        let without_digits = self.digits.replace_all(&normalized, "");
        self.collapse(&without_digits)
    }

    /// Whitespace tokens of the strict form.
    pub fn words(&self, text: &str) -> Vec<String> {
        self.normalize_strict(text)
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }

    fn collapse(&self, text: &str) -> String {
        self.whitespace.replace_all(text, " ").trim().to_string()
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

fn shared() -> &'static TextNormalizer {
    static NORMALIZER: OnceLock<TextNormalizer> = OnceLock::new();
    NORMALIZER.get_or_init(TextNormalizer::new)
}

/// Normalize text with the default (non-repairing) normalizer.
pub fn normalize(text: &str) -> String {
    shared().normalize(text)
}

/// Strict-normalize text with the default (non-repairing) normalizer.
pub fn normalize_strict(text: &str) -> String {
    shared().normalize_strict(text)
}
