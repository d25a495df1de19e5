//! Human-readable outline tree.

use crate::model::{HeadingLevel, Outline};

const RULE_WIDTH: usize = 60;

/// Render an outline as an indented tree.
///
/// ```text
/// ============================================================
/// DOCUMENT TITLE: Project Plan
/// ============================================================
/// HEADINGS (2 found):
/// ------------------------------------------------------------
/// ■ [H1] Introduction (Page 3)
///   ▪ [H2] Scope (Page 4)
/// ```
pub fn to_text(outline: &Outline) -> String {
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);

    let mut lines = vec![
        heavy.clone(),
        format!("DOCUMENT TITLE: {}", outline.title),
        heavy,
        format!("HEADINGS ({} found):", outline.len()),
        light,
    ];

    for entry in &outline.headings {
        let indent = "  ".repeat(usize::from(entry.level.depth() - 1));
        lines.push(format!(
            "{}{} [{}] {} (Page {})",
            indent,
            marker(entry.level),
            entry.level,
            entry.text,
            entry.page
        ));
    }

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

fn marker(level: HeadingLevel) -> &'static str {
    match level {
        HeadingLevel::H1 => "■",
        HeadingLevel::H2 => "▪",
        _ => "•",
    }
}
