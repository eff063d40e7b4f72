//! Paragraph splitting for step content.

/// Separator between paragraphs inside a step's content.
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Split a step's content into paragraph units.
///
/// Splits on the exact two-newline separator and keeps every other character
/// verbatim: single newlines, leading and trailing spaces and runs of extra
/// separators all survive. Empty content has no paragraphs.
pub fn split_paragraphs(content: &str) -> Vec<&str> {
    if content.is_empty() {
        return Vec::new();
    }
    content.split(PARAGRAPH_SEPARATOR).collect()
}
