//! Frontmatter splitting.
//!
//! A template starts with an optional metadata block delimited by `---`
//! lines. The splitter only locates the block; the metadata grammar lives in
//! [`super::metadata`].

use std::borrow::Cow;

/// Delimiter line for the metadata block.
pub const DELIMITER: &str = "---";

/// A document split into its metadata text and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frontmatter<'a> {
    /// Lines between the delimiters, joined by `\n`. Empty when there is no block.
    pub metadata_text: Cow<'a, str>,
    /// Everything after the closing delimiter, or the whole input.
    pub body: Cow<'a, str>,
    present: bool,
}

impl<'a> Frontmatter<'a> {
    fn absent(text: &'a str) -> Self {
        Self {
            metadata_text: Cow::Borrowed(""),
            body: Cow::Borrowed(text),
            present: false,
        }
    }

    /// Check if a metadata block was found.
    pub fn is_present(&self) -> bool {
        self.present
    }
}

/// Split `text` into metadata text and body.
///
/// The first line must be exactly `---` (surrounding whitespace ignored). An
/// unterminated block is treated as no block at all: the body is the whole
/// input, opening delimiter included.
pub fn split_frontmatter(text: &str) -> Frontmatter<'_> {
    let lines: Vec<&str> = text.split('\n').collect();

    if lines.first().map(|l| l.trim()) != Some(DELIMITER) {
        return Frontmatter::absent(text);
    }

    let Some(end) = lines
        .iter()
        .skip(1)
        .position(|l| l.trim() == DELIMITER)
        .map(|i| i + 1)
    else {
        tracing::trace!("Frontmatter opened but never closed; treating as body");
        return Frontmatter::absent(text);
    };

    Frontmatter {
        metadata_text: Cow::Owned(lines[1..end].join("\n")),
        body: Cow::Owned(lines[end + 1..].join("\n")),
        present: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_frontmatter_returns_input_text() {
        let text = "## claude_md\nHello\n";
        let fm = split_frontmatter(text);
        assert_eq!(fm.metadata_text, "");
        assert_eq!(fm.body, text);
        assert!(!fm.is_present());
    }

    #[test]
    fn splits_metadata_and_body() {
        let text = "---\nid: foo\nversion: 2\n---\n## claude_md\nBody";
        let fm = split_frontmatter(text);
        assert_eq!(fm.metadata_text, "id: foo\nversion: 2");
        assert_eq!(fm.body, "## claude_md\nBody");
        assert!(fm.is_present());
    }

    #[test]
    fn unterminated_frontmatter_keeps_whole_text() {
        let text = "---\nid: foo\n## claude_md\nBody";
        let fm = split_frontmatter(text);
        assert_eq!(fm.metadata_text, "");
        assert_eq!(fm.body, text);
    }

    #[test]
    fn delimiters_tolerate_surrounding_whitespace() {
        let text = "---  \r\nid: foo\r\n  ---\r\nBody";
        let fm = split_frontmatter(text);
        assert_eq!(fm.metadata_text, "id: foo\r");
        assert_eq!(fm.body, "Body");
    }

    #[test]
    fn empty_metadata_block() {
        let fm = split_frontmatter("---\n---\nBody");
        assert_eq!(fm.metadata_text, "");
        assert_eq!(fm.body, "Body");
        assert!(fm.is_present());
    }

    #[test]
    fn closing_delimiter_on_last_line_gives_empty_body() {
        let fm = split_frontmatter("---\nid: x\n---");
        assert_eq!(fm.metadata_text, "id: x");
        assert_eq!(fm.body, "");
    }

    #[test]
    fn delimiter_not_on_first_line_is_ignored() {
        let text = "\n---\nid: x\n---\n";
        let fm = split_frontmatter(text);
        assert_eq!(fm.body, text);
    }

    #[test]
    fn empty_input() {
        let fm = split_frontmatter("");
        assert_eq!(fm.metadata_text, "");
        assert_eq!(fm.body, "");
    }
}
