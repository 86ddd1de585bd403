//! Fence-aware heading scanning.
//!
//! Template bodies are partitioned by `##` headings into sections, and the
//! `skills`/`agents` sections by `###` headings into named entries. Headings
//! that appear inside fenced code blocks are ignored.

use super::fence::FenceState;

/// Heading depth to scan for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    /// `## name`: a top-level template section. Names are lowercased.
    Section,
    /// `### name`: a named entry inside a section. Names keep their case.
    Subsection,
}

impl HeadingLevel {
    /// Marker that starts a heading of this level, including the trailing space.
    pub fn marker(self) -> &'static str {
        match self {
            Self::Section => "## ",
            Self::Subsection => "### ",
        }
    }

    /// Heading name if `trimmed` is a heading of this level.
    fn heading_name(self, trimmed: &str) -> Option<String> {
        let rest = trimmed.strip_prefix(self.marker())?;
        if rest.is_empty() {
            return None;
        }

        let name = rest.trim();
        Some(match self {
            Self::Section => name.to_lowercase(),
            Self::Subsection => name.to_string(),
        })
    }
}

/// A heading found in a text, with byte offsets into that text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionBoundary {
    /// Heading name (lowercased for sections).
    pub name: String,
    /// Byte offset of the start of the heading line.
    pub start_offset: usize,
    /// Byte length of the heading line, excluding its newline.
    pub heading_length: usize,
}

impl SectionBoundary {
    /// Byte offset just past the heading line.
    pub fn content_start(&self) -> usize {
        self.start_offset + self.heading_length
    }
}

/// Find all headings of `level` in `text`, in source order.
///
/// Lines are matched after trimming, so indented headings count. Lines inside
/// fenced blocks (including the fence lines themselves) never match.
pub fn scan_headings(text: &str, level: HeadingLevel) -> Vec<SectionBoundary> {
    let mut boundaries = Vec::new();
    let mut fence = FenceState::Outside;
    let mut offset = 0;

    for line in text.split('\n') {
        fence = fence.advance(line);

        if !fence.is_inside() {
            if let Some(name) = level.heading_name(line.trim()) {
                boundaries.push(SectionBoundary {
                    name,
                    start_offset: offset,
                    heading_length: line.len(),
                });
            }
        }

        offset += line.len() + 1;
    }

    boundaries
}

/// Slice the content belonging to each boundary, parallel to `boundaries`.
///
/// Boundary *i* owns the text from the end of its heading line up to the start
/// of boundary *i + 1* (or the end of `text`), trimmed.
pub fn section_spans<'t>(text: &'t str, boundaries: &[SectionBoundary]) -> Vec<&'t str> {
    boundaries
        .iter()
        .enumerate()
        .map(|(i, boundary)| {
            let end = boundaries
                .get(i + 1)
                .map_or(text.len(), |next| next.start_offset);
            let start = boundary.content_start().min(end);
            text[start..end].trim()
        })
        .collect()
}
