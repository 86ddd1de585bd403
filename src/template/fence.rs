//! Fenced code block tracking.
//!
//! Headings inside a fenced block are example text, not structure. The
//! scanners walk a document line by line and consult the fence state to
//! decide whether a line may be a heading.

/// Marker that opens or closes a fenced block.
pub const FENCE_MARKER: &str = "```";

/// Whether a line lies inside a fenced code block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FenceState {
    /// Regular markdown; headings are recognized.
    #[default]
    Outside,
    /// Inside a fence; nothing on the line is structural.
    Inside,
}

impl FenceState {
    /// Compute the state for `line`, given the state before it.
    ///
    /// Any line whose trimmed content starts with three backticks toggles the
    /// state, whatever language tag follows. The toggle applies to the fence
    /// line itself, so an opening fence line is already `Inside`.
    pub fn advance(self, line: &str) -> Self {
        if is_fence_line(line) {
            self.toggled()
        } else {
            self
        }
    }

    /// The opposite state.
    pub fn toggled(self) -> Self {
        match self {
            Self::Outside => Self::Inside,
            Self::Inside => Self::Outside,
        }
    }

    /// Check if this state is inside a fenced block.
    pub fn is_inside(self) -> bool {
        matches!(self, Self::Inside)
    }
}

/// Check if a line opens or closes a fenced block.
pub fn is_fence_line(line: &str) -> bool {
    line.trim().starts_with(FENCE_MARKER)
}

/// Compute the fence state of every line.
///
/// The result is parallel to `lines`. With an odd number of fence markers the
/// trailing lines stay `Inside`, so unterminated fences never yield headings.
pub fn fence_states<'a, I>(lines: I) -> Vec<FenceState>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut state = FenceState::Outside;
    lines
        .into_iter()
        .map(|line| {
            state = state.advance(line);
            state
        })
        .collect()
}
