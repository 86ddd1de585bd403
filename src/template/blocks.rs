//! Embedded fenced block extraction.
//!
//! Sections carry their payload in a tagged fence: `hooks` and `mcp_servers`
//! in a ```` ```json ```` block, skill and agent entries in a
//! ```` ```markdown ```` block.

use regex::Regex;
use serde_json::Value;

/// Language tag of an embedded block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockLanguage {
    Json,
    Markdown,
}

impl BlockLanguage {
    /// The tag written after the opening backticks.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Markdown => "markdown",
        }
    }
}

/// Return the interior of the first fenced block tagged `language`.
///
/// The opening fence is the tag followed by optional whitespace and a newline;
/// the block ends at the first following line that starts with three
/// backticks. Returns `None` when no such block exists.
pub fn extract_fenced_block(content: &str, language: BlockLanguage) -> Option<&str> {
    let pattern = format!(r"(?s)```{}\s*\n(.*?)\n```", regex::escape(language.tag()));
    let re = Regex::new(&pattern).ok()?;
    re.captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Parse the first ```` ```json ```` block in `content`.
///
/// Returns `None` when there is no block, the block is not valid JSON, or it
/// holds a JSON `null`. Callers substitute an empty object.
pub fn extract_json_block(content: &str) -> Option<Value> {
    let raw = extract_fenced_block(content, BlockLanguage::Json)?;
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Null) => None,
        Ok(value) => Some(value),
        Err(e) => {
            tracing::debug!("Ignoring invalid JSON block: {}", e);
            None
        }
    }
}

/// An empty JSON object, the default for JSON-valued sections.
pub fn empty_object() -> Value {
    Value::Object(serde_json::Map::new())
}
