//! Restricted YAML metadata parsing.
//!
//! Template frontmatter uses a deliberately small YAML subset:
//!
//! ```yaml
//! id: nextjs              # scalar (quoted or bare)
//! version: 2              # all-digit scalars become integers
//! tags:                   # list block
//!   - web
//! detection:              # one-level map block
//!   min_files: 10
//!   files_any:            # list under a nested key
//!     - next.config.js
//! ```
//!
//! Nothing else is supported. The parser is a line-oriented state machine
//! over a stack of at most two frames and never fails: a line outside the
//! subset (or an ambiguous one, such as a list item among map entries) is
//! dropped and parsing continues.

use serde::Serialize;
use std::collections::BTreeMap;

/// Maximum nesting below a top-level key.
const MAX_DEPTH: usize = 2;

/// A metadata value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MetaValue {
    /// Scalar made only of ASCII digits.
    Integer(i64),
    /// Any other scalar, quotes stripped.
    String(String),
    /// `- item` lines; items are always strings.
    List(Vec<String>),
    /// Nested `key: value` lines. Values are never maps themselves.
    Map(BTreeMap<String, MetaValue>),
}

impl MetaValue {
    /// Get as string if this is a `String` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as integer if this is an `Integer` value.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the items if this is a `List` value.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Get the entries if this is a `Map` value.
    pub fn as_map(&self) -> Option<&BTreeMap<String, MetaValue>> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Render a scalar as text (`String` verbatim, `Integer` in decimal).
    pub fn to_scalar_string(&self) -> Option<String> {
        match self {
            Self::String(s) => Some(s.clone()),
            Self::Integer(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

impl From<&str> for MetaValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<i64> for MetaValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<Vec<&str>> for MetaValue {
    fn from(items: Vec<&str>) -> Self {
        Self::List(items.into_iter().map(String::from).collect())
    }
}

/// Parsed template metadata.
///
/// Keys are untyped; the conventional ones (`id`, `name`, `description`,
/// `version`, `detection`) have accessors but are never required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Metadata {
    entries: BTreeMap<String, MetaValue>,
}

impl Metadata {
    /// Create empty metadata.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a value by key.
    pub fn get(&self, key: &str) -> Option<&MetaValue> {
        self.entries.get(key)
    }

    /// Get a string value by key.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(MetaValue::as_str)
    }

    /// Get an integer value by key.
    pub fn get_integer(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(MetaValue::as_integer)
    }

    /// Get a list value by key.
    pub fn get_list(&self, key: &str) -> Option<&[String]> {
        self.get(key).and_then(MetaValue::as_list)
    }

    /// Get a nested map by key.
    pub fn get_map(&self, key: &str) -> Option<&BTreeMap<String, MetaValue>> {
        self.get(key).and_then(MetaValue::as_map)
    }

    /// Template id.
    pub fn id(&self) -> Option<&str> {
        self.get_str("id")
    }

    /// Human-readable template name.
    pub fn name(&self) -> Option<&str> {
        self.get_str("name")
    }

    /// Template description.
    pub fn description(&self) -> Option<&str> {
        self.get_str("description")
    }

    /// Template version, which may be authored as an integer or a string.
    pub fn version(&self) -> Option<String> {
        self.get("version").and_then(MetaValue::to_scalar_string)
    }

    /// Project detection hints (e.g. `files_any`).
    pub fn detection(&self) -> Option<&BTreeMap<String, MetaValue>> {
        self.get_map("detection")
    }

    /// Iterate entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetaValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of top-level keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, MetaValue)> for Metadata {
    fn from_iter<I: IntoIterator<Item = (String, MetaValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// An open nested block: the key that opened it and that key's indentation.
///
/// Frame 0 is always a top-level key; frame 1, when present, is a nested key
/// whose value is a list.
#[derive(Debug)]
struct Frame {
    key: String,
    indent: usize,
}

#[derive(Debug, Default)]
struct MetadataParser {
    entries: BTreeMap<String, MetaValue>,
    frames: Vec<Frame>,
}

impl MetadataParser {
    fn feed(&mut self, line: &str) {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return;
        }

        let indent = line.len() - line.trim_start().len();
        while self.frames.last().is_some_and(|f| indent <= f.indent) {
            self.frames.pop();
        }

        match self.frames.len() {
            0 if indent == 0 => self.top_level(trimmed),
            0 => drop_line(trimmed, "indented line outside any block"),
            1 => self.nested(trimmed, indent),
            _ => self.nested_list_item(trimmed),
        }
    }

    fn top_level(&mut self, trimmed: &str) {
        let Some((key, value)) = split_key_value(trimmed) else {
            drop_line(trimmed, "not a key");
            return;
        };

        if value.is_empty() {
            // Becomes a list or a map once the first child line is seen.
            self.entries
                .insert(key.to_string(), MetaValue::Map(BTreeMap::new()));
            self.frames.push(Frame {
                key: key.to_string(),
                indent: 0,
            });
        } else {
            self.entries.insert(key.to_string(), scalar(value));
        }
    }

    fn nested(&mut self, trimmed: &str, indent: usize) {
        let Some(block) = self.entries.get_mut(&self.frames[0].key) else {
            return;
        };

        if let Some(item) = list_item(trimmed) {
            if matches!(block, MetaValue::Map(map) if map.is_empty()) {
                *block = MetaValue::List(Vec::new());
            }
            match block {
                MetaValue::List(items) => items.push(item),
                _ => drop_line(trimmed, "list item in a map block"),
            }
            return;
        }

        let Some((key, value)) = split_key_value(trimmed) else {
            drop_line(trimmed, "not a key or list item");
            return;
        };

        let MetaValue::Map(map) = block else {
            drop_line(trimmed, "map entry in a list block");
            return;
        };

        if value.is_empty() {
            map.insert(key.to_string(), MetaValue::List(Vec::new()));
            if self.frames.len() < MAX_DEPTH {
                self.frames.push(Frame {
                    key: key.to_string(),
                    indent,
                });
            }
        } else {
            map.insert(key.to_string(), scalar(value));
        }
    }

    fn nested_list_item(&mut self, trimmed: &str) {
        let Some(item) = list_item(trimmed) else {
            drop_line(trimmed, "only list items are allowed at this depth");
            return;
        };

        let (outer, inner) = (&self.frames[0].key, &self.frames[1].key);
        if let Some(MetaValue::Map(map)) = self.entries.get_mut(outer) {
            if let Some(MetaValue::List(items)) = map.get_mut(inner) {
                items.push(item);
            }
        }
    }

    fn finish(self) -> Metadata {
        Metadata {
            entries: self.entries,
        }
    }
}

/// Parse restricted-YAML metadata text. Never fails; see the module docs.
pub fn parse_metadata(text: &str) -> Metadata {
    if text.trim().is_empty() {
        return Metadata::new();
    }

    let mut parser = MetadataParser::default();
    for line in text.split('\n') {
        parser.feed(line);
    }
    parser.finish()
}

fn drop_line(line: &str, reason: &str) {
    tracing::trace!("Dropping metadata line {:?}: {}", line, reason);
}

/// Split `key: value` at the first colon. Returns `None` without a colon or key.
fn split_key_value(trimmed: &str) -> Option<(&str, &str)> {
    let (key, value) = trimmed.split_once(':')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key, value.trim()))
}

fn list_item(trimmed: &str) -> Option<String> {
    trimmed
        .strip_prefix("- ")
        .map(|rest| strip_quotes(rest.trim()).to_string())
}

fn is_quote(c: char) -> bool {
    c == '"' || c == '\''
}

/// Remove one leading and one trailing quote, independently.
fn strip_quotes(value: &str) -> &str {
    let value = value.strip_prefix(is_quote).unwrap_or(value);
    value.strip_suffix(is_quote).unwrap_or(value)
}

fn scalar(raw: &str) -> MetaValue {
    let value = strip_quotes(raw);
    if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(n) = value.parse::<i64>() {
            return MetaValue::Integer(n);
        }
    }
    MetaValue::String(value.to_string())
}
