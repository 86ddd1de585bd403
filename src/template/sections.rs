//! Section and named-subsection extraction.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::error::AgentrigError;

use super::blocks::{empty_object, extract_fenced_block, extract_json_block, BlockLanguage};
use super::headings::{scan_headings, section_spans, HeadingLevel};

/// A recognized top-level template section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// `## claude_md`: freeform markdown for the project's CLAUDE.md.
    ClaudeMd,
    /// `## hooks`: a JSON hooks configuration.
    Hooks,
    /// `## skills`: `###` entries, one per skill.
    Skills,
    /// `## agents`: `###` entries, one per agent.
    Agents,
    /// `## mcp_servers`: a JSON map of MCP server definitions.
    McpServers,
}

impl Section {
    /// All sections in document order.
    pub const ALL: [Section; 5] = [
        Section::ClaudeMd,
        Section::Hooks,
        Section::Skills,
        Section::Agents,
        Section::McpServers,
    ];

    /// Match a lowercased heading name.
    pub fn from_heading(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.heading() == name)
    }

    /// The heading text of this section.
    pub fn heading(self) -> &'static str {
        match self {
            Self::ClaudeMd => "claude_md",
            Self::Hooks => "hooks",
            Self::Skills => "skills",
            Self::Agents => "agents",
            Self::McpServers => "mcp_servers",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.heading())
    }
}

impl FromStr for Section {
    type Err = AgentrigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_heading(&s.trim().to_lowercase()).ok_or_else(|| AgentrigError::UnknownSection {
            name: s.to_string(),
        })
    }
}

/// Extracted section contents, each defaulted when absent.
#[derive(Debug, Clone, PartialEq)]
pub struct Sections {
    pub claude_md: String,
    pub hooks: Value,
    pub skills: BTreeMap<String, String>,
    pub agents: BTreeMap<String, String>,
    pub mcp_servers: Value,
}

impl Default for Sections {
    fn default() -> Self {
        Self {
            claude_md: String::new(),
            hooks: empty_object(),
            skills: BTreeMap::new(),
            agents: BTreeMap::new(),
            mcp_servers: empty_object(),
        }
    }
}

/// Slice a template body into its recognized sections.
///
/// Unknown `##` headings still bound their neighbours but their content is
/// discarded. A repeated section replaces the earlier one.
pub fn extract_sections(body: &str) -> Sections {
    let mut sections = Sections::default();
    let boundaries = scan_headings(body, HeadingLevel::Section);
    let spans = section_spans(body, &boundaries);

    for (boundary, content) in boundaries.iter().zip(spans) {
        let Some(section) = Section::from_heading(&boundary.name) else {
            tracing::trace!("Ignoring unknown section '{}'", boundary.name);
            continue;
        };

        match section {
            Section::ClaudeMd => sections.claude_md = content.to_string(),
            Section::Hooks => sections.hooks = json_or_empty(content),
            Section::Skills => sections.skills = extract_named_subsections(content),
            Section::Agents => sections.agents = extract_named_subsections(content),
            Section::McpServers => sections.mcp_servers = json_or_empty(content),
        }
    }

    sections
}

fn json_or_empty(content: &str) -> Value {
    extract_json_block(content).unwrap_or_else(empty_object)
}

/// Turn `###` entries into a name → content map.
///
/// An entry's content is the interior of its first ```` ```markdown ````
/// block, trimmed, or the entry's raw trimmed text when it has none. Later
/// entries with the same name win.
pub fn extract_named_subsections(content: &str) -> BTreeMap<String, String> {
    let boundaries = scan_headings(content, HeadingLevel::Subsection);
    let spans = section_spans(content, &boundaries);

    boundaries
        .into_iter()
        .zip(spans)
        .map(|(boundary, raw)| {
            let body = extract_fenced_block(raw, BlockLanguage::Markdown)
                .map(str::trim)
                .unwrap_or(raw);
            (boundary.name, body.to_string())
        })
        .collect()
}
