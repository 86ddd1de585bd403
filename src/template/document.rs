//! Template document assembly.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;

use super::frontmatter::split_frontmatter;
use super::metadata::{parse_metadata, Metadata};
use super::sections::{extract_sections, Section, Sections};

/// A parsed template: metadata plus the typed sections of its body.
///
/// Every field is always present; sections missing from the source hold
/// their defaults (empty string, empty JSON object, or empty map).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateDocument {
    /// Frontmatter metadata (`id`, `name`, `version`, `detection`, ...).
    pub meta: Metadata,
    /// Markdown destined for the project's CLAUDE.md.
    pub claude_md: String,
    /// Hooks configuration.
    pub hooks: Value,
    /// Skill name → skill markdown.
    pub skills: BTreeMap<String, String>,
    /// Agent name → agent markdown.
    pub agents: BTreeMap<String, String>,
    /// MCP server definitions.
    pub mcp_servers: Value,
}

impl TemplateDocument {
    fn from_parts(meta: Metadata, sections: Sections) -> Self {
        Self {
            meta,
            claude_md: sections.claude_md,
            hooks: sections.hooks,
            skills: sections.skills,
            agents: sections.agents,
            mcp_servers: sections.mcp_servers,
        }
    }

    /// A single section as a JSON value, for rendering.
    pub fn section_value(&self, section: Section) -> Value {
        match section {
            Section::ClaudeMd => Value::String(self.claude_md.clone()),
            Section::Hooks => self.hooks.clone(),
            Section::Skills => named_entries(&self.skills),
            Section::Agents => named_entries(&self.agents),
            Section::McpServers => self.mcp_servers.clone(),
        }
    }
}

fn named_entries(entries: &BTreeMap<String, String>) -> Value {
    Value::Object(
        entries
            .iter()
            .map(|(name, content)| (name.clone(), Value::String(content.clone())))
            .collect(),
    )
}

/// Parse template text into a [`TemplateDocument`].
///
/// This is a pure function of `text` and never fails: malformed frontmatter,
/// sections or embedded blocks fall back to their defaults.
pub fn parse_template_text(text: &str) -> TemplateDocument {
    let frontmatter = split_frontmatter(text);
    let meta = parse_metadata(&frontmatter.metadata_text);
    let sections = extract_sections(&frontmatter.body);
    TemplateDocument::from_parts(meta, sections)
}

/// Read a template file from disk and parse it.
///
/// Only the read can fail; see [`parse_template_text`].
pub fn parse_template_file(path: &Path) -> Result<TemplateDocument> {
    let text = std::fs::read_to_string(path)?;
    Ok(parse_template_text(&text))
}
