//! Template document parsing.
//!
//! A template is a hand-authored markdown file with restricted-YAML
//! frontmatter and a body split into typed `##` sections:
//!
//! ````text
//! ---
//! id: python-api
//! version: 2
//! ---
//! ## claude_md
//! Markdown for CLAUDE.md
//!
//! ## hooks
//! ```json
//! { "PostToolUse": [] }
//! ```
//!
//! ## skills
//! ### testing
//! ```markdown
//! Run the tests.
//! ```
//! ````
//!
//! Parsing is tolerant: malformed input never produces an error, it degrades
//! to documented defaults.
//!
//! # Example
//!
//! ```
//! use agentrig::template::parse_template_text;
//!
//! let doc = parse_template_text("---\nid: foo\nversion: 2\n---\n## claude_md\nHello");
//! assert_eq!(doc.meta.id(), Some("foo"));
//! assert_eq!(doc.meta.get_integer("version"), Some(2));
//! assert_eq!(doc.claude_md, "Hello");
//! ```

pub mod blocks;
pub mod document;
pub mod fence;
pub mod frontmatter;
pub mod headings;
pub mod metadata;
pub mod sections;

pub use blocks::{extract_fenced_block, extract_json_block, BlockLanguage};
pub use document::{parse_template_file, parse_template_text, TemplateDocument};
pub use fence::{fence_states, FenceState};
pub use frontmatter::{split_frontmatter, Frontmatter};
pub use headings::{scan_headings, section_spans, HeadingLevel, SectionBoundary};
pub use metadata::{parse_metadata, MetaValue, Metadata};
pub use sections::{extract_named_subsections, extract_sections, Section, Sections};
