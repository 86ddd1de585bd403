//! agentrig - Project setup templates for Claude Code.
//!
//! agentrig reads hand-authored markdown templates (frontmatter metadata
//! plus typed sections for CLAUDE.md, hooks, skills, agents and MCP servers)
//! and turns them into structured documents.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Where templates are read from
//! - [`error`] - Error types and result aliases
//! - [`registry`] - Template index, stores and lookup by id
//! - [`template`] - Template document parsing
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use agentrig::template::parse_template_text;
//!
//! let doc = parse_template_text(
//!     "---\nid: demo\n---\n## skills\n### lint\n```markdown\nRun the linter.\n```",
//! );
//! assert_eq!(doc.meta.id(), Some("demo"));
//! assert_eq!(doc.skills["lint"], "Run the linter.");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod registry;
pub mod template;
pub mod ui;

pub use error::{AgentrigError, Result};
