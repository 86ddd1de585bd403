//! Error types for agentrig operations.
//!
//! This module defines [`AgentrigError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Template *content* never produces an error: malformed frontmatter,
//!   sections or embedded blocks degrade to documented defaults
//! - An unknown template id is an absent result (`Ok(None)`), not an error
//! - Use `AgentrigError` for failures that need distinct handling, such as a
//!   catalog entry whose file cannot be read
//! - Use `anyhow::Error` (via `AgentrigError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for agentrig operations.
#[derive(Debug, Error)]
pub enum AgentrigError {
    /// A template listed in the index could not be read from its store.
    #[error("Failed to read template '{file}' from {store}: {source}")]
    TemplateRead {
        file: String,
        store: String,
        #[source]
        source: std::io::Error,
    },

    /// No index entry matches the requested template id.
    #[error("Unknown template: {id}")]
    UnknownTemplate { id: String },

    /// A template path escapes its store root.
    #[error("Invalid template path: {path}")]
    InvalidTemplatePath { path: PathBuf },

    /// The home directory needed for installed templates could not be found.
    #[error("Could not determine home directory for installed templates")]
    HomeDirNotFound,

    /// A section name that is not one of the recognized template sections.
    #[error("Unknown section '{name}' (expected one of: claude_md, hooks, skills, agents, mcp_servers)")]
    UnknownSection { name: String },

    /// Failed to render a document for output.
    #[error("Failed to render output: {message}")]
    Render { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<serde_json::Error> for AgentrigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Render {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for AgentrigError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Render {
            message: err.to_string(),
        }
    }
}

/// Result type alias for agentrig operations.
pub type Result<T> = std::result::Result<T, AgentrigError>;
