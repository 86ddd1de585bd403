//! Template source configuration.
//!
//! Decides where templates are read from. Nothing here touches template
//! content; the result is a [`TemplateStore`](crate::registry::TemplateStore)
//! handed to the registry.
//!
//! # Template Locations
//!
//! - Bundled templates (default, embedded in the binary)
//! - Installed templates (`~/.claude/skills/project-setup/templates`)
//! - Any directory given with `--templates-dir` or `AGENTRIG_TEMPLATES_DIR`
//!
//! # Example
//!
//! ```
//! use agentrig::config::TemplateSourceConfig;
//! use agentrig::registry::TemplateRegistry;
//!
//! let source = TemplateSourceConfig::from_flags(None, false);
//! assert_eq!(source, TemplateSourceConfig::Bundled);
//!
//! let registry = TemplateRegistry::new(source.open().unwrap());
//! assert!(!registry.list().is_empty());
//! ```

pub mod paths;
pub mod source;

pub use paths::{installed_templates_dir, installed_templates_dir_in, TEMPLATES_DIR_ENV};
pub use source::TemplateSourceConfig;
