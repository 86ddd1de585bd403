//! Where to read templates from.

use std::path::PathBuf;

use crate::error::Result;
use crate::registry::{BundledStore, DirectoryStore, TemplateStore};

use super::paths::installed_templates_dir;

/// Template source selected from CLI flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TemplateSourceConfig {
    /// Templates embedded in the binary.
    #[default]
    Bundled,
    /// Templates installed under the user's home directory.
    Installed,
    /// Templates in an explicit directory.
    Directory(PathBuf),
}

impl TemplateSourceConfig {
    /// Build from `--templates-dir` and `--installed`.
    ///
    /// An explicit directory takes precedence over `--installed`.
    pub fn from_flags(templates_dir: Option<PathBuf>, installed: bool) -> Self {
        match templates_dir {
            Some(dir) => Self::Directory(dir),
            None if installed => Self::Installed,
            None => Self::Bundled,
        }
    }

    /// Open the store for this source.
    ///
    /// Fails only when the installed location needs a home directory that
    /// cannot be found. A missing directory is not an error here; reading
    /// from it later yields an empty catalog.
    pub fn open(&self) -> Result<Box<dyn TemplateStore>> {
        let store: Box<dyn TemplateStore> = match self {
            Self::Bundled => Box::new(BundledStore::new()),
            Self::Installed => Box::new(DirectoryStore::new(installed_templates_dir()?)),
            Self::Directory(dir) => Box::new(DirectoryStore::new(dir.clone())),
        };
        tracing::debug!("Using templates from {}", store.describe());
        Ok(store)
    }

    /// Short label for messages.
    pub fn describe(&self) -> String {
        match self {
            Self::Bundled => "bundled templates".to_string(),
            Self::Installed => match installed_templates_dir() {
                Ok(dir) => dir.display().to_string(),
                Err(_) => "installed templates".to_string(),
            },
            Self::Directory(dir) => dir.display().to_string(),
        }
    }
}
