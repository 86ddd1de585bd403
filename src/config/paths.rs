//! Well-known template locations.

use std::path::{Path, PathBuf};

use crate::error::{AgentrigError, Result};

/// Environment variable naming a template directory.
pub const TEMPLATES_DIR_ENV: &str = "AGENTRIG_TEMPLATES_DIR";

/// Installed templates, relative to the home directory.
const INSTALLED_SUBDIR: [&str; 4] = [".claude", "skills", "project-setup", "templates"];

/// Installed template directory under the current user's home.
pub fn installed_templates_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(AgentrigError::HomeDirNotFound)?;
    Ok(installed_templates_dir_in(&home))
}

/// Installed template directory under a given home directory.
pub fn installed_templates_dir_in(home: &Path) -> PathBuf {
    INSTALLED_SUBDIR
        .iter()
        .fold(home.to_path_buf(), |path, part| path.join(part))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn installed_dir_is_under_home() {
        let path = installed_templates_dir_in(Path::new("/home/dev"));
        assert_eq!(
            path,
            PathBuf::from("/home/dev/.claude/skills/project-setup/templates")
        );
    }

    #[test]
    fn installed_dir_uses_real_home() {
        if let Ok(path) = installed_templates_dir() {
            assert!(path.ends_with("project-setup/templates"));
        }
    }
}
