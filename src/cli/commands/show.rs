//! Show command implementation.
//!
//! The `agentrig show <id>` command prints a parsed template as YAML or
//! JSON, optionally narrowed to one section.

use serde_json::Value;

use crate::cli::args::ShowArgs;
use crate::error::{AgentrigError, Result};
use crate::registry::TemplateRegistry;
use crate::template::Section;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, EXIT_NOT_FOUND};

/// The show command implementation.
pub struct ShowCommand<'a> {
    registry: &'a TemplateRegistry,
    args: ShowArgs,
}

impl<'a> ShowCommand<'a> {
    /// Create a new show command.
    pub fn new(registry: &'a TemplateRegistry, args: ShowArgs) -> Self {
        Self { registry, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ShowArgs {
        &self.args
    }

    fn render(&self, value: &Value) -> Result<String> {
        if self.args.json {
            return Ok(serde_json::to_string_pretty(value)?);
        }
        // Markdown sections read better unquoted.
        if let Value::String(text) = value {
            return Ok(text.clone());
        }
        Ok(serde_yaml::to_string(value)?.trim_end().to_string())
    }
}

impl Command for ShowCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let section = match self.args.section.as_deref().map(str::parse::<Section>) {
            Some(Ok(section)) => Some(section),
            Some(Err(e)) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(EXIT_NOT_FOUND));
            }
            None => None,
        };

        let Some(doc) = self.registry.find(&self.args.id)? else {
            let err = AgentrigError::UnknownTemplate {
                id: self.args.id.clone(),
            };
            ui.error(&err.to_string());
            ui.detail("Run 'agentrig list' to see available templates");
            return Ok(CommandResult::failure(EXIT_NOT_FOUND));
        };

        ui.detail(&format!(
            "Template '{}' from {}",
            self.args.id,
            self.registry.store().describe()
        ));

        let value = match section {
            Some(section) => doc.section_value(section),
            None => serde_json::to_value(&doc)?,
        };

        ui.message(&self.render(&value)?);
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{BundledStore, DirectoryStore};
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn args(id: &str) -> ShowArgs {
        ShowArgs {
            id: id.to_string(),
            json: false,
            section: None,
        }
    }

    fn bundled() -> TemplateRegistry {
        TemplateRegistry::new(Box::new(BundledStore::new()))
    }

    #[test]
    fn shows_template_as_yaml() {
        let registry = bundled();
        let cmd = ShowCommand::new(&registry, args("python-api"));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        let parsed: serde_yaml::Value = serde_yaml::from_str(&ui.output()).unwrap();
        assert_eq!(parsed["meta"]["id"].as_str(), Some("python-api"));
        assert_eq!(parsed["meta"]["version"].as_i64(), Some(2));
        assert!(parsed["skills"]["testing"].as_str().is_some());
    }

    #[test]
    fn shows_template_as_json() {
        let registry = bundled();
        let cmd = ShowCommand::new(
            &registry,
            ShowArgs {
                json: true,
                ..args("nextjs")
            },
        );
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        let parsed: Value = serde_json::from_str(&ui.output()).unwrap();
        assert_eq!(parsed["meta"]["name"], "Next.js App");
        assert_eq!(parsed["mcp_servers"], serde_json::json!({}));
        assert!(parsed["claude_md"]
            .as_str()
            .unwrap()
            .contains("## Conventions"));
    }

    #[test]
    fn shows_single_markdown_section_raw() {
        let registry = bundled();
        let cmd = ShowCommand::new(
            &registry,
            ShowArgs {
                section: Some("claude_md".into()),
                ..args("rust-cli")
            },
        );
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert!(ui.output().starts_with("### Project Overview"));
    }

    #[test]
    fn shows_single_json_section() {
        let registry = bundled();
        let cmd = ShowCommand::new(
            &registry,
            ShowArgs {
                json: true,
                section: Some("HOOKS".into()),
                ..args("python-api")
            },
        );
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        let parsed: Value = serde_json::from_str(&ui.output()).unwrap();
        assert_eq!(parsed["PostToolUse"][0]["matcher"], "Edit|Write");
    }

    #[test]
    fn unknown_template_exits_with_not_found() {
        let registry = bundled();
        let cmd = ShowCommand::new(&registry, args("nonexistent"));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, EXIT_NOT_FOUND);
        assert!(ui.has_error("Unknown template: nonexistent"));
        assert!(ui.messages().is_empty());
    }

    #[test]
    fn unknown_section_exits_with_not_found() {
        let registry = bundled();
        let cmd = ShowCommand::new(
            &registry,
            ShowArgs {
                section: Some("extras".into()),
                ..args("python-api")
            },
        );
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, EXIT_NOT_FOUND);
        assert!(ui.has_error("extras"));
    }

    #[test]
    fn unreadable_template_file_is_error() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("_index.md"),
            "| ID | Name | Description | File |\n| gone | Gone | d | gone.md |",
        )
        .unwrap();
        let registry = TemplateRegistry::new(Box::new(DirectoryStore::new(temp.path())));
        let cmd = ShowCommand::new(&registry, args("gone"));
        let mut ui = MockUI::new();

        let err = cmd.execute(&mut ui).unwrap_err();

        assert!(matches!(err, AgentrigError::TemplateRead { .. }));
        assert_eq!(cmd.args().id, "gone");
    }
}
