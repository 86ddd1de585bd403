//! List command implementation.
//!
//! The `agentrig list` command lists the templates in the index.

use crate::cli::args::ListArgs;
use crate::error::Result;
use crate::registry::TemplateRegistry;
use crate::ui::{Table, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand<'a> {
    registry: &'a TemplateRegistry,
    args: ListArgs,
}

impl<'a> ListCommand<'a> {
    /// Create a new list command.
    pub fn new(registry: &'a TemplateRegistry, args: ListArgs) -> Self {
        Self { registry, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ListArgs {
        &self.args
    }
}

impl Command for ListCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let store = self.registry.store().describe();
        let entries = self.registry.list();
        ui.detail(&format!("Templates from {}", store));

        if self.args.json {
            ui.message(&serde_json::to_string_pretty(&entries)?);
            return Ok(CommandResult::success());
        }

        if entries.is_empty() {
            ui.warning(&format!("No templates found in {}", store));
            return Ok(CommandResult::success());
        }

        let mut table = Table::new(&["ID", "Name", "Description", "File"]);
        for entry in &entries {
            table.add_row(&[&entry.id, &entry.name, &entry.description, &entry.file]);
        }

        let rendered = table.render_with(ui.theme());
        ui.message(&rendered);
        Ok(CommandResult::success())
    }
}
