//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands, ListArgs};
use crate::config::TemplateSourceConfig;
use crate::error::Result;
use crate::registry::TemplateRegistry;
use crate::ui::UserInterface;

/// Exit code for a template or section that does not exist.
pub const EXIT_NOT_FOUND: i32 = 2;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command, writing output through `ui`.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    source: TemplateSourceConfig,
}

impl CommandDispatcher {
    /// Create a new dispatcher reading templates from `source`.
    pub fn new(source: TemplateSourceConfig) -> Self {
        Self { source }
    }

    /// Get the template source.
    pub fn source(&self) -> &TemplateSourceConfig {
        &self.source
    }

    /// Dispatch and execute a command.
    ///
    /// With no subcommand, templates are listed.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if let Some(Commands::Completions(args)) = &cli.command {
            return super::completions::CompletionsCommand::new(args.clone()).execute(ui);
        }

        let registry = TemplateRegistry::new(self.source.open()?);

        match &cli.command {
            Some(Commands::Show(args)) => {
                super::show::ShowCommand::new(&registry, args.clone()).execute(ui)
            }
            Some(Commands::List(args)) => {
                super::list::ListCommand::new(&registry, args.clone()).execute(ui)
            }
            Some(Commands::Completions(_)) | None => {
                super::list::ListCommand::new(&registry, ListArgs::default()).execute(ui)
            }
        }
    }
}
