//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::{TemplateSourceConfig, TEMPLATES_DIR_ENV};
use crate::ui::OutputMode;

/// agentrig - Browse and inspect project setup templates.
#[derive(Debug, Parser)]
#[command(name = "agentrig")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Read templates from this directory instead of the bundled set
    #[arg(long, global = true, env = TEMPLATES_DIR_ENV, value_name = "DIR")]
    pub templates_dir: Option<PathBuf>,

    /// Read templates installed under ~/.claude/skills/project-setup
    #[arg(long, global = true)]
    pub installed: bool,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Template source selected by the global flags.
    pub fn template_source(&self) -> TemplateSourceConfig {
        TemplateSourceConfig::from_flags(self.templates_dir.clone(), self.installed)
    }

    /// Output mode selected by `--verbose` and `--quiet`.
    pub fn output_mode(&self) -> OutputMode {
        OutputMode::from_flags(self.verbose, self.quiet)
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List available templates (default if no command specified)
    List(ListArgs),

    /// Show a parsed template
    Show(ShowArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `show` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ShowArgs {
    /// Template id from the index
    pub id: String,

    /// Output as JSON instead of YAML
    #[arg(long)]
    pub json: bool,

    /// Show only one section (claude_md, hooks, skills, agents, mcp_servers)
    #[arg(long, value_name = "NAME")]
    pub section: Option<String>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
