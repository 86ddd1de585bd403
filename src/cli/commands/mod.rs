//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which opens the
//! selected template store once and routes CLI subcommands to their
//! implementations.

pub mod completions;
pub mod dispatcher;
pub mod list;
pub mod show;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
