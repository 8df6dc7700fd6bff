//! Command-line interface for builddeps.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{CheckArgs, Cli, Commands, CompletionsArgs, InstallArgs, TargetArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
