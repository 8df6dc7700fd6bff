//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::detection::Platform;

/// builddeps - check for and install native build dependencies.
#[derive(Debug, Parser)]
#[command(name = "builddeps")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Package tables to use instead of the built-in ones
    #[arg(short, long, global = true, env = "BUILDDEPS_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Only print errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check that all build dependencies are installed
    Check(CheckArgs),

    /// Install all build dependencies
    Install(InstallArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Which platform to target.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct TargetArgs {
    /// Platform family (defaults to the detected one)
    #[arg(long, value_enum, value_name = "NAME")]
    pub distro: Option<Platform>,

    /// Release codename (defaults to the detected one on Linux)
    #[arg(long, value_name = "NAME")]
    pub codename: Option<String>,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Prefix for privileged commands in the report (e.g. "sudo")
    #[arg(long, value_name = "PREFIX")]
    pub prefix: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `install` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InstallArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Print actions instead of performing them
    #[arg(long)]
    pub dry_run: bool,

    /// Extra arguments for the install command, given after `--` (e.g. -- -y)
    #[arg(last = true, value_name = "FLAGS")]
    pub flags: Vec<String>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
