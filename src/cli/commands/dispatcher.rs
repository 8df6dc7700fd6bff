//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::config::{load_config, DepsConfig};
use crate::detection::{SystemToolchain, Toolchain};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
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
    config_path: Option<PathBuf>,
    toolchain: Box<dyn Toolchain>,
}

impl CommandDispatcher {
    /// Create a dispatcher that probes the real host.
    pub fn new(config_path: Option<PathBuf>) -> Self {
        Self::with_toolchain(config_path, Box::new(SystemToolchain::new()))
    }

    /// Create a dispatcher with a custom toolchain.
    pub fn with_toolchain(config_path: Option<PathBuf>, toolchain: Box<dyn Toolchain>) -> Self {
        Self {
            config_path,
            toolchain,
        }
    }

    /// Explicit config path, if any.
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    fn load_config(&self) -> Result<DepsConfig> {
        load_config(self.config_path())
    }

    /// Dispatch and execute a command.
    ///
    /// Package tables are only loaded for commands that need them.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Commands::Check(args) => {
                let config = self.load_config()?;
                let cmd =
                    super::check::CheckCommand::new(config, self.toolchain.as_ref(), args.clone());
                cmd.execute(ui)
            }
            Commands::Install(args) => {
                let config = self.load_config()?;
                let cmd = super::install::InstallCommand::new(
                    config,
                    self.toolchain.as_ref(),
                    args.clone(),
                );
                cmd.execute(ui)
            }
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::StubToolchain;
    use crate::ui::MockUI;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn dispatches_check_against_stub() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("deps.yml");
        fs::write(
            &config,
            "platforms:\n  mac:\n    install: [brew, install]\n    packages:\n      - name: ninja\n        package: ninja\n",
        )
        .unwrap();

        let dispatcher = CommandDispatcher::with_toolchain(
            Some(config.clone()),
            Box::new(StubToolchain::new()),
        );
        assert_eq!(dispatcher.config_path(), Some(config.as_path()));

        let cli = Cli::parse_from(["builddeps", "check", "--distro", "mac"]);
        let mut ui = MockUI::new();
        let result = dispatcher.dispatch(&cli, &mut ui).unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_message("missing dependencies: ninja"));
    }

    #[test]
    fn bad_config_is_an_error() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("deps.yml");
        fs::write(&config, "platforms: [").unwrap();

        let dispatcher =
            CommandDispatcher::with_toolchain(Some(config), Box::new(StubToolchain::new()));
        let cli = Cli::parse_from(["builddeps", "check", "--distro", "mac"]);
        let mut ui = MockUI::new();
        assert!(dispatcher.dispatch(&cli, &mut ui).is_err());
    }
}
