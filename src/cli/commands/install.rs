//! The `builddeps install` command.

use crate::cli::args::InstallArgs;
use crate::config::DepsConfig;
use crate::detection::{Platform, Toolchain};
use crate::error::Result;
use crate::requirements::{default_context, install, InstallOptions, InstallerContext};
use crate::shell::is_elevated;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::target::resolve_target;

/// The install command implementation.
pub struct InstallCommand<'a> {
    config: DepsConfig,
    toolchain: &'a dyn Toolchain,
    args: InstallArgs,
}

impl<'a> InstallCommand<'a> {
    /// Create a new install command.
    pub fn new(config: DepsConfig, toolchain: &'a dyn Toolchain, args: InstallArgs) -> Self {
        Self {
            config,
            toolchain,
            args,
        }
    }

    /// Run with the given side effects.
    pub fn execute_with(
        &self,
        ui: &mut dyn UserInterface,
        ctx: &InstallerContext<'_>,
    ) -> Result<CommandResult> {
        let (platform, codename) = resolve_target(&self.args.target, self.toolchain)?;

        if !self.args.dry_run && platform == Platform::Debian && !is_elevated() {
            tracing::warn!("installing without root privileges");
            ui.warning("Not running as root; apt-get will likely fail. Try again with sudo.");
        }

        let options = InstallOptions {
            codename,
            dry_run: self.args.dry_run,
            flags: self.args.flags.clone(),
        };
        install(&self.config, platform, &options, ui, ctx)?;

        if !self.args.dry_run {
            ui.success("Build dependencies installed");
        }
        Ok(CommandResult::success())
    }
}

impl Command for InstallCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.execute_with(ui, &default_context())
    }
}
