//! The `builddeps check` command.

use crate::cli::args::CheckArgs;
use crate::config::DepsConfig;
use crate::detection::Toolchain;
use crate::error::Result;
use crate::requirements::{Resolver, ResolutionResult, CODENAME_PLACEHOLDER};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::target::resolve_target;

/// The check command implementation.
pub struct CheckCommand<'a> {
    config: DepsConfig,
    toolchain: &'a dyn Toolchain,
    args: CheckArgs,
}

impl<'a> CheckCommand<'a> {
    /// Create a new check command.
    pub fn new(config: DepsConfig, toolchain: &'a dyn Toolchain, args: CheckArgs) -> Self {
        Self {
            config,
            toolchain,
            args,
        }
    }
}

impl Command for CheckCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let (platform, codename) = resolve_target(&self.args.target, self.toolchain)?;
        tracing::debug!(
            "checking {} (codename: {})",
            platform,
            codename.as_deref().unwrap_or("unknown")
        );

        let prefix = self.args.prefix.as_deref().unwrap_or("");
        let result =
            Resolver::new(&self.config, self.toolchain).check(platform, codename.as_deref(), prefix)?;

        if self.args.json {
            let json = serde_json::to_string_pretty(&result).map_err(anyhow::Error::from)?;
            ui.message(&json);
        } else {
            match &result {
                ResolutionResult::Satisfied { tools } => {
                    for (name, info) in tools {
                        ui.message(&format!("  {}: {}", name, info.describe()));
                    }
                    ui.success("All build dependencies are installed");
                }
                ResolutionResult::Missing(instructions) => {
                    let location = codename
                        .clone()
                        .unwrap_or_else(|| platform.display_name().to_string());
                    for line in instructions.report_lines(&location) {
                        ui.message(&line);
                    }
                    if instructions
                        .commands
                        .iter()
                        .any(|c| c.contains(CODENAME_PLACEHOLDER))
                    {
                        ui.warning(&format!(
                            "Release codename unknown: replace {} above, or pass --codename",
                            CODENAME_PLACEHOLDER
                        ));
                    }
                }
            }
        }

        if result.is_satisfied() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
