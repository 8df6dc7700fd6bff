//! Dependency installation.
//!
//! Registers extra package sources, imports signing keys, refreshes the
//! package index and runs the platform's install command with the whole
//! package table. Every action is echoed before it happens; under dry-run
//! nothing else happens.

use std::path::Path;

use crate::config::DepsConfig;
use crate::detection::Platform;
use crate::error::{BuilddepsError, Result};
use crate::shell::{quote_argv, run_argv};
use crate::ui::UserInterface;

/// Mockable side effects of the installer.
pub struct InstallerContext<'a> {
    /// Run an argv to completion; a non-zero exit is an error.
    pub run_command: &'a dyn Fn(&[String]) -> Result<()>,
    /// Write `content` to a file, replacing it.
    pub write_file: &'a dyn Fn(&Path, &str) -> Result<()>,
}

/// Build the default `InstallerContext` for production use.
pub fn default_context() -> InstallerContext<'static> {
    InstallerContext {
        run_command: &|argv: &[String]| -> Result<()> { run_argv(argv) },
        write_file: &|path: &Path, content: &str| -> Result<()> {
            std::fs::write(path, content).map_err(|source| BuilddepsError::WriteFailed {
                path: path.to_path_buf(),
                source,
            })
        },
    }
}

/// Options for [`install`].
#[derive(Debug, Clone, Default)]
pub struct InstallOptions {
    /// Release codename for extra source lines.
    pub codename: Option<String>,
    /// Print actions without performing them.
    pub dry_run: bool,
    /// Extra arguments appended to the install command.
    pub flags: Vec<String>,
}

/// Install every dependency of `platform`.
///
/// Stops at the first failing action; source files already written stay.
pub fn install(
    config: &DepsConfig,
    platform: Platform,
    options: &InstallOptions,
    ui: &mut dyn UserInterface,
    ctx: &InstallerContext<'_>,
) -> Result<()> {
    let table = config.table(platform)?;
    let mut sources_added = false;

    for source in &table.sources {
        let path = config.source_list_path(source);
        if path.exists() {
            tracing::debug!("{} already registered", path.display());
            continue;
        }
        let codename =
            options
                .codename
                .as_deref()
                .ok_or_else(|| BuilddepsError::MissingCodename {
                    source_name: source.name.clone(),
                })?;
        let line = source.deb_line(codename);
        ui.show_command(&format!("+ tee {}", quote_argv(&[path.to_string_lossy()])));
        ui.message(&line);
        if !options.dry_run {
            (ctx.write_file)(&path, &format!("{}\n", line))?;
        }
        sources_added = true;
    }

    for key in &table.keys {
        run(key, options.dry_run, ui, ctx)?;
    }

    if sources_added {
        if let Some(update) = &table.update {
            run(update, options.dry_run, ui, ctx)?;
        }
    }

    let mut argv = table.install.clone();
    argv.extend(table.package_values());
    argv.extend(options.flags.iter().cloned());
    run(&argv, options.dry_run, ui, ctx)
}

fn run(
    argv: &[String],
    dry_run: bool,
    ui: &mut dyn UserInterface,
    ctx: &InstallerContext<'_>,
) -> Result<()> {
    ui.show_command(&quote_argv(argv));
    if dry_run {
        return Ok(());
    }
    (ctx.run_command)(argv)
}
