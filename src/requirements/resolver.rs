//! Dependency resolution.
//!
//! Walks a platform's package table in order, probing tools through their
//! checkers and libraries through pkg-config, and turns whatever is missing
//! into the shell commands that would install it.

use std::collections::{BTreeMap, BTreeSet};

use crate::config::{DepsConfig, PlatformTable};
use crate::detection::{Platform, ToolInfo, Toolchain};
use crate::error::Result;
use crate::requirements::checkers::{checker_for, PKG_CONFIG};
use crate::requirements::status::{Instructions, ResolutionResult};
use crate::shell::render_command;

/// Stands in for the release codename in a rendered source line.
pub const CODENAME_PLACEHOLDER: &str = "<codename>";

/// Checks a platform's dependencies against a [`Toolchain`].
pub struct Resolver<'a> {
    config: &'a DepsConfig,
    toolchain: &'a dyn Toolchain,
}

impl<'a> Resolver<'a> {
    /// Create a resolver over fixed tables and a toolchain.
    pub fn new(config: &'a DepsConfig, toolchain: &'a dyn Toolchain) -> Self {
        Self { config, toolchain }
    }

    /// Check every dependency of `platform`.
    ///
    /// `codename` is used only in the rendered source-registration command,
    /// which shows [`CODENAME_PLACEHOLDER`] when it is unknown; `prefix`
    /// (e.g. `sudo`) is prepended to every privileged command.
    /// Nothing is executed.
    pub fn check(
        &self,
        platform: Platform,
        codename: Option<&str>,
        prefix: &str,
    ) -> Result<ResolutionResult> {
        let table = self.config.table(platform)?;
        let mut tools: BTreeMap<String, ToolInfo> = BTreeMap::new();
        let mut missing = Vec::new();

        for entry in &table.packages {
            let name = entry.name.as_str();
            if let Some(checker) = checker_for(name) {
                match checker(self.toolchain) {
                    Some(info) => {
                        tracing::debug!("{}: {}", name, info.describe());
                        tools.insert(name.to_string(), info);
                    }
                    None => {
                        tracing::debug!("{}: missing", name);
                        missing.push(name.to_string());
                    }
                }
                continue;
            }

            // Libraries are only verifiable once pkg-config itself was found
            // earlier in the table; otherwise their state stays unknown.
            let Some(pkg_config) = tools.get(PKG_CONFIG) else {
                tracing::debug!("{}: not verified (no pkg-config)", name);
                continue;
            };
            if !self.toolchain.check_pkg(pkg_config, name) {
                tracing::debug!("{}: missing", name);
                missing.push(name.to_string());
            }
        }

        if missing.is_empty() {
            return Ok(ResolutionResult::Satisfied { tools });
        }

        let packages = install_names(table, &missing);
        let commands = self.commands(table, codename, prefix, &packages)?;
        Ok(ResolutionResult::Missing(Instructions {
            missing,
            packages,
            commands,
        }))
    }

    fn commands(
        &self,
        table: &PlatformTable,
        codename: Option<&str>,
        prefix: &str,
        packages: &[String],
    ) -> Result<Vec<String>> {
        let mut commands = Vec::new();

        for source in &table.sources {
            let path = self.config.source_list_path(source);
            if path.exists() {
                continue;
            }
            let codename = codename.unwrap_or_else(|| {
                tracing::warn!(
                    "no release codename known; '{}' is shown with a placeholder",
                    source.name
                );
                CODENAME_PLACEHOLDER
            });
            let path = path.to_string_lossy();
            commands.push(format!(
                "{} | {}",
                render_command(
                    "",
                    &[
                        "echo",
                        "deb",
                        source.url.as_str(),
                        codename,
                        source.component.as_str(),
                    ],
                )?,
                render_command(prefix, &["tee", &*path])?,
            ));
        }
        if !commands.is_empty() {
            for key in &table.keys {
                commands.push(render_command(prefix, key)?);
            }
        }

        if let Some(update) = &table.update {
            commands.push(render_command(prefix, update)?);
        }

        let mut install = table.install.clone();
        install.extend(packages.iter().cloned());
        commands.push(render_command(prefix, &install)?);

        Ok(commands)
    }
}

/// Platform package names for `missing`, sorted and deduplicated.
fn install_names(table: &PlatformTable, missing: &[String]) -> Vec<String> {
    missing
        .iter()
        .filter_map(|name| table.package_for(name))
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Check `platform`'s dependencies. See [`Resolver::check`].
pub fn check(
    config: &DepsConfig,
    toolchain: &dyn Toolchain,
    platform: Platform,
    codename: Option<&str>,
    prefix: &str,
) -> Result<ResolutionResult> {
    Resolver::new(config, toolchain).check(platform, codename, prefix)
}
