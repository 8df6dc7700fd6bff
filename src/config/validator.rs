//! Configuration validation.
//!
//! Structural problems are errors. A library listed before the
//! `pkg-config` entry is only a warning: it is legal, but that library
//! can never be verified.

use crate::config::schema::{DepsConfig, PlatformTable};
use crate::detection::Platform;
use crate::error::{BuilddepsError, Result};
use crate::requirements::checkers::{is_tool, PKG_CONFIG};

/// A non-fatal configuration finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// Platform the finding applies to.
    pub platform: Platform,
    /// Description of the problem.
    pub message: String,
}

/// Validate every platform table, returning warnings on success.
pub fn validate(config: &DepsConfig) -> Result<Vec<ConfigWarning>> {
    if config.platforms.is_empty() {
        return Err(invalid("no platforms configured"));
    }

    let mut warnings = Vec::new();
    for (platform, table) in &config.platforms {
        validate_table(*platform, table, &mut warnings)?;
    }
    Ok(warnings)
}

fn validate_table(
    platform: Platform,
    table: &PlatformTable,
    warnings: &mut Vec<ConfigWarning>,
) -> Result<()> {
    if table.install.is_empty() || table.install.iter().any(|w| w.is_empty()) {
        return Err(invalid(format!("{}: install command is empty", platform)));
    }
    if let Some(update) = &table.update {
        if update.is_empty() {
            return Err(invalid(format!("{}: update command is empty", platform)));
        }
    }
    if table.packages.is_empty() {
        return Err(invalid(format!("{}: no packages listed", platform)));
    }

    let mut seen_pkg_config = false;
    for (index, entry) in table.packages.iter().enumerate() {
        if entry.name.is_empty() || entry.package.is_empty() {
            return Err(invalid(format!(
                "{}: package entry #{} needs both a name and a package",
                platform,
                index + 1
            )));
        }
        if table.packages[..index].iter().any(|e| e.name == entry.name) {
            return Err(invalid(format!(
                "{}: '{}' is listed more than once",
                platform, entry.name
            )));
        }
        if entry.name == PKG_CONFIG {
            seen_pkg_config = true;
        } else if !is_tool(&entry.name) && !seen_pkg_config {
            warnings.push(ConfigWarning {
                platform,
                message: format!(
                    "library '{}' is listed before pkg-config and will not be verified",
                    entry.name
                ),
            });
        }
    }

    for source in &table.sources {
        if source.name.is_empty() || source.url.is_empty() || source.component.is_empty() {
            return Err(invalid(format!(
                "{}: extra sources need a name, url and component",
                platform
            )));
        }
        if source.name.contains(['/', '\\']) || source.name.starts_with('.') {
            return Err(invalid(format!(
                "{}: source name '{}' must be a plain file name",
                platform, source.name
            )));
        }
    }
    if table.keys.iter().any(|k| k.is_empty()) {
        return Err(invalid(format!("{}: key command is empty", platform)));
    }

    Ok(())
}

fn invalid(message: impl Into<String>) -> BuilddepsError {
    BuilddepsError::ConfigValidation {
        message: message.into(),
    }
}
