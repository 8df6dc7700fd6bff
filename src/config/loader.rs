//! Configuration discovery and loading.
//!
//! Exactly one document is used, chosen in this order:
//! 1. An explicit path (`--config` or `BUILDDEPS_CONFIG`)
//! 2. User config (`~/.builddeps/config.yml`), if it exists
//! 3. The built-in tables compiled into the binary

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::DepsConfig;
use crate::config::validator::validate;
use crate::config::BUILTIN_CONFIG;
use crate::error::{BuilddepsError, Result};

/// Where the active configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// A file on disk.
    File(PathBuf),
    /// The tables embedded in the binary.
    Builtin,
}

impl ConfigSource {
    /// Pick the configuration source.
    pub fn discover(explicit: Option<&Path>) -> Self {
        if let Some(path) = explicit {
            return Self::File(path.to_path_buf());
        }
        match find_user_config() {
            Some(path) => Self::File(path),
            None => Self::Builtin,
        }
    }
}

/// Find user's config at ~/.builddeps/config.yml
fn find_user_config() -> Option<PathBuf> {
    let path = dirs::home_dir()?.join(".builddeps").join("config.yml");
    if path.exists() {
        Some(path)
    } else {
        None
    }
}

/// Parse and validate a YAML document. `origin` is used in error messages.
pub fn parse_config(content: &str, origin: &Path) -> Result<DepsConfig> {
    let config: DepsConfig =
        serde_yaml::from_str(content).map_err(|e| BuilddepsError::ConfigParse {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })?;

    for warning in validate(&config)? {
        tracing::warn!("{}: {}", warning.platform, warning.message);
    }
    Ok(config)
}

/// Load the built-in tables.
pub fn builtin_config() -> Result<DepsConfig> {
    parse_config(BUILTIN_CONFIG, Path::new("<builtin>"))
}

/// Load configuration from `source`.
pub fn load_from(source: &ConfigSource) -> Result<DepsConfig> {
    match source {
        ConfigSource::Builtin => {
            tracing::debug!("Using built-in package tables");
            builtin_config()
        }
        ConfigSource::File(path) => {
            tracing::debug!("Loading package tables from {}", path.display());
            let content = fs::read_to_string(path).map_err(|e| BuilddepsError::ConfigParse {
                path: path.clone(),
                message: e.to_string(),
            })?;
            parse_config(&content, path)
        }
    }
}

/// Discover and load the configuration.
pub fn load_config(explicit: Option<&Path>) -> Result<DepsConfig> {
    load_from(&ConfigSource::discover(explicit))
}
