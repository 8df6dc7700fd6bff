//! Configuration schema.
//!
//! The tables are loaded once at startup and never mutated; every consumer
//! receives them by reference.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::detection::Platform;
use crate::error::{BuilddepsError, Result};

/// Directory apt reads additional source lists from.
pub const DEFAULT_SOURCES_DIR: &str = "/etc/apt/sources.list.d";

fn default_sources_dir() -> PathBuf {
    PathBuf::from(DEFAULT_SOURCES_DIR)
}

/// All platform tables plus global settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DepsConfig {
    /// Where extra package source list files are written.
    #[serde(default = "default_sources_dir")]
    pub sources_dir: PathBuf,

    /// Package tables keyed by platform.
    pub platforms: BTreeMap<Platform, PlatformTable>,
}

impl DepsConfig {
    /// Look up the table for `platform`.
    pub fn table(&self, platform: Platform) -> Result<&PlatformTable> {
        self.platforms
            .get(&platform)
            .ok_or_else(|| BuilddepsError::UnknownPlatform {
                platform: platform.to_string(),
            })
    }

    /// Path of the list file for an extra source.
    pub fn source_list_path(&self, source: &ExtraSource) -> PathBuf {
        self.sources_dir.join(format!("{}.list", source.name))
    }

    /// Replace the sources directory.
    pub fn with_sources_dir(mut self, dir: &Path) -> Self {
        self.sources_dir = dir.to_path_buf();
        self
    }
}

/// How to install build dependencies on one platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlatformTable {
    /// Base install command; package names are appended.
    pub install: Vec<String>,

    /// Package index refresh command.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update: Option<Vec<String>>,

    /// Dependencies in check order.
    pub packages: Vec<PackageEntry>,

    /// Package repositories to register before installing.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<ExtraSource>,

    /// Signing-key import commands for the extra sources.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keys: Vec<Vec<String>>,
}

impl PlatformTable {
    /// Platform-specific install identifier for a canonical name.
    pub fn package_for(&self, name: &str) -> Option<&str> {
        self.packages
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.package.as_str())
    }

    /// Every install identifier in table order, without repeats.
    pub fn package_values(&self) -> Vec<String> {
        let mut values: Vec<String> = Vec::with_capacity(self.packages.len());
        for entry in &self.packages {
            if !values.contains(&entry.package) {
                values.push(entry.package.clone());
            }
        }
        values
    }
}

/// A canonical dependency name and its install identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PackageEntry {
    /// Canonical name (e.g. `ninja`, `libpng`).
    pub name: String,
    /// Package name, or `url:executable` for download-based platforms.
    pub package: String,
}

/// A non-default package repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtraSource {
    /// Source name; also the list file's stem.
    pub name: String,
    /// Repository URL.
    pub url: String,
    /// Repository component (e.g. `main`, `contrib`).
    pub component: String,
}

impl ExtraSource {
    /// The `deb` line registering this source for `codename`.
    pub fn deb_line(&self, codename: &str) -> String {
        format!("deb {} {} {}", self.url, codename, self.component)
    }
}
