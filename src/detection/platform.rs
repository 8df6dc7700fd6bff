//! Host platform detection.
//!
//! Maps the running operating system onto one of the supported
//! [`Platform`] families. On Linux the family and release codename come
//! from `/etc/os-release` via [`Toolchain::dist_proto`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::detection::Toolchain;
use crate::error::{BuilddepsError, Result};

/// Supported platform families.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
pub enum Platform {
    /// Debian and derivatives (apt-get).
    #[serde(rename = "debian")]
    #[value(name = "debian")]
    Debian,
    /// macOS (Homebrew).
    #[serde(rename = "mac")]
    #[value(name = "mac")]
    Mac,
    /// Windows (direct binary downloads).
    #[serde(rename = "win")]
    #[value(name = "win")]
    Windows,
}

impl Platform {
    /// Short identifier used on the command line and in config files.
    pub fn id(&self) -> &'static str {
        match self {
            Platform::Debian => "debian",
            Platform::Mac => "mac",
            Platform::Windows => "win",
        }
    }

    /// Human-readable name, used in messages when no codename is known.
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Debian => "Debian",
            Platform::Mac => "macOS",
            Platform::Windows => "Windows",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Platform {
    type Err = BuilddepsError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "debian" => Ok(Platform::Debian),
            "mac" => Ok(Platform::Mac),
            "win" => Ok(Platform::Windows),
            other => Err(BuilddepsError::UnsupportedPlatform {
                detail: format!("no support for distribution '{}'", other),
            }),
        }
    }
}

/// Linux distribution details, as reported by `/etc/os-release`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DistInfo {
    /// Human-readable name (`PRETTY_NAME`).
    pub raw: String,
    /// Family identifier: `debian` for Debian derivatives, otherwise `ID`.
    pub distro: String,
    /// Release codename (`VERSION_CODENAME`, falling back to `UBUNTU_CODENAME`).
    pub codename: Option<String>,
}

/// Parse the contents of an os-release file.
pub fn parse_os_release(content: &str) -> DistInfo {
    let mut id = String::new();
    let mut id_like = String::new();
    let mut pretty = String::new();
    let mut version_codename = None;
    let mut ubuntu_codename = None;

    for line in content.lines() {
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let value = value.trim().trim_matches('"').trim_matches('\'');
        match key.trim() {
            "ID" => id = value.to_string(),
            "ID_LIKE" => id_like = value.to_string(),
            "PRETTY_NAME" => pretty = value.to_string(),
            "VERSION_CODENAME" if !value.is_empty() => {
                version_codename = Some(value.to_string())
            }
            "UBUNTU_CODENAME" if !value.is_empty() => ubuntu_codename = Some(value.to_string()),
            _ => {}
        }
    }

    let debian_like = |s: &str| {
        s.split_whitespace()
            .any(|word| word == "debian" || word == "ubuntu")
    };
    let distro = if debian_like(&id) || debian_like(&id_like) {
        "debian".to_string()
    } else {
        id
    };

    DistInfo {
        raw: if pretty.is_empty() {
            distro.clone()
        } else {
            pretty
        },
        distro,
        codename: version_codename.or(ubuntu_codename),
    }
}

/// Read `/etc/os-release` (or `/usr/lib/os-release`) from the local system.
pub fn read_os_release() -> Option<DistInfo> {
    ["/etc/os-release", "/usr/lib/os-release"]
        .iter()
        .find_map(|path| std::fs::read_to_string(path).ok())
        .map(|content| parse_os_release(&content))
}

/// Detect the platform family and release codename of the running host.
pub fn detect_host(toolchain: &dyn Toolchain) -> Result<(Platform, Option<String>)> {
    if cfg!(target_os = "macos") {
        Ok((Platform::Mac, None))
    } else if cfg!(target_os = "windows") {
        Ok((Platform::Windows, None))
    } else if cfg!(target_os = "linux") {
        let dist = toolchain
            .dist_proto()
            .ok_or_else(|| BuilddepsError::UnsupportedPlatform {
                detail: "cannot identify the Linux distribution".to_string(),
            })?;
        tracing::debug!("Detected distribution: {} ({:?})", dist.raw, dist.codename);
        let platform = dist.distro.parse::<Platform>()?;
        Ok((platform, dist.codename))
    } else {
        Err(BuilddepsError::UnsupportedPlatform {
            detail: format!(
                "{} is not supported; only Linux, macOS and Windows are",
                std::env::consts::OS
            ),
        })
    }
}
