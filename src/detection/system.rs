//! Real tool detection against the running system.
//!
//! Tools are resolved the way a build script would: an environment
//! override (`CC`, `CXX`, `GN`, `NINJA`, `PKG_CONFIG`) wins, otherwise the
//! default binary name is looked up on `PATH`. A tool only counts as present
//! if it also answers `--version` successfully.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use super::platform::{read_os_release, DistInfo};
use super::toolchain::{ToolInfo, Toolchain};
use crate::shell::capture;

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable. The platform
/// executable suffix (`.exe` on Windows) is tried after the bare name.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    let suffixed = format!("{}{}", tool, std::env::consts::EXE_SUFFIX);
    for dir in path_entries {
        for name in [tool, suffixed.as_str()] {
            let candidate = dir.join(name);
            if candidate.is_file() && is_executable(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Regex for dotted version numbers.
static DOTTED_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)+").expect("DOTTED_VERSION must compile"));

/// Pull a version out of `--version` output.
///
/// Prefers the first dotted number (`clang version 14.0.6` -> `14.0.6`);
/// tools like `gn` that print a bare build number fall back to the
/// trimmed first line.
pub fn extract_version(output: &str) -> Option<String> {
    let first = output.lines().map(str::trim).find(|l| !l.is_empty())?;
    match DOTTED_VERSION.find(first) {
        Some(m) => Some(m.as_str().to_string()),
        None => Some(first.to_string()),
    }
}

/// [`Toolchain`] backed by the environment, `PATH` and `/etc/os-release`.
#[derive(Debug, Clone)]
pub struct SystemToolchain {
    path_entries: Vec<PathBuf>,
    env: fn(&str) -> Option<String>,
}

impl Default for SystemToolchain {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemToolchain {
    /// Detect tools using the process environment.
    pub fn new() -> Self {
        Self {
            path_entries: parse_system_path(),
            env: |key| std::env::var(key).ok().filter(|v| !v.is_empty()),
        }
    }

    /// Detect tools on an explicit search path, ignoring env overrides.
    pub fn with_path(path_entries: Vec<PathBuf>) -> Self {
        Self {
            path_entries,
            env: |_| None,
        }
    }

    fn find_tool(&self, env_var: &str, default: &str) -> Option<ToolInfo> {
        let requested = (self.env)(env_var).unwrap_or_else(|| default.to_string());
        let candidate = Path::new(&requested);

        let path = if candidate.components().count() > 1 {
            candidate.is_file().then(|| candidate.to_path_buf())
        } else {
            resolve_tool_path(&requested, &self.path_entries)
        };

        let Some(path) = path else {
            tracing::debug!("{} not found (looked for '{}')", default, requested);
            return None;
        };

        match capture(&path, &["--version"]) {
            Ok(result) if result.success => {
                let version = extract_version(&result.stdout)
                    .or_else(|| extract_version(&result.stderr));
                tracing::debug!("Found {} at {} ({:?})", default, path.display(), version);
                Some(ToolInfo { path, version })
            }
            Ok(result) => {
                tracing::debug!(
                    "{} at {} failed --version with {:?}",
                    default,
                    path.display(),
                    result.exit_code
                );
                None
            }
            Err(e) => {
                tracing::debug!("{} at {} could not run: {}", default, path.display(), e);
                None
            }
        }
    }
}

impl Toolchain for SystemToolchain {
    fn check_clang(&self) -> Option<ToolInfo> {
        self.find_tool("CC", "clang")
    }

    fn check_clangxx(&self) -> Option<ToolInfo> {
        self.find_tool("CXX", "clang++")
    }

    fn check_gn(&self) -> Option<ToolInfo> {
        self.find_tool("GN", "gn")
    }

    fn check_ninja(&self) -> Option<ToolInfo> {
        self.find_tool("NINJA", "ninja")
    }

    fn check_pkg_config(&self) -> Option<ToolInfo> {
        self.find_tool("PKG_CONFIG", "pkg-config")
    }

    fn check_pkg(&self, pkg_config: &ToolInfo, name: &str) -> bool {
        let found = capture(&pkg_config.path, &["--exists", name])
            .map(|r| r.success)
            .unwrap_or(false);
        tracing::debug!("pkg-config --exists {}: {}", name, found);
        found
    }

    fn dist_proto(&self) -> Option<DistInfo> {
        read_os_release()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[cfg(unix)]
    fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;
        let path = dir.join(name);
        fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[test]
    fn extract_version_prefers_dotted_number() {
        assert_eq!(
            extract_version("Ubuntu clang version 14.0.0-1ubuntu1\nTarget: x86_64"),
            Some("14.0.0".to_string())
        );
        assert_eq!(extract_version("1.11.1\n"), Some("1.11.1".to_string()));
    }

    #[test]
    fn extract_version_falls_back_to_first_line() {
        assert_eq!(
            extract_version("\n2122 (b0c4b0e)\n"),
            Some("2122 (b0c4b0e)".to_string())
        );
        assert_eq!(extract_version("   \n"), None);
    }

    #[test]
    fn resolve_tool_path_misses_empty_dirs() {
        let temp = TempDir::new().unwrap();
        assert!(resolve_tool_path("ninja", &[temp.path().to_path_buf()]).is_none());
    }

    #[cfg(unix)]
    #[test]
    fn resolve_tool_path_skips_non_executable() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("ninja"), "not a program").unwrap();
        assert!(resolve_tool_path("ninja", &[temp.path().to_path_buf()]).is_none());
    }

    #[cfg(unix)]
    #[test]
    fn finds_tool_and_version_on_path() {
        let temp = TempDir::new().unwrap();
        let script = write_script(temp.path(), "ninja", "echo 1.11.1");
        let toolchain = SystemToolchain::with_path(vec![temp.path().to_path_buf()]);

        let tool = toolchain.check_ninja().unwrap();
        assert_eq!(tool.path, script);
        assert_eq!(tool.version.as_deref(), Some("1.11.1"));
        assert!(toolchain.check_gn().is_none());
    }

    #[cfg(unix)]
    #[test]
    fn failing_version_probe_counts_as_missing() {
        let temp = TempDir::new().unwrap();
        write_script(temp.path(), "gn", "exit 3");
        let toolchain = SystemToolchain::with_path(vec![temp.path().to_path_buf()]);
        assert!(toolchain.check_gn().is_none());
    }

    #[cfg(unix)]
    #[test]
    fn check_pkg_uses_exit_status() {
        let temp = TempDir::new().unwrap();
        write_script(
            temp.path(),
            "pkg-config",
            r#"[ "$1" = "--version" ] && { echo 0.29.2; exit 0; }
[ "$2" = "libpng" ]"#,
        );
        let toolchain = SystemToolchain::with_path(vec![temp.path().to_path_buf()]);

        let pkg_config = toolchain.check_pkg_config().unwrap();
        assert_eq!(pkg_config.version.as_deref(), Some("0.29.2"));
        assert!(toolchain.check_pkg(&pkg_config, "libpng"));
        assert!(!toolchain.check_pkg(&pkg_config, "zlib"));
    }
}
