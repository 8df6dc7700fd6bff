//! The tool-detection seam.
//!
//! Everything the resolver needs to know about the host goes through the
//! [`Toolchain`] trait, so tests can substitute
//! [`StubToolchain`](crate::detection::StubToolchain) for the real
//! [`SystemToolchain`](crate::detection::SystemToolchain).

use std::path::PathBuf;

use serde::Serialize;

use super::platform::DistInfo;

/// A tool that was found on the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolInfo {
    /// Resolved location of the executable.
    pub path: PathBuf,
    /// Version string reported by the tool, when it could be determined.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl ToolInfo {
    /// Create a tool descriptor.
    pub fn new(path: impl Into<PathBuf>, version: Option<&str>) -> Self {
        Self {
            path: path.into(),
            version: version.map(str::to_string),
        }
    }

    /// Short description: path, plus version when known.
    pub fn describe(&self) -> String {
        match &self.version {
            Some(version) => format!("{} ({})", self.path.display(), version),
            None => self.path.display().to_string(),
        }
    }
}

/// Probes for build tools, libraries and the Linux distribution.
pub trait Toolchain {
    /// Locate the C compiler.
    fn check_clang(&self) -> Option<ToolInfo>;

    /// Locate the C++ compiler.
    fn check_clangxx(&self) -> Option<ToolInfo>;

    /// Locate the `gn` build generator.
    fn check_gn(&self) -> Option<ToolInfo>;

    /// Locate the `ninja` build tool.
    fn check_ninja(&self) -> Option<ToolInfo>;

    /// Locate `pkg-config`.
    fn check_pkg_config(&self) -> Option<ToolInfo>;

    /// Ask `pkg_config` whether the library `name` is installed.
    fn check_pkg(&self, pkg_config: &ToolInfo, name: &str) -> bool;

    /// Identify the Linux distribution, if any.
    fn dist_proto(&self) -> Option<DistInfo>;
}
