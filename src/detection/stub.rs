//! In-memory [`Toolchain`] for tests.
//!
//! # Example
//!
//! ```
//! use builddeps::detection::{StubToolchain, Toolchain};
//!
//! let toolchain = StubToolchain::all_present().without_tool("ninja");
//! assert!(toolchain.check_gn().is_some());
//! assert!(toolchain.check_ninja().is_none());
//! ```

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

use super::platform::DistInfo;
use super::toolchain::{ToolInfo, Toolchain};

/// Tool names the stub understands.
pub const STUB_TOOLS: &[&str] = &["clang", "clang++", "gn", "ninja", "pkg-config"];

/// A scripted toolchain: tools and libraries are present only if registered.
#[derive(Debug, Default)]
pub struct StubToolchain {
    tools: BTreeMap<String, ToolInfo>,
    missing_libraries: BTreeSet<String>,
    all_libraries: bool,
    dist: Option<DistInfo>,
    pkg_queries: RefCell<Vec<String>>,
}

impl StubToolchain {
    /// An empty toolchain: nothing is installed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every tool is installed under `/usr/bin` and every library resolves.
    pub fn all_present() -> Self {
        let mut stub = Self::new();
        for tool in STUB_TOOLS {
            stub = stub.with_tool(tool, &format!("/usr/bin/{}", tool));
        }
        stub.all_libraries = true;
        stub
    }

    /// Register a tool at `path`.
    pub fn with_tool(mut self, name: &str, path: &str) -> Self {
        self.tools
            .insert(name.to_string(), ToolInfo::new(path, Some("1.0.0")));
        self
    }

    /// Remove a tool.
    pub fn without_tool(mut self, name: &str) -> Self {
        self.tools.remove(name);
        self
    }

    /// Make a library query fail.
    pub fn without_library(mut self, name: &str) -> Self {
        self.missing_libraries.insert(name.to_string());
        self
    }

    /// Report a Linux distribution.
    pub fn with_dist(mut self, dist: DistInfo) -> Self {
        self.dist = Some(dist);
        self
    }

    /// Library names passed to [`Toolchain::check_pkg`], in call order.
    pub fn pkg_queries(&self) -> Vec<String> {
        self.pkg_queries.borrow().clone()
    }

    fn tool(&self, name: &str) -> Option<ToolInfo> {
        self.tools.get(name).cloned()
    }
}

impl Toolchain for StubToolchain {
    fn check_clang(&self) -> Option<ToolInfo> {
        self.tool("clang")
    }

    fn check_clangxx(&self) -> Option<ToolInfo> {
        self.tool("clang++")
    }

    fn check_gn(&self) -> Option<ToolInfo> {
        self.tool("gn")
    }

    fn check_ninja(&self) -> Option<ToolInfo> {
        self.tool("ninja")
    }

    fn check_pkg_config(&self) -> Option<ToolInfo> {
        self.tool("pkg-config")
    }

    fn check_pkg(&self, _pkg_config: &ToolInfo, name: &str) -> bool {
        self.pkg_queries.borrow_mut().push(name.to_string());
        self.all_libraries && !self.missing_libraries.contains(name)
    }

    fn dist_proto(&self) -> Option<DistInfo> {
        self.dist.clone()
    }
}
