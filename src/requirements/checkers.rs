//! The checker set: which dependency names are tools, and how to find them.
//!
//! Names not listed here are libraries, verified through pkg-config.

use crate::detection::{ToolInfo, Toolchain};

/// Canonical name of the pkg-config tool.
pub const PKG_CONFIG: &str = "pkg-config";

/// Probe for one tool.
pub type Checker = fn(&dyn Toolchain) -> Option<ToolInfo>;

fn clang(t: &dyn Toolchain) -> Option<ToolInfo> {
    t.check_clang()
}

fn clangxx(t: &dyn Toolchain) -> Option<ToolInfo> {
    t.check_clangxx()
}

fn gn(t: &dyn Toolchain) -> Option<ToolInfo> {
    t.check_gn()
}

fn ninja(t: &dyn Toolchain) -> Option<ToolInfo> {
    t.check_ninja()
}

fn pkg_config(t: &dyn Toolchain) -> Option<ToolInfo> {
    t.check_pkg_config()
}

const CHECKERS: &[(&str, Checker)] = &[
    ("clang", clang),
    ("clang++", clangxx),
    ("gn", gn),
    ("ninja", ninja),
    (PKG_CONFIG, pkg_config),
];

/// The checker for a tool name, or `None` for libraries.
pub fn checker_for(name: &str) -> Option<Checker> {
    CHECKERS
        .iter()
        .find(|(tool, _)| *tool == name)
        .map(|(_, checker)| *checker)
}

/// Whether `name` is a tool (has a checker).
pub fn is_tool(name: &str) -> bool {
    checker_for(name).is_some()
}
