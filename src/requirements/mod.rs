//! Dependency checking and installation.
//!
//! # Modules
//!
//! - [`checkers`] - Which dependencies are tools, and their probes
//! - [`resolver`] - Find what is missing and how to install it
//! - [`status`] - Check outcome types and the user report
//! - [`installer`] - Register sources and run the install commands

pub mod checkers;
pub mod installer;
pub mod resolver;
pub mod status;

pub use checkers::{checker_for, is_tool, Checker, PKG_CONFIG};
pub use installer::{default_context, install, InstallOptions, InstallerContext};
pub use resolver::{check, Resolver, CODENAME_PLACEHOLDER};
pub use status::{Instructions, ResolutionResult};
