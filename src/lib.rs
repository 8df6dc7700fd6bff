//! builddeps - check for and install native build dependencies.
//!
//! builddeps knows, per platform, which tools and libraries a project needs
//! to build and how to install them. `check` reports what is missing along
//! with the exact commands to fix it; `install` runs those commands.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Package tables: built-in, file loading and validation
//! - [`detection`] - Host platform and tool detection
//! - [`error`] - Error types and result aliases
//! - [`requirements`] - Dependency checking and installation
//! - [`shell`] - Command rendering and execution
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use builddeps::config::builtin_config;
//! use builddeps::detection::{Platform, StubToolchain};
//! use builddeps::requirements::check;
//!
//! let config = builtin_config().unwrap();
//! let toolchain = StubToolchain::all_present().without_tool("ninja");
//! let result = check(&config, &toolchain, Platform::Mac, None, "").unwrap();
//! assert_eq!(result.missing(), ["ninja".to_string()]);
//! ```

pub mod cli;
pub mod config;
pub mod detection;
pub mod error;
pub mod requirements;
pub mod shell;
pub mod ui;

pub use error::{BuilddepsError, Result};
