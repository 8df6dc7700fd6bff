//! Host detection: which platform we are on and which tools are installed.
//!
//! # Modules
//!
//! - [`platform`] - Platform families and `/etc/os-release` parsing
//! - [`toolchain`] - The [`Toolchain`] probing trait
//! - [`system`] - Real probing via `PATH` and `--version`
//! - [`stub`] - Scripted probing for tests

pub mod platform;
pub mod stub;
pub mod system;
pub mod toolchain;

pub use platform::{detect_host, parse_os_release, DistInfo, Platform};
pub use stub::StubToolchain;
pub use system::SystemToolchain;
pub use toolchain::{ToolInfo, Toolchain};
