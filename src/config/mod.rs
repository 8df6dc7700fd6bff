//! Platform package tables.
//!
//! # Modules
//!
//! - [`schema`] - Table types
//! - [`loader`] - Discovery and loading
//! - [`validator`] - Structural checks

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{builtin_config, load_config, load_from, parse_config, ConfigSource};
pub use schema::{DepsConfig, ExtraSource, PackageEntry, PlatformTable, DEFAULT_SOURCES_DIR};
pub use validator::{validate, ConfigWarning};

/// The built-in tables, as YAML.
pub const BUILTIN_CONFIG: &str = include_str!("builtin.yml");
