//! Error types for builddeps operations.
//!
//! This module defines [`BuilddepsError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! Missing dependencies found by `check` are not errors: they are a normal
//! outcome reported to the user. Everything here aborts the run.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for builddeps operations.
#[derive(Debug, Error)]
pub enum BuilddepsError {
    /// The host operating system or distribution has no supported family.
    #[error("Unsupported platform: {detail}")]
    UnsupportedPlatform { detail: String },

    /// The loaded tables have no entry for the requested platform.
    #[error("No package table configured for platform '{platform}'")]
    UnknownPlatform { platform: String },

    /// An extra package source must be registered but no codename is known.
    #[error("Cannot register package source '{source_name}' without a release codename (pass --codename)")]
    MissingCodename { source_name: String },

    /// Failed to parse a configuration document.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidation { message: String },

    /// A command prefix could not be split into shell words.
    #[error("Cannot parse command prefix '{input}': {message}")]
    CommandParse { input: String, message: String },

    /// A command could not be started at all.
    #[error("Failed to start command: {command}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// A command ran but exited unsuccessfully.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// Writing a file failed.
    #[error("Failed to write {path}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for builddeps operations.
pub type Result<T> = std::result::Result<T, BuilddepsError>;
