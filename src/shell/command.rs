//! Command rendering and execution.
//!
//! Commands are kept as argv vectors and executed without a shell, so the
//! quoted form shown to the user is exactly what runs.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{BuilddepsError, Result};

/// Result of executing a command with captured output.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

/// Split a prefix such as `sudo -E` into shell words.
pub fn split_prefix(prefix: &str) -> Result<Vec<String>> {
    shell_words::split(prefix).map_err(|e| BuilddepsError::CommandParse {
        input: prefix.to_string(),
        message: e.to_string(),
    })
}

/// Quote every word of an argv for display or copy-paste.
pub fn quote_argv<S: AsRef<str>>(argv: &[S]) -> String {
    argv.iter()
        .map(|arg| shell_words::quote(arg.as_ref()).into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render `prefix` followed by `args` as a single shell-safe command line.
///
/// Splitting the result with a POSIX shell-word splitter yields the prefix
/// tokens followed by `args`, unchanged.
///
/// ```
/// use builddeps::shell::render_command;
///
/// let args = vec!["install".to_string(), "my pkg".to_string()];
/// assert_eq!(render_command("sudo", &args).unwrap(), "sudo install 'my pkg'");
/// ```
pub fn render_command<S: AsRef<str>>(prefix: &str, args: &[S]) -> Result<String> {
    let mut argv = split_prefix(prefix)?;
    argv.extend(args.iter().map(|a| a.as_ref().to_string()));
    Ok(quote_argv(&argv))
}

/// Run an argv with inherited stdio, failing on a non-zero exit.
pub fn run_argv<S: AsRef<str>>(argv: &[S]) -> Result<()> {
    let shown = quote_argv(argv);
    let Some((program, args)) = argv.split_first() else {
        return Err(BuilddepsError::CommandFailed {
            command: shown,
            code: None,
        });
    };

    tracing::debug!("Running: {}", shown);
    let status = Command::new(program.as_ref())
        .args(args.iter().map(AsRef::as_ref))
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|source| BuilddepsError::CommandSpawn {
            command: shown.clone(),
            source,
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(BuilddepsError::CommandFailed {
            command: shown,
            code: status.code(),
        })
    }
}

/// Run a program and capture its output.
///
/// A non-zero exit is reported through [`CommandResult::success`], not as
/// an error; only failing to start the program is an error.
pub fn capture(program: &Path, args: &[&str]) -> Result<CommandResult> {
    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .map_err(|source| BuilddepsError::CommandSpawn {
            command: format!("{} {}", program.display(), quote_argv(args)),
            source,
        })?;

    Ok(CommandResult {
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        success: output.status.success(),
    })
}
