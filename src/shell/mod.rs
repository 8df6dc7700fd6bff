//! Shell command rendering and execution.

pub mod command;
pub mod platform;

pub use command::{
    capture, quote_argv, render_command, run_argv, split_prefix, CommandResult,
};
pub use platform::is_elevated;
