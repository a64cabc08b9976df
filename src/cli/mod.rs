//! Terminal front end: command registry, interactive and script shells, and
//! the text renderers for the dashboard.

pub mod commands;
pub mod core;
mod help;
pub mod io;
pub mod output;
pub mod registry;
mod shell;
pub mod shell_context;
pub mod ui;

pub use shell::{run_cli, run_command_line, SCRIPT_ENV};
