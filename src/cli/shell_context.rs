use std::path::PathBuf;

use dialoguer::theme::ColorfulTheme;

use crate::{
    config::{Config, ConfigManager},
    core::Repository,
    dashboard::{SnapshotSelection, TableSorts},
};

use super::registry::CommandRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// State of one dashboard session.
///
/// Sort state and snapshot selection live here only; they are never
/// persisted and reset whenever the dashboard is remounted.
pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub theme: ColorfulTheme,
    pub home: PathBuf,
    pub data_dir: PathBuf,
    /// Data directory forced for the whole session, ahead of the configured one.
    pub data_override: Option<PathBuf>,
    pub config_manager: ConfigManager,
    pub config: Config,
    pub repository: Repository,
    pub selection: SnapshotSelection,
    pub sorts: TableSorts,
    pub running: bool,
}
