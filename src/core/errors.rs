use std::result::Result as StdResult;

use thiserror::Error;

use crate::config::ConfigError;
use crate::errors::DataError;

/// Unified error type for the repository, services and dashboard layers.
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error(transparent)]
    Data(#[from] DataError),
    #[error("Snapshot not found: {0}")]
    SnapshotNotFound(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

pub type Result<T> = StdResult<T, DashboardError>;

/// User-facing CLI error wrapper.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] DashboardError),
    #[error("Invalid input: {0}")]
    Input(String),
    #[error("Command failed: {0}")]
    Command(String),
}

impl From<ConfigError> for DashboardError {
    fn from(err: ConfigError) -> Self {
        DashboardError::ConfigError(err.to_string())
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::from(DashboardError::from(err))
    }
}
