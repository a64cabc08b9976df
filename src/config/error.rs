use std::{io, path::PathBuf};

use thiserror::Error;

use super::Config;

/// Failures reading, writing or editing the preferences file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot access preferences: {0}")]
    Io(#[from] io::Error),

    #[error("Malformed preferences in {path}: {reason}")]
    Malformed { path: PathBuf, reason: String },

    #[error("Unknown setting `{0}` (expected one of: {keys})", keys = Config::KEYS.join(", "))]
    UnknownKey(String),

    #[error("Invalid value `{value}` for `{key}`")]
    InvalidValue { key: String, value: String },
}
