use dirs::home_dir;
use std::{
    env,
    path::{Path, PathBuf},
};

const DEFAULT_DIR_NAME: &str = ".networth";
const DATA_DIR: &str = "data";
const CONFIG_DIR: &str = "config";
const CONFIG_FILE: &str = "config.json";

/// Environment variable overriding the application home directory.
pub const HOME_ENV: &str = "NETWORTH_HOME";
/// Environment variable overriding the data directory for a single run.
pub const DATA_DIR_ENV: &str = "NETWORTH_DATA_DIR";

/// Returns the application-specific home directory, defaulting to `~/.networth`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Default location of `accounts.json`, `snapshots.json` and `settings.json`.
pub fn default_data_dir_in(base: &Path) -> PathBuf {
    base.join(DATA_DIR)
}

/// Path of the persisted CLI preferences under `base`.
pub fn config_file_in(base: &Path) -> PathBuf {
    base.join(CONFIG_DIR).join(CONFIG_FILE)
}

/// Data directory named by [`DATA_DIR_ENV`], if set.
pub fn data_dir_override() -> Option<PathBuf> {
    env::var_os(DATA_DIR_ENV).map(PathBuf::from)
}

/// Resolves the data directory: explicit override, then configured path, then default.
pub fn resolve_data_dir(
    override_dir: Option<&Path>,
    configured: Option<&Path>,
    base: &Path,
) -> PathBuf {
    override_dir
        .or(configured)
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_data_dir_in(base))
}
