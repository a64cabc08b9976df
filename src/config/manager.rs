use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use super::{Config, ConfigError};

const TMP_SUFFIX: &str = "tmp";

/// Loads and saves [`Config`] under `<home>/config/config.json`.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Returns the stored configuration, or defaults when nothing was saved yet.
    pub fn load(&self) -> Result<Config, ConfigError> {
        if self.config_path.exists() {
            let data = fs::read_to_string(&self.config_path)?;
            serde_json::from_str(&data).map_err(|err| self.malformed(err))
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config).map_err(|err| self.malformed(err))?;
        let tmp = tmp_path(&self.config_path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.config_path)?;
        tracing::debug!(path = %self.config_path.display(), "configuration saved");
        Ok(())
    }

    fn malformed(&self, err: serde_json::Error) -> ConfigError {
        ConfigError::Malformed {
            path: self.config_path.clone(),
            reason: err.to_string(),
        }
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    tmp.set_extension(TMP_SUFFIX);
    tmp
}

fn write_atomic(path: &Path, contents: &str) -> Result<(), ConfigError> {
    let mut file = File::create(path)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Theme;
    use crate::core::utils::config_file_in;
    use tempfile::tempdir;

    fn manager_in(base: &Path) -> ConfigManager {
        ConfigManager::new(config_file_in(base))
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let manager = manager_in(dir.path());
        assert_eq!(manager.load().unwrap(), Config::default());
        assert!(manager.config_path().ends_with("config/config.json"));
    }

    #[test]
    fn save_then_load_keeps_changes() {
        let dir = tempdir().unwrap();
        let manager = manager_in(dir.path());
        let mut config = Config::default();
        config.theme = Theme::Plain;
        config.data_dir = Some(dir.path().join("data"));
        manager.save(&config).unwrap();

        let loaded = manager.load().unwrap();
        assert_eq!(loaded, config);
        assert!(!tmp_path(manager.config_path()).exists());
    }

    #[test]
    fn corrupt_file_reports_serde_error() {
        let dir = tempdir().unwrap();
        let manager = manager_in(dir.path());
        fs::create_dir_all(dir.path().join("config")).unwrap();
        fs::write(manager.config_path(), "{ not json").unwrap();
        assert!(matches!(manager.load(), Err(ConfigError::Malformed { .. })));
    }
}
