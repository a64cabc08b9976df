use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::de::DeserializeOwned;

use crate::{
    domain::{Account, Settings, Snapshot},
    errors::DataError,
};

use super::{DataSource, Result};

pub const ACCOUNTS_FILE: &str = "accounts.json";
pub const SNAPSHOTS_FILE: &str = "snapshots.json";
pub const SETTINGS_FILE: &str = "settings.json";

/// Filesystem-backed source reading flat JSON files from one directory.
#[derive(Debug, Clone)]
pub struct JsonDataSource {
    dir: PathBuf,
}

impl JsonDataSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn read<T: DeserializeOwned>(&self, file: &str) -> Result<T> {
        let path = self.dir.join(file);
        tracing::debug!(path = %path.display(), "loading data file");
        load_json(&path)
    }
}

impl DataSource for JsonDataSource {
    fn load_accounts(&self) -> Result<Vec<Account>> {
        self.read(ACCOUNTS_FILE)
    }

    fn load_snapshots(&self) -> Result<Vec<Snapshot>> {
        self.read(SNAPSHOTS_FILE)
    }

    fn load_settings(&self) -> Result<Settings> {
        self.read(SETTINGS_FILE)
    }

    fn describe(&self) -> String {
        format!("json:{}", self.dir.display())
    }
}

/// Reads and deserializes one JSON document, tagging failures with the path.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let data = fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| DataError::Json {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AccountType;
    use tempfile::tempdir;

    #[test]
    fn reads_all_three_files() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(ACCOUNTS_FILE),
            r#"[{"id":"a1","name":"Checking","type":"cash","subtype":"checking","institution":"First Bank"}]"#,
        )
        .unwrap();
        fs::write(
            dir.path().join(SNAPSHOTS_FILE),
            r#"[{"id":"s1","date":"2025-01-31","balances":[{"accountId":"a1","amount":250.0}]}]"#,
        )
        .unwrap();
        fs::write(
            dir.path().join(SETTINGS_FILE),
            r#"{"currency":{"code":"EUR","symbol":"€","locale":"de-DE"}}"#,
        )
        .unwrap();

        let source = JsonDataSource::new(dir.path());
        let accounts = source.load_accounts().unwrap();
        assert_eq!(accounts[0].kind, AccountType::Cash);
        assert_eq!(accounts[0].institution.as_deref(), Some("First Bank"));
        assert_eq!(source.load_snapshots().unwrap()[0].balances.len(), 1);
        assert_eq!(source.load_settings().unwrap().currency.code, "EUR");
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempdir().unwrap();
        let err = JsonDataSource::new(dir.path()).load_accounts().unwrap_err();
        assert!(matches!(err, DataError::Io { .. }));
        assert!(err.to_string().contains(ACCOUNTS_FILE), "{err}");
    }

    #[test]
    fn malformed_record_fails_fast() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(ACCOUNTS_FILE),
            r#"[{"id":"a1","name":"Checking","type":"savings","subtype":"checking"}]"#,
        )
        .unwrap();
        let err = JsonDataSource::new(dir.path()).load_accounts().unwrap_err();
        assert!(matches!(err, DataError::Json { .. }));
    }
}
