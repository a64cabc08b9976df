pub mod json_backend;
pub mod memory;

use crate::{
    domain::{Account, Settings, Snapshot},
    errors::DataError,
};

pub type Result<T> = std::result::Result<T, DataError>;

/// Read-only source of the three fixed collections behind the dashboard.
///
/// Every call returns a freshly loaded, independently owned copy.
pub trait DataSource: Send + Sync {
    fn load_accounts(&self) -> Result<Vec<Account>>;
    fn load_snapshots(&self) -> Result<Vec<Snapshot>>;
    fn load_settings(&self) -> Result<Settings>;

    /// Short human-readable description used in logs and `settings` output.
    fn describe(&self) -> String;
}

pub use json_backend::{JsonDataSource, ACCOUNTS_FILE, SETTINGS_FILE, SNAPSHOTS_FILE};
pub use memory::InMemoryDataSource;
