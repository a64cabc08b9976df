use crate::{
    domain::{latest_snapshot, Account, Settings, Snapshot},
    storage::DataSource,
};

use super::errors::Result;

/// Read-only accessors over an injected [`DataSource`].
///
/// The repository never caches; every accessor reloads from the source.
pub struct Repository {
    source: Box<dyn DataSource>,
}

impl Repository {
    pub fn new(source: Box<dyn DataSource>) -> Self {
        Self { source }
    }

    pub fn accounts(&self) -> Result<Vec<Account>> {
        let accounts = self.source.load_accounts()?;
        tracing::debug!(count = accounts.len(), "accounts loaded");
        Ok(accounts)
    }

    pub fn snapshots(&self) -> Result<Vec<Snapshot>> {
        let snapshots = self.source.load_snapshots()?;
        tracing::debug!(count = snapshots.len(), "snapshots loaded");
        Ok(snapshots)
    }

    /// Most recent snapshot by date string, or `None` when no snapshot exists.
    pub fn latest_snapshot(&self) -> Result<Option<Snapshot>> {
        let snapshots = self.snapshots()?;
        Ok(latest_snapshot(&snapshots).cloned())
    }

    pub fn snapshot(&self, id: &str) -> Result<Option<Snapshot>> {
        Ok(self
            .snapshots()?
            .into_iter()
            .find(|snapshot| snapshot.id == id))
    }

    pub fn settings(&self) -> Result<Settings> {
        Ok(self.source.load_settings()?)
    }

    pub fn describe(&self) -> String {
        self.source.describe()
    }
}
