use crate::domain::{Account, Settings, Snapshot};

use super::{DataSource, Result};

/// Fixture source holding the collections in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDataSource {
    pub accounts: Vec<Account>,
    pub snapshots: Vec<Snapshot>,
    pub settings: Settings,
}

impl InMemoryDataSource {
    pub fn new(accounts: Vec<Account>, snapshots: Vec<Snapshot>, settings: Settings) -> Self {
        Self {
            accounts,
            snapshots,
            settings,
        }
    }
}

impl DataSource for InMemoryDataSource {
    fn load_accounts(&self) -> Result<Vec<Account>> {
        Ok(self.accounts.clone())
    }

    fn load_snapshots(&self) -> Result<Vec<Snapshot>> {
        Ok(self.snapshots.clone())
    }

    fn load_settings(&self) -> Result<Settings> {
        Ok(self.settings.clone())
    }

    fn describe(&self) -> String {
        format!(
            "memory ({} accounts, {} snapshots)",
            self.accounts.len(),
            self.snapshots.len()
        )
    }
}
