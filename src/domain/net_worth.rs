use serde::Serialize;

use crate::domain::{
    account::{Account, AccountType},
    common::{Identifiable, NamedEntity},
};

/// Per-category totals for one snapshot plus the resulting net worth.
///
/// `total` is always `cash + assets - debts`; debts are expected to be stored
/// as positive magnitudes.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq)]
pub struct NetWorthBreakdown {
    pub cash: f64,
    pub assets: f64,
    pub debts: f64,
    pub total: f64,
}

impl NetWorthBreakdown {
    pub fn new(cash: f64, assets: f64, debts: f64) -> Self {
        Self {
            cash,
            assets,
            debts,
            total: cash + assets - debts,
        }
    }

    /// Bucket total for a single category.
    pub fn category_total(&self, kind: AccountType) -> f64 {
        match kind {
            AccountType::Cash => self.cash,
            AccountType::Asset => self.assets,
            AccountType::Debt => self.debts,
        }
    }
}

/// An account annotated with its balance in a specific snapshot.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AccountWithBalance {
    #[serde(flatten)]
    pub account: Account,
    pub balance: f64,
}

impl AccountWithBalance {
    pub fn new(account: Account, balance: f64) -> Self {
        Self { account, balance }
    }

    pub fn kind(&self) -> AccountType {
        self.account.kind
    }
}

impl Identifiable for AccountWithBalance {
    fn id(&self) -> &str {
        &self.account.id
    }
}

impl NamedEntity for AccountWithBalance {
    fn name(&self) -> &str {
        &self.account.name
    }
}
