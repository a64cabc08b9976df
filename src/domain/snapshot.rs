use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::Identifiable;

/// Amount held in one account at the time of a snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Balance {
    #[serde(rename = "accountId")]
    pub account_id: String,
    pub amount: f64,
}

impl Balance {
    pub fn new(account_id: impl Into<String>, amount: f64) -> Self {
        Self {
            account_id: account_id.into(),
            amount,
        }
    }
}

/// A dated set of account balances.
///
/// `balances` may reference account ids that do not exist; consumers skip them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Snapshot {
    pub id: String,
    pub date: String,
    #[serde(default)]
    pub balances: Vec<Balance>,
}

impl Snapshot {
    pub fn new(id: impl Into<String>, date: impl Into<String>, balances: Vec<Balance>) -> Self {
        Self {
            id: id.into(),
            date: date.into(),
            balances,
        }
    }

    /// Parses the ISO date, returning `None` when the source string is malformed.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}

impl Identifiable for Snapshot {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Picks the snapshot with the lexicographically greatest date string.
///
/// Ties keep the earliest entry in source order.
pub fn latest_snapshot(snapshots: &[Snapshot]) -> Option<&Snapshot> {
    let mut latest: Option<&Snapshot> = None;
    for snapshot in snapshots {
        match latest {
            Some(current) if snapshot.date <= current.date => {}
            _ => latest = Some(snapshot),
        }
    }
    latest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_uses_string_order_and_first_on_ties() {
        let snapshots = vec![
            Snapshot::new("s1", "2024-12-31", Vec::new()),
            Snapshot::new("s2", "2025-01-31", Vec::new()),
            Snapshot::new("s3", "2025-01-31", Vec::new()),
            Snapshot::new("s4", "2025-01-15", Vec::new()),
        ];
        assert_eq!(latest_snapshot(&snapshots).map(|s| s.id.as_str()), Some("s2"));
        assert!(latest_snapshot(&[]).is_none());
    }

    #[test]
    fn balance_uses_camel_case_account_id() {
        let balance: Balance = serde_json::from_str(r#"{"accountId":"a1","amount":12.5}"#).unwrap();
        assert_eq!(balance, Balance::new("a1", 12.5));
    }
}
