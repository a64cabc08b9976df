use serde::Serialize;

use crate::domain::{Account, NetWorthBreakdown, Snapshot};

use super::NetWorthService;

/// One line of the snapshot history.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SnapshotSummary {
    pub id: String,
    pub date: String,
    pub balance_count: usize,
    pub breakdown: NetWorthBreakdown,
}

pub struct HistoryService;

impl HistoryService {
    /// Summarizes every snapshot, newest date first.
    pub fn summaries(snapshots: &[Snapshot], accounts: &[Account]) -> Vec<SnapshotSummary> {
        let mut ordered: Vec<&Snapshot> = snapshots.iter().collect();
        ordered.sort_by(|a, b| b.date.cmp(&a.date));
        ordered
            .into_iter()
            .map(|snapshot| SnapshotSummary {
                id: snapshot.id.clone(),
                date: snapshot.date.clone(),
                balance_count: snapshot.balances.len(),
                breakdown: NetWorthService::calculate(snapshot, accounts),
            })
            .collect()
    }
}
