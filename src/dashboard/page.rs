use serde::Serialize;

use crate::{
    core::{errors::Result, services::NetWorthService, DashboardError, Repository},
    domain::AccountType,
};

use super::{
    category_table::{CategoryTable, SortKey, SortState},
    net_worth_card::NetWorthCard,
};

pub const EMPTY_MESSAGE: &str = "No data available";

/// Sort state of the three category tables for one dashboard session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableSorts {
    cash: SortState,
    asset: SortState,
    debt: SortState,
}

impl TableSorts {
    pub fn get(&self, kind: AccountType) -> SortState {
        match kind {
            AccountType::Cash => self.cash,
            AccountType::Asset => self.asset,
            AccountType::Debt => self.debt,
        }
    }

    /// Header click on the table of `kind`; returns the new state.
    pub fn click(&mut self, kind: AccountType, key: SortKey) -> SortState {
        let state = match kind {
            AccountType::Cash => &mut self.cash,
            AccountType::Asset => &mut self.asset,
            AccountType::Debt => &mut self.debt,
        };
        state.on_header(key);
        *state
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Which snapshot the dashboard renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SnapshotSelection {
    #[default]
    Latest,
    Id(String),
}

impl SnapshotSelection {
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "" | "latest" => SnapshotSelection::Latest,
            id => SnapshotSelection::Id(id.to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum DashboardView {
    Empty {
        message: &'static str,
    },
    Ready {
        #[serde(rename = "net-worth-card")]
        card: NetWorthCard,
        tables: Vec<CategoryTable>,
    },
}

impl DashboardView {
    /// Loads the data once and derives the card plus the three tables.
    ///
    /// No snapshot at all yields [`DashboardView::Empty`]; an explicit id that
    /// does not exist is an error.
    pub fn load(
        repository: &Repository,
        selection: &SnapshotSelection,
        sorts: &TableSorts,
    ) -> Result<Self> {
        let snapshot = match selection {
            SnapshotSelection::Latest => repository.latest_snapshot()?,
            SnapshotSelection::Id(id) => Some(
                repository
                    .snapshot(id)?
                    .ok_or_else(|| DashboardError::SnapshotNotFound(id.clone()))?,
            ),
        };
        let Some(snapshot) = snapshot else {
            tracing::debug!("no snapshot available");
            return Ok(DashboardView::Empty {
                message: EMPTY_MESSAGE,
            });
        };

        let accounts = repository.accounts()?;
        let settings = repository.settings()?;

        let breakdown = NetWorthService::calculate(&snapshot, &accounts);
        let joined = NetWorthService::accounts_with_balances(&snapshot, &accounts);
        tracing::debug!(
            snapshot = %snapshot.id,
            rows = joined.len(),
            total = breakdown.total,
            "dashboard derived"
        );

        let tables = AccountType::ALL
            .into_iter()
            .map(|kind| {
                let rows = NetWorthService::accounts_in_category(&joined, kind);
                CategoryTable::build(
                    kind,
                    &rows,
                    breakdown.category_total(kind),
                    sorts.get(kind),
                    &settings.currency,
                )
            })
            .collect();

        Ok(DashboardView::Ready {
            card: NetWorthCard::build(&snapshot, &breakdown, &settings),
            tables,
        })
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, DashboardView::Empty { .. })
    }

    pub fn card(&self) -> Option<&NetWorthCard> {
        match self {
            DashboardView::Ready { card, .. } => Some(card),
            DashboardView::Empty { .. } => None,
        }
    }

    pub fn tables(&self) -> &[CategoryTable] {
        match self {
            DashboardView::Ready { tables, .. } => tables,
            DashboardView::Empty { .. } => &[],
        }
    }

    pub fn table(&self, kind: AccountType) -> Option<&CategoryTable> {
        self.tables().iter().find(|table| table.category == kind)
    }
}
