//! View model of the net-worth dashboard: summary card, per-category tables
//! and their sort state.

pub mod category_table;
pub mod net_worth_card;
pub mod page;

pub use category_table::{
    sort_accounts, table_id, CategoryRow, CategoryTable, ColumnHeader, SortDirection, SortKey,
    SortState,
};
pub use net_worth_card::{CategoryTotal, NetWorthCard};
pub use page::{DashboardView, SnapshotSelection, TableSorts, EMPTY_MESSAGE};
