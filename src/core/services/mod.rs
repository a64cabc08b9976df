pub mod check_service;
pub mod history_service;
pub mod net_worth_service;

pub use check_service::CheckService;
pub use history_service::{HistoryService, SnapshotSummary};
pub use net_worth_service::NetWorthService;
