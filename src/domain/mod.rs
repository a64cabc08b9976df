pub mod account;
pub mod common;
pub mod net_worth;
pub mod settings;
pub mod snapshot;

pub use account::{Account, AccountSubtype, AccountType};
pub use common::{Displayable, Identifiable, NamedEntity};
pub use net_worth::{AccountWithBalance, NetWorthBreakdown};
pub use settings::{CurrencySettings, Settings};
pub use snapshot::{latest_snapshot, Balance, Snapshot};
