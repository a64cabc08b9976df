use serde::{Deserialize, Serialize};

/// Reporting currency used for every amount in the data set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CurrencySettings {
    pub code: String,
    pub symbol: String,
    pub locale: String,
}

impl Default for CurrencySettings {
    fn default() -> Self {
        Self {
            code: "USD".into(),
            symbol: "$".into(),
            locale: "en-US".into(),
        }
    }
}

/// Singleton settings record loaded next to the accounts and snapshots.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    pub currency: CurrencySettings,
}
