use serde::Serialize;

use crate::{
    currency::{format_currency, format_long_date},
    domain::{AccountType, NetWorthBreakdown, Settings, Snapshot},
};

pub const CARD_ID: &str = "net-worth-card";
pub const CARD_TITLE: &str = "Net Worth";

/// Sub-element of the summary card holding one category total.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryTotal {
    pub id: &'static str,
    pub category: AccountType,
    pub label: &'static str,
    pub amount: f64,
    pub text: String,
}

/// Summary card shown above the category tables.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NetWorthCard {
    pub id: &'static str,
    pub title: &'static str,
    pub snapshot_id: String,
    pub date: String,
    pub as_of: String,
    pub total: f64,
    pub total_text: String,
    pub categories: Vec<CategoryTotal>,
}

fn category_id(kind: AccountType) -> &'static str {
    match kind {
        AccountType::Cash => "category-cash",
        AccountType::Asset => "category-assets",
        AccountType::Debt => "category-debts",
    }
}

impl NetWorthCard {
    pub fn build(snapshot: &Snapshot, breakdown: &NetWorthBreakdown, settings: &Settings) -> Self {
        let currency = &settings.currency;
        // A malformed date still renders; `check` reports it.
        let long_date = format_long_date(&snapshot.date, &currency.locale).unwrap_or_else(|err| {
            tracing::warn!(snapshot = %snapshot.id, error = %err, "rendering raw snapshot date");
            snapshot.date.clone()
        });

        let categories = AccountType::ALL
            .into_iter()
            .map(|kind| {
                let amount = breakdown.category_total(kind);
                CategoryTotal {
                    id: category_id(kind),
                    category: kind,
                    label: super::category_table::table_title(kind),
                    amount,
                    text: format_currency(amount, currency),
                }
            })
            .collect();

        Self {
            id: CARD_ID,
            title: CARD_TITLE,
            snapshot_id: snapshot.id.clone(),
            date: snapshot.date.clone(),
            as_of: format!("As of {}", long_date),
            total: breakdown.total,
            total_text: format_currency(breakdown.total, currency),
            categories,
        }
    }

    pub fn category(&self, kind: AccountType) -> Option<&CategoryTotal> {
        self.categories.iter().find(|total| total.category == kind)
    }
}
