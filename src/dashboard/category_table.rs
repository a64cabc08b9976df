use std::{cmp::Ordering, fmt};

use serde::Serialize;

use crate::{
    currency::{compare_locale, format_currency, format_percent},
    domain::{AccountType, AccountWithBalance, CurrencySettings, NamedEntity},
};

/// Column a category table can be ordered by.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Name,
    Subtype,
    Institution,
    Balance,
    Percent,
}

impl SortKey {
    /// Columns in display order.
    pub const ALL: [SortKey; 5] = [
        SortKey::Name,
        SortKey::Subtype,
        SortKey::Institution,
        SortKey::Balance,
        SortKey::Percent,
    ];

    pub fn code(self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Subtype => "subtype",
            SortKey::Institution => "institution",
            SortKey::Balance => "balance",
            SortKey::Percent => "percent",
        }
    }

    /// Column header label.
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Name => "Name",
            SortKey::Subtype => "Subtype",
            SortKey::Institution => "Institution",
            SortKey::Balance => "Balance",
            SortKey::Percent => "% of Category",
        }
    }

    /// Accepts the column code or its header label, case-insensitively.
    pub fn parse(input: &str) -> Option<Self> {
        let needle = input.trim().to_lowercase();
        if matches!(needle.as_str(), "%" | "pct") {
            return Some(SortKey::Percent);
        }
        SortKey::ALL
            .into_iter()
            .find(|key| key.code() == needle || key.label().to_lowercase() == needle)
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, SortKey::Balance | SortKey::Percent)
    }

    /// Direction applied when the column becomes active.
    pub fn initial_direction(self) -> SortDirection {
        if self.is_numeric() {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// Active column and direction of one category table.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct SortState {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            key: SortKey::Balance,
            direction: SortDirection::Desc,
        }
    }
}

impl SortState {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Applies a header click: the active column flips, any other column
    /// becomes active with its initial direction.
    pub fn on_header(&mut self, key: SortKey) {
        if self.key == key {
            self.direction = self.direction.flipped();
        } else {
            self.key = key;
            self.direction = key.initial_direction();
        }
    }

    pub fn clicked(mut self, key: SortKey) -> Self {
        self.on_header(key);
        self
    }
}

fn compare_by(key: SortKey, a: &AccountWithBalance, b: &AccountWithBalance) -> Ordering {
    match key {
        SortKey::Name => compare_locale(a.name(), b.name()),
        SortKey::Institution => compare_locale(
            a.account.institution_or_empty(),
            b.account.institution_or_empty(),
        ),
        SortKey::Subtype => compare_locale(a.account.subtype.label(), b.account.subtype.label()),
        SortKey::Balance | SortKey::Percent => a
            .balance
            .partial_cmp(&b.balance)
            .unwrap_or(Ordering::Equal),
    }
}

/// Stable sort of `rows` by `state`; descending order negates the comparator.
pub fn sort_accounts(rows: &mut [AccountWithBalance], state: SortState) {
    rows.sort_by(|a, b| {
        let ordering = compare_by(state.key, a, b);
        match state.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

/// Stable identifier of the table for a category.
pub fn table_id(kind: AccountType) -> &'static str {
    match kind {
        AccountType::Cash => "category-table-cash",
        AccountType::Asset => "category-table-asset",
        AccountType::Debt => "category-table-debt",
    }
}

/// Section title of the table for a category.
pub fn table_title(kind: AccountType) -> &'static str {
    match kind {
        AccountType::Cash => "Cash",
        AccountType::Asset => "Assets",
        AccountType::Debt => "Debts",
    }
}

/// Actionable column header; `sorted` is set on the active column only.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ColumnHeader {
    pub key: SortKey,
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sorted: Option<SortDirection>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryRow {
    pub id: String,
    #[serde(rename = "name-cell")]
    pub name: String,
    pub subtype: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
    pub balance: f64,
    #[serde(rename = "balance-cell")]
    pub balance_text: String,
    pub percent: String,
}

/// One rendered category table.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryTable {
    pub id: &'static str,
    pub category: AccountType,
    pub title: &'static str,
    pub total: f64,
    pub total_text: String,
    pub sort: SortState,
    pub columns: Vec<ColumnHeader>,
    pub rows: Vec<CategoryRow>,
}

impl CategoryTable {
    /// Builds the table from the accounts of one category.
    ///
    /// Pure in its inputs: every call sorts a fresh copy and regenerates the
    /// whole row sequence.
    pub fn build(
        kind: AccountType,
        accounts: &[AccountWithBalance],
        total: f64,
        sort: SortState,
        currency: &CurrencySettings,
    ) -> Self {
        let mut ordered = accounts.to_vec();
        sort_accounts(&mut ordered, sort);

        let columns = SortKey::ALL
            .into_iter()
            .map(|key| ColumnHeader {
                key,
                label: key.label(),
                sorted: (key == sort.key).then_some(sort.direction),
            })
            .collect();

        let rows = ordered
            .into_iter()
            .map(|row| CategoryRow {
                subtype: row.account.subtype.label(),
                balance_text: format_currency(row.balance, currency),
                percent: format_percent(row.balance, total),
                balance: row.balance,
                id: row.account.id,
                name: row.account.name,
                institution: row.account.institution,
            })
            .collect();

        Self {
            id: table_id(kind),
            category: kind,
            title: table_title(kind),
            total,
            total_text: format_currency(total, currency),
            sort,
            columns,
            rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Category title followed by its total.
    pub fn heading(&self) -> String {
        format!("{} {}", self.title, self.total_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Account, AccountSubtype};

    fn row(id: &str, name: &str, subtype: AccountSubtype, balance: f64) -> AccountWithBalance {
        AccountWithBalance::new(
            Account::new(id, name, AccountType::Cash, subtype),
            balance,
        )
    }

    fn sample() -> Vec<AccountWithBalance> {
        vec![
            row("a1", "savings", AccountSubtype::Savings, 500.0),
            row("a2", "Checking", AccountSubtype::Checking, 1500.0),
            row("a3", "Wallet", AccountSubtype::CashOnHand, 20.0),
        ]
    }

    fn names(rows: &[AccountWithBalance]) -> Vec<&str> {
        rows.iter().map(|row| row.account.name.as_str()).collect()
    }

    #[test]
    fn default_state_is_balance_descending() {
        let state = SortState::default();
        assert_eq!(state.key, SortKey::Balance);
        assert_eq!(state.direction, SortDirection::Desc);
    }

    #[test]
    fn header_click_transitions() {
        let mut state = SortState::default();
        state.on_header(SortKey::Balance);
        assert_eq!(state, SortState::new(SortKey::Balance, SortDirection::Asc));

        state.on_header(SortKey::Name);
        assert_eq!(state, SortState::new(SortKey::Name, SortDirection::Asc));
        state.on_header(SortKey::Name);
        assert_eq!(state, SortState::new(SortKey::Name, SortDirection::Desc));

        state.on_header(SortKey::Percent);
        assert_eq!(state, SortState::new(SortKey::Percent, SortDirection::Desc));
        state.on_header(SortKey::Institution);
        assert_eq!(
            state,
            SortState::new(SortKey::Institution, SortDirection::Asc)
        );
    }

    #[test]
    fn sorts_by_balance_and_name() {
        let mut rows = sample();
        sort_accounts(&mut rows, SortState::default());
        assert_eq!(names(&rows), vec!["Checking", "savings", "Wallet"]);

        sort_accounts(&mut rows, SortState::new(SortKey::Name, SortDirection::Asc));
        assert_eq!(names(&rows), vec!["Checking", "savings", "Wallet"]);

        sort_accounts(&mut rows, SortState::new(SortKey::Name, SortDirection::Desc));
        assert_eq!(names(&rows), vec!["Wallet", "savings", "Checking"]);
    }

    #[test]
    fn subtype_sorts_by_label() {
        let mut rows = vec![
            row("s", "Rainy day", AccountSubtype::Savings, 1.0),
            row("d", "CD", AccountSubtype::Deposit, 2.0),
            row("c", "Joint", AccountSubtype::Checking, 3.0),
            row("w", "Wallet", AccountSubtype::CashOnHand, 4.0),
        ];
        sort_accounts(
            &mut rows,
            SortState::new(SortKey::Subtype, SortDirection::Asc),
        );
        assert_eq!(names(&rows), vec!["Wallet", "Joint", "CD", "Rainy day"]);

        let savings = row("s", "x", AccountSubtype::Savings, 0.0);
        let deposit = row("d", "x", AccountSubtype::Deposit, 0.0);
        assert_eq!(
            compare_by(SortKey::Subtype, &deposit, &savings),
            Ordering::Less
        );
    }

    #[test]
    fn missing_institution_sorts_first_ascending() {
        let mut rows = vec![
            AccountWithBalance::new(
                Account::new("b", "Broker", AccountType::Asset, AccountSubtype::Investment)
                    .with_institution("Vanguard"),
                10.0,
            ),
            AccountWithBalance::new(
                Account::new("h", "House", AccountType::Asset, AccountSubtype::Property),
                20.0,
            ),
        ];
        sort_accounts(
            &mut rows,
            SortState::new(SortKey::Institution, SortDirection::Asc),
        );
        assert_eq!(names(&rows), vec!["House", "Broker"]);
    }

    #[test]
    fn equal_keys_keep_source_order() {
        let mut rows = vec![
            row("x", "First", AccountSubtype::Checking, 100.0),
            row("y", "Second", AccountSubtype::Checking, 100.0),
            row("z", "Third", AccountSubtype::Checking, 100.0),
        ];
        sort_accounts(&mut rows, SortState::default());
        assert_eq!(names(&rows), vec!["First", "Second", "Third"]);
    }

    #[test]
    fn parses_codes_and_labels() {
        assert_eq!(SortKey::parse("Name"), Some(SortKey::Name));
        assert_eq!(SortKey::parse("% of category"), Some(SortKey::Percent));
        assert_eq!(SortKey::parse("%"), Some(SortKey::Percent));
        assert_eq!(SortKey::parse("bank"), None);
    }

    #[test]
    fn build_marks_active_column_and_formats_cells() {
        let table = CategoryTable::build(
            AccountType::Cash,
            &sample(),
            2020.0,
            SortState::default(),
            &CurrencySettings::default(),
        );
        assert_eq!(table.id, "category-table-cash");
        assert_eq!(table.heading(), "Cash $2,020.00");
        let active: Vec<_> = table
            .columns
            .iter()
            .filter(|column| column.sorted.is_some())
            .collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].key, SortKey::Balance);
        assert_eq!(table.rows[0].balance_text, "$1,500.00");
        assert_eq!(table.rows[0].percent, "74.3%");
    }

    #[test]
    fn zero_total_renders_zero_percent() {
        let table = CategoryTable::build(
            AccountType::Cash,
            &sample(),
            0.0,
            SortState::default(),
            &CurrencySettings::default(),
        );
        assert!(table.rows.iter().all(|row| row.percent == "0.0%"));
    }
}
