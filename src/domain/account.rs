use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::common::*;

/// Represents a financial account as described by the static data source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AccountType,
    pub subtype: AccountSubtype,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
}

impl Account {
    /// Creates an account without an institution.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: AccountType,
        subtype: AccountSubtype,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            subtype,
            institution: None,
        }
    }

    /// Attaches the institution holding the account.
    pub fn with_institution(mut self, institution: impl Into<String>) -> Self {
        self.institution = Some(institution.into());
        self
    }

    /// Institution name, with a missing institution treated as empty.
    pub fn institution_or_empty(&self) -> &str {
        self.institution.as_deref().unwrap_or("")
    }
}

impl Identifiable for Account {
    fn id(&self) -> &str {
        &self.id
    }
}

impl NamedEntity for Account {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for Account {
    fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.subtype.label())
    }
}

/// Top-level classification of an account.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Cash,
    Asset,
    Debt,
}

impl AccountType {
    pub const ALL: [AccountType; 3] = [AccountType::Cash, AccountType::Asset, AccountType::Debt];

    /// Raw code as stored in the data files.
    pub fn code(self) -> &'static str {
        match self {
            AccountType::Cash => "cash",
            AccountType::Asset => "asset",
            AccountType::Debt => "debt",
        }
    }

    /// Accepts both the singular code and the plural label used on the summary card.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "cash" => Some(AccountType::Cash),
            "asset" | "assets" => Some(AccountType::Asset),
            "debt" | "debts" => Some(AccountType::Debt),
            _ => None,
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Finer-grained classification within a category.
///
/// The subtype is not cross-validated against [`AccountType`]; the data check
/// reports mismatches using [`AccountSubtype::natural_type`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AccountSubtype {
    Checking,
    Savings,
    Deposit,
    CashOnHand,
    Investment,
    Retirement,
    Property,
    Vehicle,
    Crypto,
    CreditCard,
    Mortgage,
    StudentLoan,
    AutoLoan,
    PersonalLoan,
}

impl AccountSubtype {
    pub fn label(self) -> &'static str {
        match self {
            AccountSubtype::Checking => "Checking",
            AccountSubtype::Savings => "Savings",
            AccountSubtype::Deposit => "Deposit",
            AccountSubtype::CashOnHand => "Cash on Hand",
            AccountSubtype::Investment => "Investment",
            AccountSubtype::Retirement => "Retirement",
            AccountSubtype::Property => "Property",
            AccountSubtype::Vehicle => "Vehicle",
            AccountSubtype::Crypto => "Crypto",
            AccountSubtype::CreditCard => "Credit Card",
            AccountSubtype::Mortgage => "Mortgage",
            AccountSubtype::StudentLoan => "Student Loan",
            AccountSubtype::AutoLoan => "Auto Loan",
            AccountSubtype::PersonalLoan => "Personal Loan",
        }
    }

    /// The category this subtype normally belongs to.
    pub fn natural_type(self) -> AccountType {
        match self {
            AccountSubtype::Checking
            | AccountSubtype::Savings
            | AccountSubtype::Deposit
            | AccountSubtype::CashOnHand => AccountType::Cash,
            AccountSubtype::Investment
            | AccountSubtype::Retirement
            | AccountSubtype::Property
            | AccountSubtype::Vehicle
            | AccountSubtype::Crypto => AccountType::Asset,
            AccountSubtype::CreditCard
            | AccountSubtype::Mortgage
            | AccountSubtype::StudentLoan
            | AccountSubtype::AutoLoan
            | AccountSubtype::PersonalLoan => AccountType::Debt,
        }
    }
}

impl fmt::Display for AccountSubtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_source_shape() {
        let raw = r#"{"id":"a1","name":"Everyday","type":"cash","subtype":"cash_on_hand"}"#;
        let account: Account = serde_json::from_str(raw).unwrap();
        assert_eq!(account.kind, AccountType::Cash);
        assert_eq!(account.subtype, AccountSubtype::CashOnHand);
        assert!(account.institution.is_none());
        assert_eq!(account.institution_or_empty(), "");
    }

    #[test]
    fn parse_accepts_plural_labels() {
        assert_eq!(AccountType::parse("Assets"), Some(AccountType::Asset));
        assert_eq!(AccountType::parse("debts"), Some(AccountType::Debt));
        assert_eq!(AccountType::parse("loans"), None);
    }
}
