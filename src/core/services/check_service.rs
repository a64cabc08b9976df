use std::collections::HashSet;

use crate::domain::{Account, AccountType, Displayable, Identifiable, Snapshot};

/// Detects dangling references and other anomalies in the loaded data.
///
/// None of these conditions stop the dashboard from rendering.
pub struct CheckService;

impl CheckService {
    pub fn warnings(accounts: &[Account], snapshots: &[Snapshot]) -> Vec<String> {
        let mut warnings = Vec::new();

        for id in duplicate_ids(accounts) {
            warnings.push(format!("duplicate account id `{}`", id));
        }
        for id in duplicate_ids(snapshots) {
            warnings.push(format!("duplicate snapshot id `{}`", id));
        }

        for account in accounts {
            let natural = account.subtype.natural_type();
            if natural != account.kind {
                warnings.push(format!(
                    "account `{}` [{}] is a {} account with a {} subtype",
                    account.id,
                    account.display_label(),
                    account.kind,
                    natural,
                ));
            }
        }

        let kinds = |id: &str| {
            accounts
                .iter()
                .find(|account| account.id == id)
                .map(|account| account.kind)
        };

        for snapshot in snapshots {
            if snapshot.parsed_date().is_none() {
                warnings.push(format!(
                    "snapshot `{}` has non-ISO date `{}`",
                    snapshot.id, snapshot.date
                ));
            }
            for balance in &snapshot.balances {
                match kinds(&balance.account_id) {
                    None => warnings.push(format!(
                        "snapshot `{}` references unknown account `{}`",
                        snapshot.id, balance.account_id
                    )),
                    Some(AccountType::Debt) if balance.amount < 0.0 => warnings.push(format!(
                        "snapshot `{}` stores negative debt {} for `{}`; debts are subtracted as positive magnitudes",
                        snapshot.id, balance.amount, balance.account_id
                    )),
                    Some(_) => {}
                }
            }
        }

        for warning in &warnings {
            tracing::warn!("{warning}");
        }
        warnings
    }
}

fn duplicate_ids<T: Identifiable>(items: &[T]) -> Vec<&str> {
    let mut seen = HashSet::new();
    items
        .iter()
        .map(Identifiable::id)
        .filter(|id| !seen.insert(*id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AccountSubtype, Balance};

    #[test]
    fn clean_data_has_no_warnings() {
        let accounts = vec![Account::new(
            "a1",
            "Checking",
            AccountType::Cash,
            AccountSubtype::Checking,
        )];
        let snapshots = vec![Snapshot::new(
            "s1",
            "2025-01-31",
            vec![Balance::new("a1", 10.0)],
        )];
        assert!(CheckService::warnings(&accounts, &snapshots).is_empty());
    }

    #[test]
    fn reports_each_anomaly() {
        let accounts = vec![
            Account::new("a1", "Checking", AccountType::Cash, AccountSubtype::Checking),
            Account::new("a1", "Copy", AccountType::Cash, AccountSubtype::Savings),
            Account::new("a2", "Card", AccountType::Asset, AccountSubtype::CreditCard),
            Account::new("a3", "Loan", AccountType::Debt, AccountSubtype::AutoLoan),
        ];
        let snapshots = vec![Snapshot::new(
            "s1",
            "31/01/2025",
            vec![Balance::new("ghost", 1.0), Balance::new("a3", -50.0)],
        )];
        let warnings = CheckService::warnings(&accounts, &snapshots);
        assert_eq!(warnings.len(), 5, "{warnings:#?}");
        assert!(warnings.iter().any(|w| w.contains("duplicate account id `a1`")));
        assert!(warnings.iter().any(|w| w.contains("Credit Card")));
        assert!(warnings.iter().any(|w| w.contains("non-ISO date")));
        assert!(warnings.iter().any(|w| w.contains("unknown account `ghost`")));
        assert!(warnings.iter().any(|w| w.contains("negative debt")));
    }

    #[test]
    fn duplicate_snapshot_ids_are_reported_once_per_repeat() {
        let snapshots = vec![
            Snapshot::new("s1", "2025-01-31", Vec::new()),
            Snapshot::new("s1", "2025-02-28", Vec::new()),
            Snapshot::new("s2", "2025-03-31", Vec::new()),
        ];
        let warnings = CheckService::warnings(&[], &snapshots);
        assert_eq!(warnings, vec!["duplicate snapshot id `s1`"]);
    }
}
