use std::collections::HashMap;

use crate::domain::{Account, AccountType, AccountWithBalance, NetWorthBreakdown, Snapshot};

/// Pure derivations from one snapshot and the account collection.
pub struct NetWorthService;

impl NetWorthService {
    /// Buckets every balance by the type of the account it references.
    ///
    /// Balances whose account id is unknown are skipped. Debts are subtracted
    /// from the total as stored, so producers must record them as positive
    /// magnitudes.
    pub fn calculate(snapshot: &Snapshot, accounts: &[Account]) -> NetWorthBreakdown {
        let by_id = index_by_id(accounts);

        let mut cash = 0.0;
        let mut assets = 0.0;
        let mut debts = 0.0;
        let mut skipped = 0usize;

        for balance in &snapshot.balances {
            let Some(&slot) = by_id.get(balance.account_id.as_str()) else {
                skipped += 1;
                continue;
            };
            match accounts[slot].kind {
                AccountType::Cash => cash += balance.amount,
                AccountType::Asset => assets += balance.amount,
                AccountType::Debt => debts += balance.amount,
            }
        }

        if skipped > 0 {
            tracing::debug!(
                snapshot = %snapshot.id,
                skipped,
                "ignored balances referencing unknown accounts"
            );
        }

        NetWorthBreakdown::new(cash, assets, debts)
    }

    /// Joins each account with its balance in `snapshot`.
    ///
    /// Accounts without a balance entry are dropped. Repeated entries for the
    /// same account are summed, and when several accounts share an id only
    /// the last one gets a row, so the rows agree with [`Self::calculate`].
    /// Output follows the account collection order.
    pub fn accounts_with_balances(
        snapshot: &Snapshot,
        accounts: &[Account],
    ) -> Vec<AccountWithBalance> {
        let by_id = index_by_id(accounts);
        let mut amounts: HashMap<&str, f64> = HashMap::new();
        for balance in &snapshot.balances {
            *amounts.entry(balance.account_id.as_str()).or_insert(0.0) += balance.amount;
        }

        accounts
            .iter()
            .enumerate()
            .filter(|(slot, account)| by_id.get(account.id.as_str()) == Some(slot))
            .filter_map(|(_, account)| {
                amounts
                    .get(account.id.as_str())
                    .map(|amount| AccountWithBalance::new(account.clone(), *amount))
            })
            .collect()
    }

    pub fn accounts_in_category(
        rows: &[AccountWithBalance],
        kind: AccountType,
    ) -> Vec<AccountWithBalance> {
        rows.iter()
            .filter(|row| row.kind() == kind)
            .cloned()
            .collect()
    }
}

/// Position of the account each id resolves to; the last duplicate wins.
fn index_by_id(accounts: &[Account]) -> HashMap<&str, usize> {
    accounts
        .iter()
        .enumerate()
        .map(|(slot, account)| (account.id.as_str(), slot))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AccountSubtype, Balance};

    fn accounts() -> Vec<Account> {
        vec![
            Account::new("a1", "Checking", AccountType::Cash, AccountSubtype::Checking),
            Account::new("a2", "Visa", AccountType::Debt, AccountSubtype::CreditCard),
            Account::new("a3", "Brokerage", AccountType::Asset, AccountSubtype::Investment),
        ]
    }

    #[test]
    fn worked_example_matches_breakdown() {
        let accounts = &accounts()[..2];
        let snapshot = Snapshot::new(
            "s1",
            "2025-01-31",
            vec![Balance::new("a1", 1000.0), Balance::new("a2", 400.0)],
        );
        let breakdown = NetWorthService::calculate(&snapshot, accounts);
        assert_eq!(breakdown, NetWorthBreakdown::new(1000.0, 0.0, 400.0));
        assert_eq!(breakdown.total, 600.0);
    }

    #[test]
    fn unknown_accounts_do_not_change_totals() {
        let accounts = accounts();
        let mut snapshot = Snapshot::new(
            "s1",
            "2025-01-31",
            vec![
                Balance::new("a1", 10.0),
                Balance::new("a2", 4.0),
                Balance::new("a3", 7.5),
            ],
        );
        let before = NetWorthService::calculate(&snapshot, &accounts);
        snapshot.balances.push(Balance::new("ghost", 999.0));
        let after = NetWorthService::calculate(&snapshot, &accounts);
        assert_eq!(before, after);
    }

    #[test]
    fn total_is_definitional() {
        let accounts = accounts();
        let snapshot = Snapshot::new(
            "s1",
            "2025-01-31",
            vec![
                Balance::new("a1", -25.0),
                Balance::new("a2", -80.0),
                Balance::new("a3", 12.25),
            ],
        );
        let b = NetWorthService::calculate(&snapshot, &accounts);
        assert_eq!(b.total, b.cash + b.assets - b.debts);
    }

    #[test]
    fn no_amount_is_lost_when_all_balances_resolve() {
        let accounts = accounts();
        let snapshot = Snapshot::new(
            "s1",
            "2025-01-31",
            vec![
                Balance::new("a1", 100.0),
                Balance::new("a3", 50.0),
                Balance::new("a1", 25.0),
                Balance::new("a2", 60.0),
            ],
        );
        let b = NetWorthService::calculate(&snapshot, &accounts);
        let sum: f64 = snapshot.balances.iter().map(|bal| bal.amount).sum();
        assert_eq!(b.cash + b.assets + b.debts, sum);
        assert_eq!(b.cash, 125.0);
    }

    #[test]
    fn join_drops_accounts_missing_from_snapshot() {
        let accounts = accounts();
        let snapshot = Snapshot::new(
            "s1",
            "2025-01-31",
            vec![Balance::new("a3", 7.0), Balance::new("ghost", 1.0)],
        );
        let rows = NetWorthService::accounts_with_balances(&snapshot, &accounts);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].account.id, "a3");
        assert_eq!(rows[0].balance, 7.0);
    }

    #[test]
    fn shared_account_id_resolves_like_the_breakdown() {
        let accounts = vec![
            Account::new("a1", "Old checking", AccountType::Cash, AccountSubtype::Checking),
            Account::new("a2", "Visa", AccountType::Debt, AccountSubtype::CreditCard),
            Account::new("a1", "Brokerage", AccountType::Asset, AccountSubtype::Investment),
        ];
        let snapshot = Snapshot::new("s1", "2025-01-31", vec![Balance::new("a1", 100.0)]);

        let breakdown = NetWorthService::calculate(&snapshot, &accounts);
        assert_eq!(breakdown, NetWorthBreakdown::new(0.0, 100.0, 0.0));

        let rows = NetWorthService::accounts_with_balances(&snapshot, &accounts);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].account.name, "Brokerage");
        assert!(NetWorthService::accounts_in_category(&rows, AccountType::Cash).is_empty());
        for kind in AccountType::ALL {
            let sum: f64 = NetWorthService::accounts_in_category(&rows, kind)
                .iter()
                .map(|row| row.balance)
                .sum();
            assert_eq!(sum, breakdown.category_total(kind));
        }
    }

    #[test]
    fn category_filter_keeps_matching_rows() {
        let accounts = accounts();
        let snapshot = Snapshot::new(
            "s1",
            "2025-01-31",
            vec![
                Balance::new("a1", 1.0),
                Balance::new("a2", 2.0),
                Balance::new("a3", 3.0),
            ],
        );
        let rows = NetWorthService::accounts_with_balances(&snapshot, &accounts);
        let debts = NetWorthService::accounts_in_category(&rows, AccountType::Debt);
        assert_eq!(debts.len(), 1);
        assert_eq!(debts[0].account.name, "Visa");
    }
}
