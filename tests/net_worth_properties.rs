use networth_core::core::services::NetWorthService;
use networth_core::dashboard::{sort_accounts, SortDirection, SortKey, SortState};
use networth_core::domain::{
    Account, AccountSubtype, AccountType, AccountWithBalance, Balance, Snapshot,
};

fn accounts() -> Vec<Account> {
    vec![
        Account::new("chk", "Checking", AccountType::Cash, AccountSubtype::Checking),
        Account::new("sav", "Savings", AccountType::Cash, AccountSubtype::Savings),
        Account::new("brk", "Brokerage", AccountType::Asset, AccountSubtype::Investment),
        Account::new("car", "Car", AccountType::Asset, AccountSubtype::Vehicle),
        Account::new("visa", "Visa", AccountType::Debt, AccountSubtype::CreditCard),
        Account::new("loan", "Mortgage", AccountType::Debt, AccountSubtype::Mortgage),
    ]
}

fn snapshot(balances: &[(&str, f64)]) -> Snapshot {
    Snapshot::new(
        "s",
        "2025-01-15",
        balances
            .iter()
            .map(|(id, amount)| Balance::new(*id, *amount))
            .collect(),
    )
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn total_is_cash_plus_assets_minus_debts() {
    let cases: [&[(&str, f64)]; 4] = [
        &[],
        &[("chk", 1000.0), ("visa", 400.0)],
        &[("sav", 12.5), ("brk", 30000.0), ("loan", 250000.0)],
        &[("chk", -50.0), ("car", 0.0), ("visa", 0.01)],
    ];
    for balances in cases {
        let breakdown = NetWorthService::calculate(&snapshot(balances), &accounts());
        assert!(approx(
            breakdown.total,
            breakdown.cash + breakdown.assets - breakdown.debts
        ));
    }
}

#[test]
fn unknown_accounts_do_not_change_the_result() {
    let known = snapshot(&[("chk", 1000.0), ("brk", 500.0), ("visa", 400.0)]);
    let noisy = snapshot(&[
        ("chk", 1000.0),
        ("ghost", 123456.0),
        ("brk", 500.0),
        ("visa", 400.0),
        ("", 1.0),
    ]);
    assert_eq!(
        NetWorthService::calculate(&known, &accounts()),
        NetWorthService::calculate(&noisy, &accounts())
    );
    assert_eq!(
        NetWorthService::accounts_with_balances(&known, &accounts()),
        NetWorthService::accounts_with_balances(&noisy, &accounts())
    );
}

#[test]
fn rows_agree_with_category_totals() {
    let snap = snapshot(&[
        ("chk", 1500.0),
        ("sav", 4000.0),
        ("chk", 250.0),
        ("car", 8000.0),
        ("loan", 9000.0),
    ]);
    let breakdown = NetWorthService::calculate(&snap, &accounts());
    let rows = NetWorthService::accounts_with_balances(&snap, &accounts());

    for kind in AccountType::ALL {
        let sum: f64 = NetWorthService::accounts_in_category(&rows, kind)
            .iter()
            .map(|row| row.balance)
            .sum();
        assert!(approx(sum, breakdown.category_total(kind)), "{kind}");
    }
    assert_eq!(rows.len(), 4);
}

#[test]
fn accounts_without_balances_are_omitted() {
    let snap = snapshot(&[("visa", 10.0)]);
    let rows = NetWorthService::accounts_with_balances(&snap, &accounts());
    let ids: Vec<&str> = rows.iter().map(|row| row.account.id.as_str()).collect();
    assert_eq!(ids, vec!["visa"]);
    assert!(NetWorthService::accounts_in_category(&rows, AccountType::Cash).is_empty());
}

#[test]
fn sorting_is_stable_for_equal_keys() {
    let mut rows: Vec<AccountWithBalance> = accounts()
        .into_iter()
        .map(|account| AccountWithBalance::new(account, 100.0))
        .collect();
    let source_order: Vec<String> = rows.iter().map(|row| row.account.id.clone()).collect();

    sort_accounts(&mut rows, SortState::default());
    let desc: Vec<String> = rows.iter().map(|row| row.account.id.clone()).collect();
    assert_eq!(desc, source_order);

    sort_accounts(&mut rows, SortState::new(SortKey::Balance, SortDirection::Asc));
    let asc: Vec<String> = rows.iter().map(|row| row.account.id.clone()).collect();
    assert_eq!(asc, source_order);
}

#[test]
fn header_clicks_follow_column_rules() {
    let mut state = SortState::default();
    state.on_header(SortKey::Name);
    assert_eq!(state, SortState::new(SortKey::Name, SortDirection::Asc));
    state.on_header(SortKey::Name);
    assert_eq!(state.direction, SortDirection::Desc);
    state.on_header(SortKey::Percent);
    assert_eq!(state, SortState::new(SortKey::Percent, SortDirection::Desc));
    state.on_header(SortKey::Subtype);
    assert_eq!(state.direction, SortDirection::Asc);
}
