#![allow(dead_code)]

use assert_cmd::Command;
use assert_fs::{prelude::*, TempDir};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{json, Value};

pub static ACCOUNTS: Lazy<Value> = Lazy::new(|| {
    json!([
        {"id": "chk", "name": "Checking", "type": "cash", "subtype": "checking", "institution": "First National"},
        {"id": "sav", "name": "savings pot", "type": "cash", "subtype": "savings", "institution": "Ally"},
        {"id": "wal", "name": "Wallet", "type": "cash", "subtype": "cash_on_hand"},
        {"id": "brk", "name": "Brokerage", "type": "asset", "subtype": "investment", "institution": "Vanguard"},
        {"id": "car", "name": "Car", "type": "asset", "subtype": "vehicle"},
        {"id": "visa", "name": "Visa", "type": "debt", "subtype": "credit_card", "institution": "Chase"},
        {"id": "loan", "name": "Student Loan", "type": "debt", "subtype": "student_loan"}
    ])
});

pub static SNAPSHOTS: Lazy<Value> = Lazy::new(|| {
    json!([
        {"id": "dec", "date": "2024-12-31", "balances": [
            {"accountId": "chk", "amount": 900.0},
            {"accountId": "visa", "amount": 100.0}
        ]},
        {"id": "jan", "date": "2025-01-15", "balances": [
            {"accountId": "chk", "amount": 1500.0},
            {"accountId": "sav", "amount": 4000.0},
            {"accountId": "wal", "amount": 60.25},
            {"accountId": "brk", "amount": 12000.0},
            {"accountId": "car", "amount": 8000.0},
            {"accountId": "visa", "amount": 750.5},
            {"accountId": "loan", "amount": 9000.0},
            {"accountId": "ghost", "amount": 999999.0}
        ]}
    ])
});

pub static SETTINGS: Lazy<Value> =
    Lazy::new(|| json!({"currency": {"code": "USD", "symbol": "$", "locale": "en-US"}}));

static AMOUNT_NOISE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9.\-]").unwrap());

/// Isolated CLI home with a data directory the tests populate.
pub struct CliHarness {
    home: TempDir,
}

impl CliHarness {
    pub fn empty() -> Self {
        Self {
            home: TempDir::new().expect("create temp home"),
        }
    }

    pub fn with_data(accounts: &Value, snapshots: &Value, settings: &Value) -> Self {
        let harness = Self::empty();
        harness.write_data("accounts.json", &accounts.to_string());
        harness.write_data("snapshots.json", &snapshots.to_string());
        harness.write_data("settings.json", &settings.to_string());
        harness
    }

    pub fn fixture() -> Self {
        Self::with_data(&ACCOUNTS, &SNAPSHOTS, &SETTINGS)
    }

    pub fn write_data(&self, file: &str, contents: &str) {
        self.home
            .child("data")
            .child(file)
            .write_str(contents)
            .expect("write data file");
    }

    pub fn home(&self) -> &std::path::Path {
        self.home.path()
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("networth_cli").expect("binary exists");
        cmd.env("NETWORTH_HOME", self.home.path())
            .env_remove("NETWORTH_DATA_DIR")
            .env_remove("NETWORTH_CLI_SCRIPT")
            .env("NO_COLOR", "1")
            .env("RUST_LOG", "warn");
        cmd
    }

    /// Runs `script` through stdin in script mode and returns stdout.
    pub fn run_script(&self, script: &str) -> String {
        let output = self
            .command()
            .env("NETWORTH_CLI_SCRIPT", "1")
            .write_stdin(script.to_string())
            .output()
            .expect("run script");
        assert!(
            output.status.success(),
            "script failed: {}\nstdout:\n{}\nstderr:\n{}",
            output.status,
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    /// Every stdout line that holds a JSON document, parsed.
    pub fn json_lines(&self, script: &str) -> Vec<Value> {
        self.run_script(script)
            .lines()
            .filter(|line| line.starts_with('{'))
            .map(|line| serde_json::from_str(line).expect("valid json line"))
            .collect()
    }
}

/// Numeric value of a rendered currency cell such as `-$1,234.50`.
pub fn parse_amount(text: &str) -> f64 {
    AMOUNT_NOISE
        .replace_all(text, "")
        .parse()
        .unwrap_or_else(|_| panic!("not an amount: {text}"))
}

pub fn table<'a>(view: &'a Value, id: &str) -> &'a Value {
    view["tables"]
        .as_array()
        .expect("tables array")
        .iter()
        .find(|table| table["id"] == id)
        .unwrap_or_else(|| panic!("missing table {id}"))
}

pub fn cells(table: &Value, cell: &str) -> Vec<String> {
    table["rows"]
        .as_array()
        .expect("rows array")
        .iter()
        .map(|row| row[cell].as_str().expect("cell text").to_string())
        .collect()
}
