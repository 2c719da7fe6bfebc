//! End-to-end tests for the `parity` binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

const BOND: [&str; 6] = [
    "--coupon",
    "5.0",
    "--maturity",
    "2048-09-25",
    "--as-of",
    "2025-04-17",
];

fn parity() -> Command {
    let mut cmd = Command::cargo_bin("parity").unwrap();
    cmd.env_remove("PARITY_CONFIG").env_remove("RUST_LOG");
    cmd
}

fn minimal(args: &[&str]) -> f64 {
    let output = parity()
        .args(["--format", "minimal"])
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    String::from_utf8(output).unwrap().trim().parse().unwrap()
}

fn json(args: &[&str]) -> Value {
    let output = parity()
        .args(["--format", "json"])
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    serde_json::from_slice(&output).unwrap()
}

#[test]
fn test_help() {
    parity()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("curve-pv"));
}

#[test]
fn test_price_premium_bond() {
    let mut args = BOND.to_vec();
    args.extend(["--yield", "4.0"]);
    let pv = minimal(&[["price"].as_slice(), args.as_slice()].concat());
    assert!(pv > 100.0, "pv = {pv}");
}

#[test]
fn test_price_table() {
    parity()
        .arg("price")
        .args(BOND)
        .args(["--yield", "5.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Present Value"))
        .stdout(predicate::str::contains("Accrued Interest"));
}

#[test]
fn test_ytm_discount_bond() {
    let y = minimal(&[
        "ytm",
        "--coupon",
        "4.0",
        "--maturity",
        "2048-09-25",
        "--as-of",
        "2025-04-17",
        "--price",
        "89",
    ]);
    assert!((y - 4.8615).abs() < 1e-3, "ytm = {y}");
}

#[test]
fn test_accrued_json() {
    let report = json(&[["accrued"].as_slice(), BOND.as_slice()].concat());

    assert_eq!(report["previous_coupon"], "2025-03-25");
    assert_eq!(report["next_coupon"], "2025-09-25");
    let ai = report["accrued_interest"].as_f64().unwrap();
    assert!((ai - 5.0 * 23.0 / 365.0).abs() < 1e-9);
}

#[test]
fn test_schedule_json() {
    let report = json(&[
        "schedule",
        "--maturity",
        "2027-09-25",
        "--as-of",
        "2025-04-17",
        "--coupon",
        "5",
    ]);

    let flows = report["cashflows"].as_array().unwrap();
    assert_eq!(flows.len(), 5);
    assert_eq!(flows[4]["principal"].as_f64(), Some(100.0));
    assert_eq!(flows[0]["coupon"].as_f64(), Some(2.5));
}

#[test]
fn test_curve_pv_principal_flag() {
    let base = [
        "curve-pv",
        "--coupon",
        "4.5",
        "--maturity",
        "2035-09-25",
        "--as-of",
        "2025-04-17",
        "--curve",
        "0.5:4.1,2:4.4,5:4.6,10:4.9",
    ];

    let coupons = minimal(&base);
    let full = minimal(&[base.as_slice(), ["--include-principal"].as_slice()].concat());
    assert!(coupons > 0.0);
    assert!(full > coupons + 50.0);
}

#[test]
fn test_amortize() {
    let change = minimal(&[
        "amortize",
        "--book-price",
        "95",
        "--maturity",
        "2025-01-01",
        "--purchase",
        "2020-01-01",
        "--period-years",
        "1",
    ]);
    assert!((change - 1.0).abs() < 1e-9);
}

#[test]
fn test_maturity_before_as_of_fails() {
    parity()
        .args(["price", "--coupon", "5", "--maturity", "2020-01-01"])
        .args(["--as-of", "2025-04-17", "--yield", "4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid bond"));
}

#[test]
fn test_bad_date_fails() {
    parity()
        .args(["price", "--coupon", "5", "--maturity", "2048-02-30"])
        .args(["--as-of", "2025-04-17", "--yield", "4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn test_bad_curve_fails() {
    parity()
        .arg("curve-pv")
        .args(BOND)
        .args(["--curve", "0.5-4.1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid curve"));
}

#[test]
fn test_config_file_sets_frequency() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "frequency = 4").unwrap();

    let output = parity()
        .arg("--config")
        .arg(file.path())
        .args(["--format", "json", "schedule"])
        .args(["--maturity", "2030-10-31", "--as-of", "2025-04-17", "--coupon", "6"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let report: Value = serde_json::from_slice(&output).unwrap();

    let flows = report["cashflows"].as_array().unwrap();
    assert!(flows
        .iter()
        .all(|cf| (cf["coupon"].as_f64().unwrap() - 1.5).abs() < 1e-12));
}

#[test]
fn test_flag_overrides_config() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "frequency = 4").unwrap();

    let report = {
        let output = parity()
            .env("PARITY_CONFIG", file.path())
            .args(["--format", "json", "schedule", "--frequency", "1"])
            .args(["--maturity", "2030-10-31", "--as-of", "2025-04-17", "--coupon", "6"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice::<Value>(&output).unwrap()
    };

    assert_eq!(report["cashflows"][0]["coupon"].as_f64(), Some(6.0));
}

#[test]
fn test_invalid_config_fails() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "frequency = 0").unwrap();

    parity()
        .arg("--config")
        .arg(file.path())
        .arg("price")
        .args(BOND)
        .args(["--yield", "4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid coupon convention"));
}
