use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn test_cli_sample_order_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let mut cmd = Command::new(cargo_bin!("restaurant-ledger"));
    cmd.arg("--menu-path").arg(dir.path().join("menu.json"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Menu loaded from JSON:"))
        .stdout(predicate::str::contains("Garlic Bread - $4.00 (4 pieces)"))
        .stdout(predicate::str::contains("Vegetarian Pasta - $10.00\n"))
        .stdout(predicate::str::contains("2x Coke - $2.50 (Large)"))
        .stdout(predicate::str::contains("Total: $21.50"))
        .stdout(predicate::str::contains(
            "Payment of $30.00 processed successfully via Credit card.",
        ))
        .stdout(predicate::str::contains("Change: $8.50"));

    assert!(dir.path().join("menu.json").exists());
    Ok(())
}

#[test]
fn test_cli_order_from_csv() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let mut cmd = Command::new(cargo_bin!("restaurant-ledger"));
    cmd.arg("--menu-path")
        .arg(dir.path().join("menu.json"))
        .arg("--order")
        .arg("tests/fixtures/order.csv")
        .arg("--amount")
        .arg("21.5")
        .arg("--method")
        .arg("Cash");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1x Spring Rolls - $5.00 (Medium)"))
        .stdout(predicate::str::contains("Method: Cash"))
        .stdout(predicate::str::contains("Exact payment."));

    Ok(())
}
