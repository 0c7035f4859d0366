use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_cli_rent_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("rentacar"));
    cmd.args([
        "rent",
        "tests/fixtures/requests.csv",
        "--cars",
        "tests/fixtures/cars.json",
        "--categories",
        "tests/fixtures/carCategories.json",
        "--start-date",
        "2020-11-05",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "customer_id,customer_name,car_id,car_name,amount,due_date",
        ))
        // 37.6 * 5 * 1.1
        .stdout(predicate::str::contains(
            "u1,Ana Silva,5e7ae7e6-4d2b-4d6b-9a4a-2f7d6b8a1c01,Gol,\"R$\u{a0}206,80\",10 de novembro de 2020",
        ))
        // 37.6 * 5 * 1.3
        .stdout(predicate::str::contains("u2,Bruno Lima").and(predicate::str::contains("R$\u{a0}244,40")))
        // no tier for 15, stale car id, unknown category
        .stdout(predicate::str::contains("u3").not())
        .stdout(predicate::str::contains("u4").not())
        .stdout(predicate::str::contains("u5").not());

    Ok(())
}

#[test]
fn test_cli_rent_with_config() {
    let mut cmd = Command::new(cargo_bin!("rentacar"));
    cmd.args([
        "rent",
        "tests/fixtures/requests.csv",
        "--config",
        "tests/fixtures/config.json",
        "--categories",
        "tests/fixtures/carCategories.json",
        "--start-date",
        "2020-11-05",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("u1,Ana Silva"))
        .stdout(predicate::str::contains("$188.00,\"November 10, 2020\""));
}

#[test]
fn test_cli_logs_skipped_requests() {
    let mut cmd = Command::new(cargo_bin!("rentacar"));
    cmd.env("RUST_LOG", "warn").args([
        "rent",
        "tests/fixtures/requests.csv",
        "--cars",
        "tests/fixtures/cars.json",
        "--categories",
        "tests/fixtures/carCategories.json",
    ]);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("No tax tier covers customer age 15"))
        .stderr(predicate::str::contains("Car not found: ffffffff-0000-0000-0000-000000000000"))
        .stderr(predicate::str::contains("Unknown car category"));
}

#[test]
fn test_cli_requires_car_database() {
    let mut cmd = Command::new(cargo_bin!("rentacar"));
    cmd.args([
        "rent",
        "tests/fixtures/requests.csv",
        "--categories",
        "tests/fixtures/carCategories.json",
    ]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("either --cars or --config must be given"));
}

#[test]
fn test_cli_seed_writes_database() {
    let dir = tempfile::tempdir().unwrap();

    let mut cmd = Command::new(cargo_bin!("rentacar"));
    cmd.arg("seed")
        .arg("--out")
        .arg(dir.path())
        .args(["--categories", "2", "--cars-per-category", "3", "--customers", "4"]);

    cmd.assert().success();

    let cars: Vec<serde_json::Value> =
        serde_json::from_slice(&std::fs::read(dir.path().join("cars.json")).unwrap()).unwrap();
    let categories: Vec<serde_json::Value> = serde_json::from_slice(
        &std::fs::read(dir.path().join("carCategories.json")).unwrap(),
    )
    .unwrap();
    let customers: Vec<serde_json::Value> =
        serde_json::from_slice(&std::fs::read(dir.path().join("customers.json")).unwrap())
            .unwrap();

    assert_eq!(cars.len(), 6);
    assert_eq!(categories.len(), 2);
    assert_eq!(customers.len(), 4);
    assert!(categories[0]["price"].is_number());
}
