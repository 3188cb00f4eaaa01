//! Integration tests for the `list` command.

mod common;

use common::{TestEnv, GUEST_EMAIL, HOST_EMAIL, OTHER_HOST_EMAIL};
use predicates::prelude::*;

#[test]
fn test_list_table_sorted_by_start() {
    let env = TestEnv::new();

    let output = env
        .command()
        .args(["list", "--host-email", HOST_EMAIL])
        .assert()
        .success()
        .stderr(predicate::str::contains("Yearnes: Amarillo,TX"))
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "ID\tSTART_DATE\tEND_DATE\tGUEST\tEMAIL\tTOTAL");
    assert!(lines[1].starts_with("1\t10/01/2099\t10/05/2099\tLomas, Sullivan"));
    assert!(lines[1].ends_with("$50.00"));
    assert!(lines[2].starts_with("2\t10/12/2099"));
}

#[test]
fn test_list_json() {
    let env = TestEnv::new();

    let output = env
        .command()
        .args(["list", "--host-email", HOST_EMAIL, "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let rows: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["id"], 1);
    assert_eq!(rows[0]["start_date"], "2099-10-01");
    assert_eq!(rows[0]["email"], GUEST_EMAIL);
    assert_eq!(rows[0]["total"], "50");
}

#[test]
fn test_list_csv_filtered_by_guest() {
    let env = TestEnv::new();

    env.command()
        .args([
            "list",
            "--host-email",
            HOST_EMAIL,
            "--guest-email",
            GUEST_EMAIL,
            "--format",
            "csv",
        ])
        .assert()
        .success()
        .stdout(predicate::eq(
            "id,start_date,end_date,guest,email,total\n\
             1,2099-10-01,2099-10-05,\"Lomas, Sullivan\",slomas0@mediafire.com,50\n",
        ));
}

#[test]
fn test_list_future_only_uses_today() {
    let env = TestEnv::new();

    env.command()
        .args(["--today", "2099-10-05", "list", "--host-email", HOST_EMAIL])
        .args(["--future-only", "--format", "tsv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2\t2099-10-12"))
        .stdout(predicate::str::contains("1\t2099-10-01").not());
}

#[test]
fn test_list_format_from_environment() {
    let env = TestEnv::new();

    env.command()
        .env("MYHOUSE_OUTPUT_FORMAT", "tsv")
        .args(["list", "--host-email", HOST_EMAIL])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("id\tstart_date"));
}

#[test]
fn test_list_host_without_reservations() {
    let env = TestEnv::new();

    env.command()
        .args(["list", "--host-email", OTHER_HOST_EMAIL])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No reservations found."));
}

#[test]
fn test_list_unknown_host() {
    let env = TestEnv::new();

    env.command()
        .args(["list", "--host-email", "nobody@example.com"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("host does not exist"));
}
