//! Integration tests for `import` and the SQLite backend.

mod common;

use common::{TestEnv, GUEST_EMAIL, HOST_EMAIL, OTHER_GUEST_EMAIL};
use predicates::prelude::*;

#[test]
fn test_import_then_book_against_sqlite() {
    let env = TestEnv::new();

    env.command()
        .arg("import")
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Imported 3 guests, 2 hosts and 2 reservations",
        ));
    assert!(env.data_dir.join("myhouse.db").exists());

    env.command()
        .env("MYHOUSE_STORAGE_BACKEND", "sqlite")
        .args(["reserve", "--guest-email", OTHER_GUEST_EMAIL, "--host-email", HOST_EMAIL])
        .args(["--start", "2099-10-06", "--end", "2099-10-09"])
        .assert()
        .success()
        .stdout("3\n");

    // The CSV file is untouched by SQLite bookings
    assert!(!env.host_file().contains("2099-10-06"));

    env.command()
        .env("MYHOUSE_STORAGE_BACKEND", "sqlite")
        .args(["list", "--host-email", HOST_EMAIL, "--guest-email", GUEST_EMAIL])
        .args(["--format", "tsv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1\t2099-10-01\t2099-10-05"));
}

#[test]
fn test_import_to_explicit_path_is_repeatable() {
    let env = TestEnv::new();
    let db = env.data_dir.join("copy.db");

    for _ in 0..2 {
        env.command()
            .arg("import")
            .arg("--database")
            .arg(&db)
            .assert()
            .success();
    }
    assert!(db.exists());
}

#[test]
fn test_import_needs_data_directory() {
    let env = TestEnv::empty();
    env.command().arg("import").assert().code(3);
}
