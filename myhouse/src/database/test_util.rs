//! Shared test utilities for database unit tests.

use rust_decimal::Decimal;
use tempfile::tempdir;

use crate::database::{Database, DatabaseConfig};
use crate::model::Host;

/// Creates a temporary test database that will be cleaned up automatically.
///
/// # Panics
///
/// Panics if the temporary directory or database cannot be created.
#[must_use]
pub fn create_test_database() -> Database {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.db");
    let db = Database::open(DatabaseConfig::new(path)).unwrap();

    // Prevent the TempDir from being dropped immediately
    std::mem::forget(dir);

    db
}

/// A fully populated host with rates 10 and 15.
#[must_use]
pub fn sample_host(id: &str, email: &str) -> Host {
    Host::new(id, "Hazard", email)
        .with_phone("(555) 555-0100")
        .with_address("1 Main St", "Austin", "TX", "78701")
        .with_rates(Decimal::from(10), Decimal::new(1550, 2))
}
