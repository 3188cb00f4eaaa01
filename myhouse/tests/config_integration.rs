//! Integration tests for layered configuration.
//!
//! Tests that touch `MYHOUSE_*` variables are `#[serial]`; the environment
//! is process-global.

use std::env;
use std::fs;
use std::path::Path;

use serial_test::serial;
use tempfile::TempDir;

use myhouse::config::{ConfigBuilder, ListFormat, StorageKind};
use myhouse::error::Error;

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

/// Sets a variable for the life of the guard.
struct EnvGuard {
    key: &'static str,
    old_value: Option<String>,
}

impl EnvGuard {
    fn set(key: &'static str, value: &str) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self { key, old_value }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(value) => env::set_var(self.key, value),
            None => env::remove_var(self.key),
        }
    }
}

#[test]
fn test_defaults_without_any_source() {
    let data = TempDir::new().unwrap();
    let config = ConfigBuilder::new()
        .with_data_dir(data.path())
        .skip_files()
        .skip_env()
        .build()
        .unwrap();

    assert_eq!(config.storage_kind(), StorageKind::Csv);
    assert_eq!(config.guests_path(data.path()), data.path().join("guests.csv"));
    assert_eq!(
        config.reservations_path(data.path()),
        data.path().join("reservations")
    );
    assert_eq!(config.list_format(), ListFormat::Table);
}

#[test]
#[serial]
fn test_project_file_overrides_user_file() {
    let data = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    let nested = project.path().join("a").join("b");
    fs::create_dir_all(&nested).unwrap();

    write(
        data.path(),
        "config.yaml",
        "storage:\n  backend: sqlite\n  database_file: user.db\noutput_format: json\n",
    );
    write(project.path(), "myhouse.yaml", "output_format: csv\n");

    let config = ConfigBuilder::new()
        .with_data_dir(data.path())
        .with_working_dir(&nested)
        .skip_env()
        .build()
        .unwrap();

    assert_eq!(config.storage_kind(), StorageKind::Sqlite);
    assert_eq!(config.database_path(data.path()), data.path().join("user.db"));
    assert_eq!(config.list_format(), ListFormat::Csv);
}

#[test]
#[serial]
fn test_environment_overrides_files() {
    let data = TempDir::new().unwrap();
    write(data.path(), "config.yaml", "maximum_lock_wait_seconds: 30\n");

    let _wait = EnvGuard::set("MYHOUSE_MAXIMUM_LOCK_WAIT_SECONDS", "2");
    let _backend = EnvGuard::set("MYHOUSE_STORAGE_BACKEND", "sqlite");
    let _format = EnvGuard::set("MYHOUSE_OUTPUT_FORMAT", "TSV");

    let config = ConfigBuilder::new()
        .with_data_dir(data.path())
        .with_working_dir(data.path())
        .build()
        .unwrap();

    assert_eq!(config.maximum_lock_wait_seconds, Some(2));
    assert_eq!(config.storage_kind(), StorageKind::Sqlite);
    assert_eq!(config.list_format(), ListFormat::Tsv);
}

#[test]
#[serial]
fn test_invalid_environment_value_is_an_error() {
    let data = TempDir::new().unwrap();
    let _backend = EnvGuard::set("MYHOUSE_STORAGE_BACKEND", "postgres");

    let result = ConfigBuilder::new()
        .with_data_dir(data.path())
        .skip_files()
        .build();
    assert!(matches!(result, Err(Error::Validation { .. })));
}

#[test]
fn test_unknown_key_in_file_is_rejected() {
    let data = TempDir::new().unwrap();
    write(data.path(), "config.yaml", "storage:\n  engine: sqlite\n");

    let result = ConfigBuilder::new()
        .with_data_dir(data.path())
        .with_working_dir(data.path())
        .skip_env()
        .build();
    assert!(matches!(result, Err(Error::Configuration(_))));
}

#[test]
fn test_zero_lock_wait_fails_validation() {
    let data = TempDir::new().unwrap();
    write(data.path(), "config.yaml", "maximum_lock_wait_seconds: 0\n");

    let result = ConfigBuilder::new()
        .with_data_dir(data.path())
        .with_working_dir(data.path())
        .skip_env()
        .build();
    assert!(matches!(result, Err(Error::Validation { .. })));
}
