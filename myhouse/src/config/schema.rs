//! Configuration schema definitions.
//!
//! Every field is optional so that partial files and environment overrides
//! can be layered; [`Config::with_defaults`] supplies the built-in values.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default guest directory file name.
pub const DEFAULT_GUESTS_FILE: &str = "guests.csv";
/// Default host directory file name.
pub const DEFAULT_HOSTS_FILE: &str = "hosts.csv";
/// Default directory holding one reservation file per host.
pub const DEFAULT_RESERVATIONS_DIR: &str = "reservations";
/// Default SQLite database file name.
pub const DEFAULT_DATABASE_FILE: &str = "myhouse.db";
/// Default database lock wait in seconds.
pub const DEFAULT_LOCK_WAIT_SECONDS: u64 = 5;

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use myhouse::config::{Config, StorageConfig, StorageKind};
///
/// let config = Config {
///     storage: Some(StorageConfig {
///         backend: Some(StorageKind::Sqlite),
///         ..Default::default()
///     }),
///     ..Default::default()
/// };
/// assert_eq!(config.storage_kind(), StorageKind::Sqlite);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Where hosts, guests and reservations are kept.
    pub storage: Option<StorageConfig>,

    /// Maximum time to wait for database lock acquisition (seconds).
    pub maximum_lock_wait_seconds: Option<u64>,

    /// Output format for list commands.
    pub output_format: Option<ListFormat>,
}

/// Storage location settings.
///
/// Relative paths are resolved against the data directory.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Which backend holds the data.
    pub backend: Option<StorageKind>,
    /// Guest directory file.
    pub guests_file: Option<String>,
    /// Host directory file.
    pub hosts_file: Option<String>,
    /// Directory of per-host reservation files.
    pub reservations_dir: Option<String>,
    /// SQLite database file.
    pub database_file: Option<String>,
}

/// Persistence backend.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    /// Delimited text files.
    #[default]
    Csv,
    /// A single SQLite database.
    Sqlite,
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Sqlite => write!(f, "sqlite"),
        }
    }
}

impl FromStr for StorageKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "sqlite" => Ok(Self::Sqlite),
            other => Err(format!("unknown storage backend '{other}' (expected csv or sqlite)")),
        }
    }
}

/// Output format for reservation listings.
///
/// # Examples
///
/// ```
/// use myhouse::config::ListFormat;
///
/// let format = ListFormat::Json;
/// assert_eq!(format.to_string(), "json");
/// ```
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ListFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON output format.
    Json,
    /// CSV output format.
    Csv,
    /// TSV output format.
    Tsv,
}

impl fmt::Display for ListFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Tsv => write!(f, "tsv"),
        }
    }
}

impl FromStr for ListFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as clap::ValueEnum>::from_str(s.trim(), true)
    }
}

impl Config {
    /// The built-in defaults with every field set.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            storage: Some(StorageConfig {
                backend: Some(StorageKind::Csv),
                guests_file: Some(DEFAULT_GUESTS_FILE.to_string()),
                hosts_file: Some(DEFAULT_HOSTS_FILE.to_string()),
                reservations_dir: Some(DEFAULT_RESERVATIONS_DIR.to_string()),
                database_file: Some(DEFAULT_DATABASE_FILE.to_string()),
            }),
            maximum_lock_wait_seconds: Some(DEFAULT_LOCK_WAIT_SECONDS),
            output_format: Some(ListFormat::Table),
        }
    }

    fn storage_field(&self, field: fn(&StorageConfig) -> Option<&String>) -> Option<&str> {
        self.storage
            .as_ref()
            .and_then(field)
            .map(String::as_str)
    }

    /// Configured backend, or CSV.
    #[must_use]
    pub fn storage_kind(&self) -> StorageKind {
        self.storage
            .as_ref()
            .and_then(|s| s.backend)
            .unwrap_or_default()
    }

    /// Guest file resolved against `data_dir`.
    #[must_use]
    pub fn guests_path(&self, data_dir: &Path) -> PathBuf {
        resolve(
            data_dir,
            self.storage_field(|s| s.guests_file.as_ref())
                .unwrap_or(DEFAULT_GUESTS_FILE),
        )
    }

    /// Host file resolved against `data_dir`.
    #[must_use]
    pub fn hosts_path(&self, data_dir: &Path) -> PathBuf {
        resolve(
            data_dir,
            self.storage_field(|s| s.hosts_file.as_ref())
                .unwrap_or(DEFAULT_HOSTS_FILE),
        )
    }

    /// Reservation directory resolved against `data_dir`.
    #[must_use]
    pub fn reservations_path(&self, data_dir: &Path) -> PathBuf {
        resolve(
            data_dir,
            self.storage_field(|s| s.reservations_dir.as_ref())
                .unwrap_or(DEFAULT_RESERVATIONS_DIR),
        )
    }

    /// Database file resolved against `data_dir`.
    #[must_use]
    pub fn database_path(&self, data_dir: &Path) -> PathBuf {
        resolve(
            data_dir,
            self.storage_field(|s| s.database_file.as_ref())
                .unwrap_or(DEFAULT_DATABASE_FILE),
        )
    }

    /// Lock wait as a duration.
    #[must_use]
    pub fn lock_wait(&self) -> Duration {
        Duration::from_secs(
            self.maximum_lock_wait_seconds
                .unwrap_or(DEFAULT_LOCK_WAIT_SECONDS),
        )
    }

    /// Configured list format, or table.
    #[must_use]
    pub fn list_format(&self) -> ListFormat {
        self.output_format.unwrap_or_default()
    }
}

fn resolve(data_dir: &Path, configured: &str) -> PathBuf {
    let path = Path::new(configured);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        data_dir.join(path)
    }
}
