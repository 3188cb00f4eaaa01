//! Error types for the myhouse library.
//!
//! [`Error`] is the fatal channel: storage faults, configuration problems and
//! database trouble. Business-rule failures such as a missing guest or an
//! overlapping stay are never errors; they travel in [`crate::Outcome`].

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a myhouse error.
///
/// # Examples
///
/// ```
/// use myhouse::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(1)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the myhouse library.
#[derive(Debug, Error)]
pub enum Error {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A delimited data file could not be read or written.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A configuration value is out of range or malformed.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A store could not persist its data.
    #[error("failed to write {}: {source}", path.display())]
    StorageWrite {
        /// The file being replaced.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A host id cannot name a file inside the reservations directory.
    #[error("invalid host id '{id}' for file storage")]
    InvalidHostId {
        /// The rejected id.
        id: String,
    },

    /// The data directory does not exist.
    #[error("data directory not found: {}", path.display())]
    DataDirectoryNotFound {
        /// The expected path to the data directory.
        path: PathBuf,
    },

    /// An unsupported schema version was encountered.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The expected schema version.
        expected: u32,
        /// The schema version found in the database.
        found: u32,
    },
}

impl Error {
    /// Check if error was raised while persisting data.
    ///
    /// # Examples
    ///
    /// ```
    /// use myhouse::Error;
    ///
    /// let err = Error::StorageWrite {
    ///     path: "hosts.csv".into(),
    ///     source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
    /// };
    /// assert!(err.is_storage_write());
    /// ```
    #[must_use]
    pub fn is_storage_write(&self) -> bool {
        matches!(self, Self::StorageWrite { .. })
    }
}
