//! Configuration validation.

use crate::config::schema::{Config, StorageConfig};
use crate::error::{Error, Result};

/// Longest accepted file name or path in the storage settings.
const MAX_PATH_LEN: usize = 4096;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use myhouse::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::with_defaults()).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref storage) = config.storage {
            Self::validate_storage(storage)?;
        }

        if config.maximum_lock_wait_seconds == Some(0) {
            return Err(Error::Validation {
                field: "maximum_lock_wait_seconds".into(),
                message: "Must be greater than zero".into(),
            });
        }

        Ok(())
    }

    fn validate_storage(storage: &StorageConfig) -> Result<()> {
        let paths = [
            ("storage.guests_file", &storage.guests_file),
            ("storage.hosts_file", &storage.hosts_file),
            ("storage.reservations_dir", &storage.reservations_dir),
            ("storage.database_file", &storage.database_file),
        ];
        for (field, value) in paths {
            if let Some(value) = value {
                Self::validate_path(field, value)?;
            }
        }
        Ok(())
    }

    /// Checks that a configured path is non-empty after trimming, contains
    /// no null bytes, and is of sane length.
    fn validate_path(field: &str, value: &str) -> Result<()> {
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot be empty or only whitespace".into(),
            });
        }

        if trimmed.contains('\0') {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot contain null bytes".into(),
            });
        }

        if trimmed.len() > MAX_PATH_LEN {
            return Err(Error::Validation {
                field: field.into(),
                message: format!("Cannot exceed {MAX_PATH_LEN} characters"),
            });
        }

        Ok(())
    }
}
