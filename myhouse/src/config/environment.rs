//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `MYHOUSE_*` environment variables that
//! override configuration file values.

use std::env;
use std::str::FromStr;

use crate::config::schema::{Config, StorageKind};
use crate::error::{Error, Result};

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use myhouse::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., unknown backend, non-numeric timeout).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        Self::apply_storage_overrides(config)?;

        if let Ok(seconds) = env::var("MYHOUSE_MAXIMUM_LOCK_WAIT_SECONDS") {
            config.maximum_lock_wait_seconds =
                Some(seconds.trim().parse().map_err(|_| Error::Validation {
                    field: "MYHOUSE_MAXIMUM_LOCK_WAIT_SECONDS".into(),
                    message: "Must be a positive integer".into(),
                })?);
        }

        if let Ok(format) = env::var("MYHOUSE_OUTPUT_FORMAT") {
            config.output_format = Some(Self::parse("MYHOUSE_OUTPUT_FORMAT", &format)?);
        }

        Ok(())
    }

    fn apply_storage_overrides(config: &mut Config) -> Result<()> {
        let mut storage = config.storage.clone().unwrap_or_default();
        let mut modified = false;

        if let Ok(backend) = env::var("MYHOUSE_STORAGE_BACKEND") {
            storage.backend = Some(Self::parse::<StorageKind>("MYHOUSE_STORAGE_BACKEND", &backend)?);
            modified = true;
        }

        for (var, slot) in [
            ("MYHOUSE_GUESTS_FILE", &mut storage.guests_file),
            ("MYHOUSE_HOSTS_FILE", &mut storage.hosts_file),
            ("MYHOUSE_RESERVATIONS_DIR", &mut storage.reservations_dir),
            ("MYHOUSE_DATABASE_FILE", &mut storage.database_file),
        ] {
            if let Ok(value) = env::var(var) {
                *slot = Some(value);
                modified = true;
            }
        }

        if modified {
            config.storage = Some(storage);
        }
        Ok(())
    }

    /// Parse an enum-valued variable.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming `var` if the value is not recognized.
    pub fn parse<T>(var: &str, value: &str) -> Result<T>
    where
        T: FromStr<Err = String>,
    {
        value.parse().map_err(|message| Error::Validation {
            field: var.to_string(),
            message,
        })
    }
}
