//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::{Config, StorageConfig};

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use myhouse::config::{Config, ConfigMerger};
///
/// let low = Config { maximum_lock_wait_seconds: Some(1), ..Default::default() };
/// let high = Config { maximum_lock_wait_seconds: Some(9), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.maximum_lock_wait_seconds, Some(9));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// # Merging Rules
    ///
    /// - Simple fields: source overwrites if Some
    /// - Storage: field-by-field merge
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.maximum_lock_wait_seconds.is_some() {
            target.maximum_lock_wait_seconds = source.maximum_lock_wait_seconds;
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }

        if let Some(ref source_storage) = source.storage {
            target.storage = Some(match &target.storage {
                Some(target_storage) => Self::merge_storage(target_storage, source_storage),
                None => source_storage.clone(),
            });
        }
    }

    fn merge_storage(target: &StorageConfig, source: &StorageConfig) -> StorageConfig {
        StorageConfig {
            backend: source.backend.or(target.backend),
            guests_file: source
                .guests_file
                .clone()
                .or_else(|| target.guests_file.clone()),
            hosts_file: source
                .hosts_file
                .clone()
                .or_else(|| target.hosts_file.clone()),
            reservations_dir: source
                .reservations_dir
                .clone()
                .or_else(|| target.reservations_dir.clone()),
            database_file: source
                .database_file
                .clone()
                .or_else(|| target.database_file.clone()),
        }
    }
}
