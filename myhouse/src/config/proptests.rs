//! Property-based tests for configuration merging.

use super::merger::ConfigMerger;
use super::schema::{Config, ListFormat, StorageConfig, StorageKind};
use proptest::prelude::*;

fn format_strategy() -> impl Strategy<Value = ListFormat> {
    prop_oneof![
        Just(ListFormat::Table),
        Just(ListFormat::Json),
        Just(ListFormat::Csv),
        Just(ListFormat::Tsv),
    ]
}

fn storage_strategy() -> impl Strategy<Value = StorageConfig> {
    (
        prop::option::of(prop_oneof![Just(StorageKind::Csv), Just(StorageKind::Sqlite)]),
        prop::option::of("[a-z]{1,12}\\.csv"),
        prop::option::of("[a-z]{1,12}\\.csv"),
        prop::option::of("[a-z]{1,12}"),
        prop::option::of("[a-z]{1,12}\\.db"),
    )
        .prop_map(
            |(backend, guests_file, hosts_file, reservations_dir, database_file)| StorageConfig {
                backend,
                guests_file,
                hosts_file,
                reservations_dir,
                database_file,
            },
        )
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(storage_strategy()),
        prop::option::of(1u64..600),
        prop::option::of(format_strategy()),
    )
        .prop_map(|(storage, maximum_lock_wait_seconds, output_format)| Config {
            storage,
            maximum_lock_wait_seconds,
            output_format,
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // Higher precedence wins wherever it sets a value
    #[test]
    fn config_merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut merged = low.clone();
        ConfigMerger::merge_into(&mut merged, &high);

        prop_assert_eq!(
            merged.maximum_lock_wait_seconds,
            high.maximum_lock_wait_seconds.or(low.maximum_lock_wait_seconds)
        );
        prop_assert_eq!(merged.output_format, high.output_format.or(low.output_format));

        let low_backend = low.storage.as_ref().and_then(|s| s.backend);
        let high_backend = high.storage.as_ref().and_then(|s| s.backend);
        let merged_backend = merged.storage.as_ref().and_then(|s| s.backend);
        prop_assert_eq!(merged_backend, high_backend.or(low_backend));
    }

    // Merging an empty config changes nothing
    #[test]
    fn config_merge_empty_is_identity(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &Config::default());
        prop_assert_eq!(merged, config);
    }

    // Merging a config into itself changes nothing
    #[test]
    fn config_merge_idempotent(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &config);
        prop_assert_eq!(merged, config);
    }
}
