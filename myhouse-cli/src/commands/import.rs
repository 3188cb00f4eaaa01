//! Import command implementation.
//!
//! Copies the CSV data set (guests, hosts and every host's reservation
//! file) into the `SQLite` database. Existing rows with the same keys are
//! replaced.

use std::path::PathBuf;

use clap::Args;

use myhouse::database::{Database, DatabaseConfig};
use myhouse::storage::{
    CsvGuestDirectory, CsvHostDirectory, CsvReservationStore, GuestDirectory, HostDirectory,
    ReservationStore,
};

use crate::error::CliError;
use crate::utils::{load_configuration, resolve_data_dir, shorten_path, GlobalOptions};

/// Copy the CSV data set into SQLite.
#[derive(Args)]
pub struct ImportCommand {
    /// Database file to write (defaults to the configured one)
    #[arg(long, value_name = "PATH")]
    pub database: Option<PathBuf>,
}

impl ImportCommand {
    /// Execute the import command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let data_dir = resolve_data_dir(global)?;
        if !data_dir.is_dir() {
            return Err(CliError::NoDataDirectory(data_dir));
        }
        let config = load_configuration(global, &data_dir)?;

        let guests = CsvGuestDirectory::new(config.guests_path(&data_dir)).find_all()?;
        let hosts = CsvHostDirectory::new(config.hosts_path(&data_dir)).find_all()?;
        let store = CsvReservationStore::new(config.reservations_path(&data_dir));
        let mut records = Vec::new();
        for host_id in store.host_ids()? {
            records.extend(store.find_by_host_id(&host_id)?);
        }

        let db_path = self
            .database
            .unwrap_or_else(|| config.database_path(&data_dir));
        let mut db =
            Database::open(DatabaseConfig::new(&db_path).with_busy_timeout(config.lock_wait()))?;

        let guest_count = db.import_guests(&guests)?;
        let host_count = db.import_hosts(&hosts)?;
        let reservation_count = db.import_reservations(&records)?;

        if !global.quiet {
            eprintln!(
                "Imported {guest_count} guests, {host_count} hosts and {reservation_count} reservations into {}",
                shorten_path(&db_path)
            );
        }

        Ok(())
    }
}
