//! Opening the configured storage backend.

use std::path::Path;
use std::rc::Rc;

use super::csv_files::{CsvGuestDirectory, CsvHostDirectory, CsvReservationStore};
use super::traits::{GuestDirectory, HostDirectory, ReservationStore};
use crate::booking::ReservationService;
use crate::config::{Config, StorageKind};
use crate::database::{Database, DatabaseConfig};
use crate::error::{Error, Result};

/// The three collaborator handles for one data directory.
///
/// # Examples
///
/// ```no_run
/// use myhouse::config::ConfigBuilder;
/// use myhouse::storage::StorageBackend;
/// use std::path::Path;
///
/// let data_dir = Path::new("/srv/myhouse");
/// let config = ConfigBuilder::new().with_data_dir(data_dir).build().unwrap();
/// let service = StorageBackend::open(&config, data_dir).unwrap().into_service();
/// ```
pub struct StorageBackend {
    kind: StorageKind,
    guests: Rc<dyn GuestDirectory>,
    hosts: Rc<dyn HostDirectory>,
    reservations: Rc<dyn ReservationStore>,
}

impl std::fmt::Debug for StorageBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageBackend")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

impl StorageBackend {
    /// Opens whichever backend `config` selects under `data_dir`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataDirectoryNotFound`] if `data_dir` does not exist,
    /// or a database error if the `SQLite` file cannot be opened.
    pub fn open(config: &Config, data_dir: &Path) -> Result<Self> {
        if !data_dir.is_dir() {
            return Err(Error::DataDirectoryNotFound {
                path: data_dir.to_path_buf(),
            });
        }

        match config.storage_kind() {
            StorageKind::Csv => Ok(Self::csv(config, data_dir)),
            StorageKind::Sqlite => Self::sqlite(config, data_dir),
        }
    }

    /// The delimited-file backend. Nothing is read until first use.
    #[must_use]
    pub fn csv(config: &Config, data_dir: &Path) -> Self {
        log::debug!("Using CSV storage in {}", data_dir.display());
        Self {
            kind: StorageKind::Csv,
            guests: Rc::new(CsvGuestDirectory::new(config.guests_path(data_dir))),
            hosts: Rc::new(CsvHostDirectory::new(config.hosts_path(data_dir))),
            reservations: Rc::new(CsvReservationStore::new(
                config.reservations_path(data_dir),
            )),
        }
    }

    /// The `SQLite` backend; one connection serves all three roles.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or has an
    /// unsupported schema version.
    pub fn sqlite(config: &Config, data_dir: &Path) -> Result<Self> {
        let db_config =
            DatabaseConfig::new(config.database_path(data_dir)).with_busy_timeout(config.lock_wait());
        let db = Rc::new(Database::open(db_config)?);
        Ok(Self::from_database(db))
    }

    /// Wraps an already open database.
    #[must_use]
    pub fn from_database(db: Rc<Database>) -> Self {
        Self {
            kind: StorageKind::Sqlite,
            guests: db.clone(),
            hosts: db.clone(),
            reservations: db,
        }
    }

    /// Which backend this is.
    #[must_use]
    pub const fn kind(&self) -> StorageKind {
        self.kind
    }

    /// Guest directory handle.
    #[must_use]
    pub fn guests(&self) -> Rc<dyn GuestDirectory> {
        Rc::clone(&self.guests)
    }

    /// Host directory handle.
    #[must_use]
    pub fn hosts(&self) -> Rc<dyn HostDirectory> {
        Rc::clone(&self.hosts)
    }

    /// Reservation store handle.
    #[must_use]
    pub fn reservations(&self) -> Rc<dyn ReservationStore> {
        Rc::clone(&self.reservations)
    }

    /// Builds a service over these handles.
    #[must_use]
    pub fn into_service(self) -> ReservationService {
        ReservationService::new(self.reservations, self.hosts, self.guests)
    }
}
