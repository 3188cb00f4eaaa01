//! `SQLite` storage backend.
//!
//! A [`Database`] implements all three storage contracts, so one handle can
//! serve as guest directory, host directory and reservation store.
//!
//! # Examples
//!
//! ```no_run
//! use myhouse::database::{Database, DatabaseConfig};
//! use myhouse::storage::ReservationStore;
//! use myhouse::HostId;
//!
//! let db = Database::open(DatabaseConfig::new("/tmp/myhouse.db")).unwrap();
//! for record in db.find_by_host_id(&HostId::new("h-1")).unwrap() {
//!     println!("{} {} - {}", record.id, record.start, record.end);
//! }
//! ```

mod config;
mod connection;
mod import;
pub mod migrations;
mod operations;
mod schema;

#[cfg(test)]
pub(crate) mod test_util;

pub use config::{default_data_dir, DatabaseConfig, DATA_DIR_NAME};
pub use connection::Database;
pub use schema::CURRENT_SCHEMA_VERSION;

pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};
