//! Where hosts, guests and reservations come from.
//!
//! The booking engine depends only on the traits in this module. Two
//! persistent implementations exist: the delimited-file store here and the
//! `SQLite` store in [`crate::database`]. [`memory`] holds in-process
//! versions for tests and embedding.

pub mod backend;
pub mod csv_files;
pub mod memory;
pub(crate) mod traits;

pub use backend::StorageBackend;
pub use csv_files::{CsvGuestDirectory, CsvHostDirectory, CsvReservationStore};
pub use traits::{next_reservation_id, GuestDirectory, HostDirectory, ReservationStore};
