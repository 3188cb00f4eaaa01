//! Collaborator contracts consumed by the booking engine.
//!
//! The engine never interprets storage formats. It only needs to enumerate
//! and look up hosts and guests, and to read and rewrite one host's set of
//! reservations. Every method takes `&self`: the engine assumes a single,
//! uncontended caller and does no locking of its own.

use crate::error::Result;
use crate::model::{Guest, Host, HostId, ReservationId, ReservationRecord};

/// Read-only access to the guest directory.
#[cfg_attr(test, mockall::automock)]
pub trait GuestDirectory {
    /// Returns every guest.
    ///
    /// # Errors
    ///
    /// Returns an error only for genuine storage faults.
    fn find_all(&self) -> Result<Vec<Guest>>;

    /// Looks up the guest with exactly this email.
    ///
    /// # Errors
    ///
    /// Returns an error only for genuine storage faults.
    fn find_by_email(&self, email: &str) -> Result<Option<Guest>> {
        Ok(self.find_all()?.into_iter().find(|g| g.email == email))
    }
}

/// Read-only access to the host directory.
#[cfg_attr(test, mockall::automock)]
pub trait HostDirectory {
    /// Returns every host.
    ///
    /// # Errors
    ///
    /// Returns an error only for genuine storage faults.
    fn find_all(&self) -> Result<Vec<Host>>;

    /// Looks up the host with exactly this email.
    ///
    /// # Errors
    ///
    /// Returns an error only for genuine storage faults.
    fn find_by_email(&self, email: &str) -> Result<Option<Host>> {
        Ok(self.find_all()?.into_iter().find(|h| h.email == email))
    }
}

/// Per-host reservation persistence.
#[cfg_attr(test, mockall::automock)]
pub trait ReservationStore {
    /// Returns the host's reservations in stored order.
    ///
    /// Records that cannot be parsed are omitted rather than failing the read.
    ///
    /// # Errors
    ///
    /// Returns an error only for genuine storage faults.
    fn find_by_host_id(&self, host_id: &HostId) -> Result<Vec<ReservationRecord>>;

    /// Appends the record under the next id for its host and returns it with
    /// that id set. Any id on the input is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the reservation cannot be written.
    fn add(&self, record: ReservationRecord) -> Result<ReservationRecord>;

    /// Replaces the record with the same id in the same host's set.
    ///
    /// Returns `false` when no such id exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the reservation cannot be written.
    fn update(&self, record: &ReservationRecord) -> Result<bool>;

    /// Removes the record with this id from the host's set.
    ///
    /// Returns `false` when no such id exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the reservations cannot be written.
    fn delete_by_id(&self, id: ReservationId, host_id: &HostId) -> Result<bool>;
}

/// Next host-scoped id: one more than the highest existing id, starting at 1.
///
/// # Examples
///
/// ```
/// use myhouse::storage::next_reservation_id;
///
/// assert_eq!(next_reservation_id(&[]), 1);
/// ```
#[must_use]
pub fn next_reservation_id(existing: &[ReservationRecord]) -> ReservationId {
    existing.iter().map(|r| r.id).max().unwrap_or(0) + 1
}
