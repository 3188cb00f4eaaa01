//! In-memory collaborators for tests and embedding.
//!
//! State lives in `RefCell`s; these types are for single-threaded use only.

use std::cell::RefCell;

use super::traits::{next_reservation_id, GuestDirectory, HostDirectory, ReservationStore};
use crate::error::Result;
use crate::model::{Guest, Host, HostId, ReservationId, ReservationRecord};

/// Guest directory over a fixed list.
#[derive(Debug, Default)]
pub struct MemoryGuestDirectory {
    guests: Vec<Guest>,
}

impl MemoryGuestDirectory {
    /// Creates a directory holding `guests`.
    #[must_use]
    pub fn new(guests: Vec<Guest>) -> Self {
        Self { guests }
    }
}

impl GuestDirectory for MemoryGuestDirectory {
    fn find_all(&self) -> Result<Vec<Guest>> {
        Ok(self.guests.clone())
    }
}

/// Host directory over a fixed list.
#[derive(Debug, Default)]
pub struct MemoryHostDirectory {
    hosts: Vec<Host>,
}

impl MemoryHostDirectory {
    /// Creates a directory holding `hosts`.
    #[must_use]
    pub fn new(hosts: Vec<Host>) -> Self {
        Self { hosts }
    }
}

impl HostDirectory for MemoryHostDirectory {
    fn find_all(&self) -> Result<Vec<Host>> {
        Ok(self.hosts.clone())
    }
}

/// Reservation store holding every host's records in one list.
#[derive(Debug, Default)]
pub struct MemoryReservationStore {
    records: RefCell<Vec<ReservationRecord>>,
}

impl MemoryReservationStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-loaded with records, ids kept as given.
    #[must_use]
    pub fn with_records(records: Vec<ReservationRecord>) -> Self {
        Self {
            records: RefCell::new(records),
        }
    }

    /// Returns a copy of every record across all hosts.
    #[must_use]
    pub fn snapshot(&self) -> Vec<ReservationRecord> {
        self.records.borrow().clone()
    }
}

impl ReservationStore for MemoryReservationStore {
    fn find_by_host_id(&self, host_id: &HostId) -> Result<Vec<ReservationRecord>> {
        Ok(self
            .records
            .borrow()
            .iter()
            .filter(|r| &r.host_id == host_id)
            .cloned()
            .collect())
    }

    fn add(&self, mut record: ReservationRecord) -> Result<ReservationRecord> {
        let existing = self.find_by_host_id(&record.host_id)?;
        record.id = next_reservation_id(&existing);
        self.records.borrow_mut().push(record.clone());
        Ok(record)
    }

    fn update(&self, record: &ReservationRecord) -> Result<bool> {
        let mut records = self.records.borrow_mut();
        match records
            .iter_mut()
            .find(|r| r.host_id == record.host_id && r.id == record.id)
        {
            Some(slot) => {
                *slot = record.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete_by_id(&self, id: ReservationId, host_id: &HostId) -> Result<bool> {
        let mut records = self.records.borrow_mut();
        match records
            .iter()
            .position(|r| &r.host_id == host_id && r.id == id)
        {
            Some(index) => {
                records.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
