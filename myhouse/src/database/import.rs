//! Bulk loading of directory and reservation data.
//!
//! Used to seed a database from the CSV files. Each import runs in a single
//! IMMEDIATE transaction: either every row lands or none does.

use rusqlite::{params, TransactionBehavior};

use crate::error::Result;
use crate::model::{Guest, Host, ReservationRecord};

use super::connection::Database;
use super::schema::{INSERT_GUEST, INSERT_HOST, INSERT_RESERVATION};

impl Database {
    /// Inserts guests, updating any row that already has the same id.
    ///
    /// Returns the number of rows written.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction cannot be started, any insert
    /// fails (for example a duplicate email), or the commit fails.
    pub fn import_guests(&mut self, guests: &[Guest]) -> Result<usize> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        {
            let mut stmt = tx.prepare(INSERT_GUEST)?;
            for guest in guests {
                stmt.execute(params![
                    guest.id,
                    guest.first_name,
                    guest.last_name,
                    guest.email,
                    guest.phone,
                    guest.state,
                ])?;
            }
        }

        tx.commit()?;
        log::debug!("Imported {} guests", guests.len());
        Ok(guests.len())
    }

    /// Inserts hosts, updating any row that already has the same id.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction cannot be started, any insert
    /// fails (for example an email taken by another host), or the commit
    /// fails.
    pub fn import_hosts(&mut self, hosts: &[Host]) -> Result<usize> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        {
            let mut stmt = tx.prepare(INSERT_HOST)?;
            for host in hosts {
                stmt.execute(params![
                    host.id.as_str(),
                    host.last_name,
                    host.email,
                    host.phone,
                    host.address,
                    host.city,
                    host.state,
                    host.postal_code,
                    host.standard_rate.to_string(),
                    host.weekend_rate.to_string(),
                ])?;
            }
        }

        tx.commit()?;
        log::debug!("Imported {} hosts", hosts.len());
        Ok(hosts.len())
    }

    /// Inserts or replaces reservations, keeping their ids.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction cannot be started, any insert
    /// fails, or the commit fails.
    pub fn import_reservations(&mut self, records: &[ReservationRecord]) -> Result<usize> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        {
            let mut stmt = tx.prepare(INSERT_RESERVATION)?;
            for record in records {
                stmt.execute(params![
                    record.host_id.as_str(),
                    record.id,
                    record.guest_id,
                    record.start.to_string(),
                    record.end.to_string(),
                    record.total.to_string(),
                ])?;
            }
        }

        tx.commit()?;
        log::debug!("Imported {} reservations", records.len());
        Ok(records.len())
    }
}
