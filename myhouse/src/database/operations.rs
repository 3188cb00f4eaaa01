//! Directory and reservation store implementations over `SQLite`.
//!
//! Dates and money are stored as text. Rows whose text no longer parses are
//! skipped with a warning, matching how the CSV backend treats bad lines.

use std::str::FromStr;

use chrono::NaiveDate;
use rusqlite::{params, Transaction, TransactionBehavior};
use rust_decimal::Decimal;

use crate::error::Result;
use crate::model::{Guest, Host, HostId, ReservationId, ReservationRecord};
use crate::storage::{GuestDirectory, HostDirectory, ReservationStore};

use super::connection::Database;
use super::schema::INSERT_RESERVATION;

const SELECT_GUESTS: &str = r"
    SELECT guest_id, first_name, last_name, email, phone, state
    FROM guests
    ORDER BY guest_id
";

const SELECT_GUEST_BY_EMAIL: &str = r"
    SELECT guest_id, first_name, last_name, email, phone, state
    FROM guests
    WHERE email = ?
";

const SELECT_HOSTS: &str = r"
    SELECT host_id, last_name, email, phone, address, city, state, postal_code,
           standard_rate, weekend_rate
    FROM hosts
    ORDER BY rowid
";

const SELECT_HOST_BY_EMAIL: &str = r"
    SELECT host_id, last_name, email, phone, address, city, state, postal_code,
           standard_rate, weekend_rate
    FROM hosts
    WHERE email = ?
";

const SELECT_RESERVATIONS_FOR_HOST: &str = r"
    SELECT reservation_id, host_id, guest_id, start_date, end_date, total
    FROM reservations
    WHERE host_id = ?
    ORDER BY reservation_id
";

const SELECT_NEXT_RESERVATION_ID: &str = r"
    SELECT COALESCE(MAX(reservation_id), 0) + 1
    FROM reservations
    WHERE host_id = ?
";

const UPDATE_RESERVATION: &str = r"
    UPDATE reservations
    SET guest_id = ?, start_date = ?, end_date = ?, total = ?
    WHERE host_id = ? AND reservation_id = ?
";

const DELETE_RESERVATION: &str = r"
    DELETE FROM reservations
    WHERE host_id = ? AND reservation_id = ?
";

fn row_to_guest(row: &rusqlite::Row<'_>) -> rusqlite::Result<Guest> {
    Ok(Guest {
        id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        email: row.get(3)?,
        phone: row.get(4)?,
        state: row.get(5)?,
    })
}

/// Host row with rates still in stored text form.
struct HostRow {
    host: Host,
    standard_rate: String,
    weekend_rate: String,
}

fn row_to_host(row: &rusqlite::Row<'_>) -> rusqlite::Result<HostRow> {
    let id: String = row.get(0)?;
    let mut host = Host::new(id.as_str(), row.get::<_, String>(1)?, row.get::<_, String>(2)?)
        .with_phone(row.get::<_, String>(3)?);
    host = host.with_address(
        row.get::<_, String>(4)?,
        row.get::<_, String>(5)?,
        row.get::<_, String>(6)?,
        row.get::<_, String>(7)?,
    );
    Ok(HostRow {
        host,
        standard_rate: row.get(8)?,
        weekend_rate: row.get(9)?,
    })
}

fn parse_host(row: HostRow) -> Option<Host> {
    match (
        Decimal::from_str(&row.standard_rate),
        Decimal::from_str(&row.weekend_rate),
    ) {
        (Ok(standard), Ok(weekend)) => Some(row.host.with_rates(standard, weekend)),
        _ => {
            log::warn!("Skipping host {} with unreadable rates", row.host.id);
            None
        }
    }
}

/// Reservation row with dates and total still in stored text form.
struct ReservationRow {
    id: ReservationId,
    host_id: String,
    guest_id: u32,
    start: String,
    end: String,
    total: String,
}

fn row_to_reservation(row: &rusqlite::Row<'_>) -> rusqlite::Result<ReservationRow> {
    Ok(ReservationRow {
        id: row.get(0)?,
        host_id: row.get(1)?,
        guest_id: row.get(2)?,
        start: row.get(3)?,
        end: row.get(4)?,
        total: row.get(5)?,
    })
}

fn parse_reservation(row: ReservationRow) -> Option<ReservationRecord> {
    let start = NaiveDate::from_str(&row.start).ok();
    let end = NaiveDate::from_str(&row.end).ok();
    let total = Decimal::from_str(&row.total).ok();
    if let (Some(start), Some(end), Some(total)) = (start, end, total) {
        Some(ReservationRecord {
            id: row.id,
            host_id: HostId::new(row.host_id),
            guest_id: row.guest_id,
            start,
            end,
            total,
        })
    } else {
        log::warn!(
            "Skipping unreadable reservation {} for host {}",
            row.id,
            row.host_id
        );
        None
    }
}

impl GuestDirectory for Database {
    fn find_all(&self) -> Result<Vec<Guest>> {
        let mut stmt = self.conn.prepare(SELECT_GUESTS)?;
        let guests = stmt
            .query_map([], row_to_guest)?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;
        Ok(guests)
    }

    fn find_by_email(&self, email: &str) -> Result<Option<Guest>> {
        let mut stmt = self.conn.prepare(SELECT_GUEST_BY_EMAIL)?;
        let mut rows = stmt.query_map([email], row_to_guest)?;
        Ok(rows.next().transpose()?)
    }
}

impl HostDirectory for Database {
    fn find_all(&self) -> Result<Vec<Host>> {
        let mut stmt = self.conn.prepare(SELECT_HOSTS)?;
        let rows = stmt
            .query_map([], row_to_host)?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;
        Ok(rows.into_iter().filter_map(parse_host).collect())
    }

    fn find_by_email(&self, email: &str) -> Result<Option<Host>> {
        let mut stmt = self.conn.prepare(SELECT_HOST_BY_EMAIL)?;
        let mut rows = stmt.query_map([email], row_to_host)?;
        Ok(rows.next().transpose()?.and_then(parse_host))
    }
}

impl ReservationStore for Database {
    fn find_by_host_id(&self, host_id: &HostId) -> Result<Vec<ReservationRecord>> {
        let mut stmt = self.conn.prepare(SELECT_RESERVATIONS_FOR_HOST)?;
        let rows = stmt
            .query_map([host_id.as_str()], row_to_reservation)?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;
        Ok(rows.into_iter().filter_map(parse_reservation).collect())
    }

    /// Assigns the id and inserts inside one IMMEDIATE transaction so two
    /// writers cannot pick the same id.
    fn add(&self, mut record: ReservationRecord) -> Result<ReservationRecord> {
        let tx = Transaction::new_unchecked(&self.conn, TransactionBehavior::Immediate)?;

        record.id = tx.query_row(
            SELECT_NEXT_RESERVATION_ID,
            [record.host_id.as_str()],
            |row| row.get(0),
        )?;
        tx.execute(
            INSERT_RESERVATION,
            params![
                record.host_id.as_str(),
                record.id,
                record.guest_id,
                record.start.to_string(),
                record.end.to_string(),
                record.total.to_string(),
            ],
        )?;

        tx.commit()?;
        log::debug!("Inserted reservation {} for host {}", record.id, record.host_id);
        Ok(record)
    }

    fn update(&self, record: &ReservationRecord) -> Result<bool> {
        let changes = self.conn.execute(
            UPDATE_RESERVATION,
            params![
                record.guest_id,
                record.start.to_string(),
                record.end.to_string(),
                record.total.to_string(),
                record.host_id.as_str(),
                record.id,
            ],
        )?;
        Ok(changes > 0)
    }

    fn delete_by_id(&self, id: ReservationId, host_id: &HostId) -> Result<bool> {
        let changes = self
            .conn
            .execute(DELETE_RESERVATION, params![host_id.as_str(), id])?;
        Ok(changes > 0)
    }
}
