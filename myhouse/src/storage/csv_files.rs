//! Delimited-file storage.
//!
//! Layout under a data directory:
//!
//! ```text
//! guests.csv                 guest_id,first_name,last_name,email,phone,state
//! hosts.csv                  id,last_name,email,phone,address,city,state,postal_code,standard_rate,weekend_rate
//! reservations/<host>.csv    id,start_date,end_date,guest_id,total
//! ```
//!
//! Each file starts with a header line. Rows with the wrong number of fields
//! or values that do not parse are skipped with a warning. A file that is
//! missing or cannot be opened reads as empty, also with a warning; this
//! matches the historical format's behavior but means a damaged file looks
//! like an empty one.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::NaiveDate;
use csv::StringRecord;
use rust_decimal::Decimal;
use tempfile::NamedTempFile;

use super::traits::{next_reservation_id, GuestDirectory, HostDirectory, ReservationStore};
use crate::error::{Error, Result};
use crate::model::{Guest, Host, HostId, ReservationId, ReservationRecord};

const GUEST_HEADER: [&str; 6] = ["guest_id", "first_name", "last_name", "email", "phone", "state"];
const HOST_HEADER: [&str; 10] = [
    "id",
    "last_name",
    "email",
    "phone",
    "address",
    "city",
    "state",
    "postal_code",
    "standard_rate",
    "weekend_rate",
];
const RESERVATION_HEADER: [&str; 5] = ["id", "start_date", "end_date", "guest_id", "total"];

/// Reads every data row with exactly `fields` columns.
fn read_rows(path: &Path, fields: usize) -> Vec<StringRecord> {
    if !path.exists() {
        log::warn!("{} does not exist; treating as empty", path.display());
        return Vec::new();
    }

    let mut reader = match csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
    {
        Ok(reader) => reader,
        Err(e) => {
            log::warn!("Cannot read {}: {e}; treating as empty", path.display());
            return Vec::new();
        }
    };

    let mut rows = Vec::new();
    for (index, row) in reader.records().enumerate() {
        // Header is line 1
        let line = index + 2;
        match row {
            Ok(row) if row.len() == fields => rows.push(row),
            Ok(row) => log::warn!(
                "{}:{line}: expected {fields} fields, found {}; skipping",
                path.display(),
                row.len()
            ),
            Err(e) => log::warn!("{}:{line}: {e}; skipping", path.display()),
        }
    }
    rows
}

fn parse_rows<T, F>(path: &Path, fields: usize, parse: F) -> Vec<T>
where
    F: Fn(&StringRecord) -> Option<T>,
{
    read_rows(path, fields)
        .iter()
        .filter_map(|row| {
            let parsed = parse(row);
            if parsed.is_none() {
                log::warn!("{}: unparseable row {:?}; skipping", path.display(), row);
            }
            parsed
        })
        .collect()
}

fn parse_guest(row: &StringRecord) -> Option<Guest> {
    Some(
        Guest::new(row[0].parse().ok()?, &row[1], &row[2], &row[3])
            .with_phone(&row[4])
            .with_state(&row[5]),
    )
}

fn parse_host(row: &StringRecord) -> Option<Host> {
    Some(
        Host::new(&row[0], &row[1], &row[2])
            .with_phone(&row[3])
            .with_address(&row[4], &row[5], &row[6], &row[7])
            .with_rates(
                Decimal::from_str(&row[8]).ok()?,
                Decimal::from_str(&row[9]).ok()?,
            ),
    )
}

fn reservation_parser(host_id: &HostId) -> impl Fn(&StringRecord) -> Option<ReservationRecord> + '_ {
    move |row| {
        Some(ReservationRecord {
            id: row[0].parse().ok()?,
            host_id: host_id.clone(),
            start: NaiveDate::from_str(&row[1]).ok()?,
            end: NaiveDate::from_str(&row[2]).ok()?,
            guest_id: row[3].parse().ok()?,
            total: Decimal::from_str(&row[4]).ok()?,
        })
    }
}

/// Replaces `path` with the given rows, all or nothing.
///
/// Rows go to a temporary file in the same directory which is then renamed
/// over the target.
fn write_rows<I>(path: &Path, header: &[&str], rows: I) -> Result<()>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let storage_write = |source: std::io::Error| Error::StorageWrite {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(storage_write)?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(storage_write)?;
    {
        let mut writer = csv::Writer::from_writer(tmp.as_file_mut());
        writer
            .write_record(header)
            .map_err(|e| storage_write(e.into()))?;
        for row in rows {
            writer
                .write_record(&row)
                .map_err(|e| storage_write(e.into()))?;
        }
        writer.flush().map_err(storage_write)?;
    }
    tmp.persist(path).map_err(|e| storage_write(e.error))?;
    Ok(())
}

/// Guest directory backed by `guests.csv`.
#[derive(Debug, Clone)]
pub struct CsvGuestDirectory {
    path: PathBuf,
}

impl CsvGuestDirectory {
    /// Creates a directory reading from `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this directory reads.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replaces the file with `guests`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StorageWrite`] if the file cannot be replaced.
    pub fn write_all(&self, guests: &[Guest]) -> Result<()> {
        write_rows(
            &self.path,
            &GUEST_HEADER,
            guests.iter().map(|g| {
                vec![
                    g.id.to_string(),
                    g.first_name.clone(),
                    g.last_name.clone(),
                    g.email.clone(),
                    g.phone.clone(),
                    g.state.clone(),
                ]
            }),
        )
    }
}

impl GuestDirectory for CsvGuestDirectory {
    fn find_all(&self) -> Result<Vec<Guest>> {
        Ok(parse_rows(&self.path, GUEST_HEADER.len(), parse_guest))
    }
}

/// Host directory backed by `hosts.csv`.
#[derive(Debug, Clone)]
pub struct CsvHostDirectory {
    path: PathBuf,
}

impl CsvHostDirectory {
    /// Creates a directory reading from `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this directory reads.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replaces the file with `hosts`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StorageWrite`] if the file cannot be replaced.
    pub fn write_all(&self, hosts: &[Host]) -> Result<()> {
        write_rows(
            &self.path,
            &HOST_HEADER,
            hosts.iter().map(|h| {
                vec![
                    h.id.to_string(),
                    h.last_name.clone(),
                    h.email.clone(),
                    h.phone.clone(),
                    h.address.clone(),
                    h.city.clone(),
                    h.state.clone(),
                    h.postal_code.clone(),
                    h.standard_rate.to_string(),
                    h.weekend_rate.to_string(),
                ]
            }),
        )
    }
}

impl HostDirectory for CsvHostDirectory {
    fn find_all(&self) -> Result<Vec<Host>> {
        Ok(parse_rows(&self.path, HOST_HEADER.len(), parse_host))
    }
}

/// Reservation store keeping one file per host.
///
/// Every write rewrites the whole host file. There is no locking; a single
/// writer is assumed.
#[derive(Debug, Clone)]
pub struct CsvReservationStore {
    directory: PathBuf,
}

impl CsvReservationStore {
    /// Creates a store rooted at `directory`.
    #[must_use]
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// The file holding one host's reservations.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidHostId`] if the id is empty, is `.` or `..`,
    /// or contains a path separator or NUL.
    pub fn file_path(&self, host_id: &HostId) -> Result<PathBuf> {
        let id = host_id.as_str();
        if id.is_empty()
            || id == "."
            || id == ".."
            || id.contains(['/', '\\', '\0'])
        {
            return Err(Error::InvalidHostId { id: id.to_string() });
        }
        Ok(self.directory.join(format!("{id}.csv")))
    }

    /// Ids of every host with a reservation file.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory exists but cannot be listed.
    pub fn host_ids(&self) -> Result<Vec<HostId>> {
        if !self.directory.exists() {
            return Ok(Vec::new());
        }
        let mut ids = Vec::new();
        for entry in fs::read_dir(&self.directory)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "csv") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    ids.push(HostId::new(stem));
                }
            }
        }
        ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        Ok(ids)
    }

    fn write_all(&self, host_id: &HostId, records: &[ReservationRecord]) -> Result<()> {
        write_rows(
            &self.file_path(host_id)?,
            &RESERVATION_HEADER,
            records.iter().map(|r| {
                vec![
                    r.id.to_string(),
                    r.start.to_string(),
                    r.end.to_string(),
                    r.guest_id.to_string(),
                    r.total.to_string(),
                ]
            }),
        )
    }
}

impl ReservationStore for CsvReservationStore {
    fn find_by_host_id(&self, host_id: &HostId) -> Result<Vec<ReservationRecord>> {
        Ok(parse_rows(
            &self.file_path(host_id)?,
            RESERVATION_HEADER.len(),
            reservation_parser(host_id),
        ))
    }

    fn add(&self, mut record: ReservationRecord) -> Result<ReservationRecord> {
        let mut all = self.find_by_host_id(&record.host_id)?;
        record.id = next_reservation_id(&all);
        all.push(record.clone());
        self.write_all(&record.host_id, &all)?;
        Ok(record)
    }

    fn update(&self, record: &ReservationRecord) -> Result<bool> {
        let mut all = self.find_by_host_id(&record.host_id)?;
        let Some(slot) = all.iter_mut().find(|r| r.id == record.id) else {
            return Ok(false);
        };
        *slot = record.clone();
        self.write_all(&record.host_id, &all)?;
        Ok(true)
    }

    fn delete_by_id(&self, id: ReservationId, host_id: &HostId) -> Result<bool> {
        let mut all = self.find_by_host_id(host_id)?;
        let before = all.len();
        all.retain(|r| r.id != id);
        if all.len() == before {
            return Ok(false);
        }
        self.write_all(host_id, &all)?;
        Ok(true)
    }
}
