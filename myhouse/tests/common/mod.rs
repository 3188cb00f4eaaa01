//! Common test utilities for integration tests.
//!
//! Fixtures write a small, realistic data set in the delimited-file layout:
//! two hosts, three guests and a handful of reservations in October 2099.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use myhouse::booking::ReservationService;
use myhouse::storage::StorageBackend;
use myhouse::{Config, Guest, Host};

/// Host with a Thursday-start booking, used by most tests.
pub const HOST_ID: &str = "3edda6bc-ab95-49a8-8962-d50b53f84b15";
/// Host with no reservations file.
pub const EMPTY_HOST_ID: &str = "a0d911e7-4fde-4e4a-bdb7-f047f15615e8";

/// The pinned calendar date for every service in these tests.
#[allow(dead_code)]
pub fn today() -> NaiveDate {
    date(2099, 1, 1)
}

/// Shorthand for a known-valid date.
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// The host stored under [`HOST_ID`]: rates 10 and 15.
#[allow(dead_code)]
pub fn host() -> Host {
    Host::new(HOST_ID, "Yearnes", "eyearnes0@sfgate.com")
        .with_phone("(806) 1783815")
        .with_address("3 Nova Trail", "Amarillo", "TX", "79182")
        .with_rates(Decimal::from(10), Decimal::from(15))
}

/// The host stored under [`EMPTY_HOST_ID`].
#[allow(dead_code)]
pub fn empty_host() -> Host {
    Host::new(EMPTY_HOST_ID, "Rhodes", "krhodes1@posterous.com")
        .with_phone("(478) 7475991")
        .with_address("7262 Morning Avenue", "Macon", "GA", "31296")
        .with_rates(Decimal::new(29500, 2), Decimal::new(36875, 2))
}

/// Guest 1, the owner of the fixture reservations.
#[allow(dead_code)]
pub fn guest() -> Guest {
    Guest::new(1, "Sullivan", "Lomas", "slomas0@mediafire.com")
        .with_phone("(702) 7768761")
        .with_state("NV")
}

/// Guest 2, with no reservations.
#[allow(dead_code)]
pub fn other_guest() -> Guest {
    Guest::new(2, "Olympie", "Gecks", "ogecks1@dagondesign.com")
        .with_phone("(202) 2528316")
        .with_state("DC")
}

/// Writes the fixture data set into `dir`.
pub fn write_fixture_data(dir: &Path) {
    fs::write(
        dir.join("guests.csv"),
        "guest_id,first_name,last_name,email,phone,state\n\
         1,Sullivan,Lomas,slomas0@mediafire.com,(702) 7768761,NV\n\
         2,Olympie,Gecks,ogecks1@dagondesign.com,(202) 2528316,DC\n\
         3,Tremain,Carncross,tcarncross2@japanpost.jp,(313) 2245034,MI\n",
    )
    .unwrap();

    fs::write(
        dir.join("hosts.csv"),
        format!(
            "id,last_name,email,phone,address,city,state,postal_code,standard_rate,weekend_rate\n\
             {HOST_ID},Yearnes,eyearnes0@sfgate.com,(806) 1783815,3 Nova Trail,Amarillo,TX,79182,10,15\n\
             {EMPTY_HOST_ID},Rhodes,krhodes1@posterous.com,(478) 7475991,7262 Morning Avenue,Macon,GA,31296,295.00,368.75\n"
        ),
    )
    .unwrap();

    let reservations = dir.join("reservations");
    fs::create_dir_all(&reservations).unwrap();
    fs::write(
        reservations.join(format!("{HOST_ID}.csv")),
        "id,start_date,end_date,guest_id,total\n\
         1,2099-10-01,2099-10-05,1,50\n\
         2,2099-10-12,2099-10-14,3,20\n",
    )
    .unwrap();
}

/// Creates a temporary data directory holding the fixture data set.
#[allow(dead_code)]
pub fn fixture_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_fixture_data(dir.path());
    dir
}

/// A service over the CSV files in `dir`, pinned to [`today`].
#[allow(dead_code)]
pub fn csv_service(dir: &Path) -> ReservationService {
    StorageBackend::csv(&Config::with_defaults(), dir)
        .into_service()
        .with_today(today())
}

/// A service over a shared backend, pinned to [`today`].
#[allow(dead_code)]
pub fn service_for(backend: &StorageBackend) -> ReservationService {
    ReservationService::new(backend.reservations(), backend.hosts(), backend.guests())
        .with_today(today())
}
