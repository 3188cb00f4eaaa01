//! The `SQLite` backend, seeded from the CSV fixture data.

mod common;

use std::rc::Rc;

use rust_decimal::Decimal;
use tempfile::TempDir;

use common::{date, fixture_dir, host, other_guest, service_for, HOST_ID};
use myhouse::config::{Config, StorageConfig, StorageKind};
use myhouse::database::{Database, DatabaseConfig};
use myhouse::outcome::messages;
use myhouse::storage::{
    CsvGuestDirectory, CsvHostDirectory, CsvReservationStore, GuestDirectory, HostDirectory,
    ReservationStore, StorageBackend,
};
use myhouse::{HostId, ReservationRequest};

fn sqlite_config() -> Config {
    Config {
        storage: Some(StorageConfig {
            backend: Some(StorageKind::Sqlite),
            ..StorageConfig::default()
        }),
        ..Config::with_defaults()
    }
}

/// Opens a database in the fixture directory and copies the CSV data in.
fn seeded_database(dir: &TempDir) -> Database {
    let config = Config::with_defaults();
    let mut db = Database::open(DatabaseConfig::new(config.database_path(dir.path()))).unwrap();

    let guests = CsvGuestDirectory::new(config.guests_path(dir.path()))
        .find_all()
        .unwrap();
    let hosts = CsvHostDirectory::new(config.hosts_path(dir.path()))
        .find_all()
        .unwrap();
    let store = CsvReservationStore::new(config.reservations_path(dir.path()));
    let mut records = Vec::new();
    for host_id in store.host_ids().unwrap() {
        records.extend(store.find_by_host_id(&host_id).unwrap());
    }

    assert_eq!(db.import_guests(&guests).unwrap(), 3);
    assert_eq!(db.import_hosts(&hosts).unwrap(), 2);
    assert_eq!(db.import_reservations(&records).unwrap(), 2);
    db
}

#[test]
fn test_imported_data_matches_csv() {
    let dir = fixture_dir();
    let db = seeded_database(&dir);

    let host_id = HostId::new(HOST_ID);
    let from_db = db.find_by_host_id(&host_id).unwrap();
    let from_csv = CsvReservationStore::new(dir.path().join("reservations"))
        .find_by_host_id(&host_id)
        .unwrap();
    assert_eq!(from_db, from_csv);

    let rhodes = HostDirectory::find_by_email(&db, "krhodes1@posterous.com")
        .unwrap()
        .unwrap();
    assert_eq!(rhodes.weekend_rate, Decimal::new(36875, 2));
}

#[test]
fn test_service_workflow_over_sqlite() {
    let dir = fixture_dir();
    let backend = StorageBackend::from_database(Rc::new(seeded_database(&dir)));
    let service = service_for(&backend);
    let host_id = HostId::new(HOST_ID);

    let request = ReservationRequest::new()
        .with_guest(other_guest())
        .with_host(host())
        .with_dates(date(2099, 10, 6), date(2099, 10, 9))
        .priced();
    let added = service.add(&request).unwrap();
    assert!(added.is_success(), "{:?}", added.messages());
    assert_eq!(added.payload().unwrap().id, 3);

    let clash = service.add(&request).unwrap();
    assert_eq!(clash.messages(), [messages::OVERLAP]);

    let deleted = service.delete_by_id(3, &host_id).unwrap();
    assert!(deleted.is_success());
    assert_eq!(service.find_by_host_id(&host_id).unwrap().len(), 2);
}

#[test]
fn test_backend_reopens_existing_database() {
    let dir = fixture_dir();
    drop(seeded_database(&dir));

    let backend = StorageBackend::open(&sqlite_config(), dir.path()).unwrap();
    assert_eq!(backend.kind(), StorageKind::Sqlite);
    assert_eq!(backend.guests().find_all().unwrap().len(), 3);

    let reservations = service_for(&backend)
        .find_by_host_id(&HostId::new(HOST_ID))
        .unwrap();
    assert_eq!(reservations.len(), 2);
    assert!(reservations.iter().all(|r| r.host.is_some() && r.guest.is_some()));
}
