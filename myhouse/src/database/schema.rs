//! Database schema definitions and SQL constants.

/// Current schema version for the database.
///
/// Stored in the metadata table and checked on every open.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// SQL statement to create the metadata table.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// SQL statement to create the guest directory table.
pub const CREATE_GUESTS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS guests (
        guest_id INTEGER PRIMARY KEY NOT NULL,
        first_name TEXT NOT NULL,
        last_name TEXT NOT NULL,
        email TEXT NOT NULL UNIQUE,
        phone TEXT NOT NULL,
        state TEXT NOT NULL
    )";

/// SQL statement to create the host directory table.
///
/// Rates are stored as decimal text so no precision is lost.
pub const CREATE_HOSTS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS hosts (
        host_id TEXT PRIMARY KEY NOT NULL,
        last_name TEXT NOT NULL,
        email TEXT NOT NULL UNIQUE,
        phone TEXT NOT NULL,
        address TEXT NOT NULL,
        city TEXT NOT NULL,
        state TEXT NOT NULL,
        postal_code TEXT NOT NULL,
        standard_rate TEXT NOT NULL,
        weekend_rate TEXT NOT NULL
    )";

/// SQL statement to create the reservations table.
///
/// Reservation ids are scoped to a host, so the key is the pair.
/// Dates are ISO-8601 text.
pub const CREATE_RESERVATIONS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS reservations (
        host_id TEXT NOT NULL,
        reservation_id INTEGER NOT NULL,
        guest_id INTEGER NOT NULL,
        start_date TEXT NOT NULL,
        end_date TEXT NOT NULL,
        total TEXT NOT NULL,
        PRIMARY KEY (host_id, reservation_id)
    )";

/// SQL statement to create an index on the guest column.
pub const CREATE_GUEST_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_reservations_guest ON reservations(guest_id)";

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version in the metadata table.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";

/// SQL statement to insert a guest or update the row with the same id.
///
/// A clash on `email` with a different id is a constraint error.
pub const INSERT_GUEST: &str = r"
    INSERT INTO guests
    (guest_id, first_name, last_name, email, phone, state)
    VALUES (?, ?, ?, ?, ?, ?)
    ON CONFLICT(guest_id) DO UPDATE SET
        first_name = excluded.first_name,
        last_name = excluded.last_name,
        email = excluded.email,
        phone = excluded.phone,
        state = excluded.state
";

/// SQL statement to insert a host or update the row with the same id.
///
/// A clash on `email` with a different id is a constraint error.
pub const INSERT_HOST: &str = r"
    INSERT INTO hosts
    (host_id, last_name, email, phone, address, city, state, postal_code, standard_rate, weekend_rate)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
    ON CONFLICT(host_id) DO UPDATE SET
        last_name = excluded.last_name,
        email = excluded.email,
        phone = excluded.phone,
        address = excluded.address,
        city = excluded.city,
        state = excluded.state,
        postal_code = excluded.postal_code,
        standard_rate = excluded.standard_rate,
        weekend_rate = excluded.weekend_rate
";

/// SQL statement to insert or replace a reservation.
pub const INSERT_RESERVATION: &str = r"
    INSERT OR REPLACE INTO reservations
    (host_id, reservation_id, guest_id, start_date, end_date, total)
    VALUES (?, ?, ?, ?, ?, ?)
";
