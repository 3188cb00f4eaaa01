//! Utility functions for CLI operations.
//!
//! Configuration loading, opening the storage backend, email lookups, and
//! date and money formatting shared by the commands.

use std::path::{Path, PathBuf};
use std::rc::Rc;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use myhouse::booking::ReservationService;
use myhouse::outcome::Outcome;
use myhouse::storage::{GuestDirectory, HostDirectory, StorageBackend};
use myhouse::{Config, ConfigBuilder, Guest, Host, Reservation};

use crate::error::CliError;

/// Date format used for human-readable output.
pub const DISPLAY_DATE_FORMAT: &str = "%m/%d/%Y";

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the database busy timeout (in seconds).
    pub busy_timeout: Option<u64>,

    /// Pin the calendar date used by the booking rules.
    pub today: Option<NaiveDate>,
}

/// Parses `YYYY-MM-DD` or `MM/DD/YYYY`.
///
/// Used as a clap value parser.
pub fn parse_date(value: &str) -> Result<NaiveDate, String> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(value, DISPLAY_DATE_FORMAT))
        .map_err(|_| format!("invalid date '{value}' (expected YYYY-MM-DD or MM/DD/YYYY)"))
}

/// Formats a date as `MM/DD/YYYY`.
pub fn display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

/// Formats an amount as dollars with two decimals.
pub fn display_money(amount: Decimal) -> String {
    format!("${amount:.2}")
}

/// Shorten a path for display.
///
/// If the path is within the home directory, show it as ~/...
pub fn shorten_path(path: &Path) -> String {
    if let Some(home) = home::home_dir() {
        if let Ok(relative) = path.strip_prefix(&home) {
            return format!("~/{}", relative.display());
        }
    }
    path.display().to_string()
}

/// Resolve the data directory: `--data-dir`, else `~/.myhouse`.
pub fn resolve_data_dir(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    match &global.data_dir {
        Some(dir) => Ok(dir.clone()),
        None => myhouse::database::default_data_dir().map_err(CliError::from),
    }
}

/// Load hierarchical configuration.
///
/// Precedence, highest first: global options, environment variables,
/// project `myhouse.yaml`, the data directory's `config.yaml`, defaults.
pub fn load_configuration(global: &GlobalOptions, data_dir: &Path) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new().with_data_dir(data_dir);

    if let Some(seconds) = global.busy_timeout {
        builder = builder.with_config(Config {
            maximum_lock_wait_seconds: Some(seconds),
            ..Config::default()
        });
    }

    builder.build().map_err(CliError::from)
}

/// Everything a booking command needs.
pub struct Session {
    /// Effective configuration.
    pub config: Config,
    /// Booking operations.
    pub service: ReservationService,
    hosts: Rc<dyn HostDirectory>,
    guests: Rc<dyn GuestDirectory>,
}

impl Session {
    /// Loads configuration and opens the configured backend.
    pub fn open(global: &GlobalOptions) -> Result<Self, CliError> {
        let data_dir = resolve_data_dir(global)?;
        let config = load_configuration(global, &data_dir)?;
        let backend = StorageBackend::open(&config, &data_dir)?;
        log::debug!("Opened {} storage in {}", backend.kind(), data_dir.display());

        let hosts = backend.hosts();
        let guests = backend.guests();
        let mut service = backend.into_service();
        if let Some(today) = global.today {
            service = service.with_today(today);
        }

        Ok(Self {
            config,
            service,
            hosts,
            guests,
        })
    }

    /// Looks up a host by exact email.
    pub fn host_by_email(&self, email: &str) -> Result<Host, CliError> {
        self.hosts
            .find_by_email(email)?
            .ok_or_else(|| CliError::SemanticFailure("host does not exist".to_string()))
    }

    /// Looks up a guest by exact email.
    pub fn guest_by_email(&self, email: &str) -> Result<Guest, CliError> {
        self.guests
            .find_by_email(email)?
            .ok_or_else(|| CliError::SemanticFailure("guest does not exist".to_string()))
    }

    /// One of the guest's reservations at the host, optionally only future ones.
    pub fn guest_reservation(
        &self,
        host: &Host,
        guest: &Guest,
        id: u32,
        future_only: bool,
    ) -> Result<Reservation, CliError> {
        let today = self.service.today();
        self.service
            .find_by_host_id(&host.id)?
            .into_iter()
            .filter(|r| r.guest_id == guest.id)
            .filter(|r| !future_only || r.start > today)
            .find(|r| r.id == id)
            .ok_or_else(|| {
                CliError::SemanticFailure(myhouse::outcome::messages::NOT_FOUND.to_string())
            })
    }
}

/// Turns a failed outcome into [`CliError::Rejected`].
pub fn require_success<T>(outcome: Outcome<T>) -> Result<T, CliError> {
    if !outcome.is_success() {
        return Err(CliError::Rejected(outcome.messages().to_vec()));
    }
    outcome
        .into_payload()
        .ok_or_else(|| CliError::Rejected(Vec::new()))
}

/// Writes the start, end and total of a stay to stderr.
pub fn print_summary(global: &GlobalOptions, start: NaiveDate, end: NaiveDate, total: Decimal) {
    if global.quiet {
        return;
    }
    eprintln!("Summary");
    eprintln!("Start: {}", display_date(start));
    eprintln!("End: {}", display_date(end));
    eprintln!("Total: {}", display_money(total));
}
