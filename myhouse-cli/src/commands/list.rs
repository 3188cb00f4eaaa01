//! List command implementation.
//!
//! Displays a host's reservations in various formats (table, JSON, CSV,
//! TSV), sorted by start date.

use std::io::Write;

use clap::Args;
use serde::Serialize;

use myhouse::booking::ReservationService;
use myhouse::config::ListFormat;
use myhouse::Reservation;

use crate::error::CliError;
use crate::utils::{display_date, display_money, GlobalOptions, Session};

/// Column headers for CSV/TSV output.
const COLUMN_HEADERS: [&str; 6] = ["id", "start_date", "end_date", "guest", "email", "total"];

/// List a host's reservations.
#[derive(Args)]
pub struct ListCommand {
    /// Email of the host whose calendar to show
    #[arg(long, value_name = "EMAIL")]
    pub host_email: String,

    /// Only show this guest's reservations
    #[arg(long, value_name = "EMAIL")]
    pub guest_email: Option<String>,

    /// Hide reservations that have already started
    #[arg(long)]
    pub future_only: bool,

    /// Output format (defaults to the configured format)
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<ListFormat>,
}

/// One output row.
#[derive(Serialize)]
struct ReservationRow {
    id: u32,
    start_date: String,
    end_date: String,
    guest: String,
    email: String,
    total: String,
}

impl ReservationRow {
    fn from_reservation(r: &Reservation) -> Self {
        Self {
            id: r.id,
            start_date: r.start.to_string(),
            end_date: r.end.to_string(),
            guest: r.guest.as_ref().map(|g| g.full_name()).unwrap_or_default(),
            email: r.guest.as_ref().map(|g| g.email.clone()).unwrap_or_default(),
            total: r.total.to_string(),
        }
    }

    fn fields(&self) -> [String; 6] {
        [
            self.id.to_string(),
            self.start_date.clone(),
            self.end_date.clone(),
            self.guest.clone(),
            self.email.clone(),
            self.total.clone(),
        ]
    }
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let session = Session::open(global)?;
        let host = session.host_by_email(&self.host_email)?;
        let guest_id = match &self.guest_email {
            Some(email) => Some(session.guest_by_email(email)?.id),
            None => None,
        };

        let today = session.service.today();
        let mut reservations = session.service.find_by_host_id(&host.id)?;
        if let Some(guest_id) = guest_id {
            reservations.retain(|r| r.guest_id == guest_id);
        }
        if self.future_only {
            reservations.retain(|r| r.start > today);
        }
        let reservations = ReservationService::sort_by_date(reservations);

        if !global.quiet {
            eprintln!("{}", host.heading());
        }

        let format = self
            .format
            .unwrap_or_else(|| session.config.list_format());
        match format {
            ListFormat::Table => format_as_table(&reservations, global)?,
            ListFormat::Json => format_as_json(&reservations)?,
            ListFormat::Csv => format_as_delimited(&reservations, b',')?,
            ListFormat::Tsv => format_as_delimited(&reservations, b'\t')?,
        }

        Ok(())
    }
}

/// Format reservations as a human-readable table.
fn format_as_table(reservations: &[Reservation], global: &GlobalOptions) -> Result<(), CliError> {
    if reservations.is_empty() {
        if !global.quiet {
            eprintln!("No reservations found.");
        }
        return Ok(());
    }

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let header_line = COLUMN_HEADERS
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(handle, "{header_line}")?;

    for res in reservations {
        let (name, email) = res
            .guest
            .as_ref()
            .map_or(("-".to_string(), "-".to_string()), |g| {
                (g.full_name(), g.email.clone())
            });
        writeln!(
            handle,
            "{}\t{}\t{}\t{}\t{}\t{}",
            res.id,
            display_date(res.start),
            display_date(res.end),
            name,
            email,
            display_money(res.total),
        )?;
    }

    Ok(())
}

/// Format reservations as JSON.
fn format_as_json(reservations: &[Reservation]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let rows: Vec<ReservationRow> = reservations
        .iter()
        .map(ReservationRow::from_reservation)
        .collect();

    serde_json::to_writer_pretty(&mut handle, &rows)
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    writeln!(handle)?;

    Ok(())
}

/// Convert csv::Error to CliError.
fn csv_error(e: csv::Error) -> CliError {
    CliError::Io(std::io::Error::other(e))
}

/// Format reservations as delimited output (CSV or TSV).
fn format_as_delimited(reservations: &[Reservation], delimiter: u8) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let handle = stdout.lock();
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(handle);

    writer.write_record(COLUMN_HEADERS).map_err(csv_error)?;
    for res in reservations {
        writer
            .write_record(ReservationRow::from_reservation(res).fields())
            .map_err(csv_error)?;
    }
    writer.flush()?;

    Ok(())
}
