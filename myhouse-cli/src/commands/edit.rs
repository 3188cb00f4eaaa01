//! Edit command implementation.
//!
//! Moves or resizes one of a guest's future reservations at a host and
//! reprices it.

use chrono::NaiveDate;
use clap::Args;

use myhouse::booking::ValidationMode;
use myhouse::ReservationRequest;

use crate::error::CliError;
use crate::utils::{parse_date, print_summary, require_success, GlobalOptions, Session};

/// Change the dates of a future reservation.
#[derive(Args)]
pub struct EditCommand {
    /// Email of the guest who made the reservation
    #[arg(long, value_name = "EMAIL")]
    pub guest_email: String,

    /// Email of the host
    #[arg(long, value_name = "EMAIL")]
    pub host_email: String,

    /// Reservation id at that host
    #[arg(long, value_name = "ID")]
    pub id: u32,

    /// New first night (defaults to the current one)
    #[arg(long, value_name = "DATE", value_parser = parse_date)]
    pub start: Option<NaiveDate>,

    /// New checkout day (defaults to the current one)
    #[arg(long, value_name = "DATE", value_parser = parse_date)]
    pub end: Option<NaiveDate>,

    /// Validate and price without saving
    #[arg(long)]
    pub dry_run: bool,
}

impl EditCommand {
    /// Execute the edit command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if self.start.is_none() && self.end.is_none() {
            return Err(CliError::InvalidArguments(
                "nothing to change: give --start and/or --end".to_string(),
            ));
        }

        let session = Session::open(global)?;
        let guest = session.guest_by_email(&self.guest_email)?;
        let host = session.host_by_email(&self.host_email)?;
        let existing = session.guest_reservation(&host, &guest, self.id, true)?;

        let request = ReservationRequest::from_reservation(&existing)
            .with_dates(
                self.start.unwrap_or(existing.start),
                self.end.unwrap_or(existing.end),
            )
            .priced();

        let reservation = if self.dry_run {
            require_success(
                session
                    .service
                    .validate(Some(&request), ValidationMode::Update)?,
            )?
        } else {
            require_success(session.service.update(&request)?)?
        };

        print_summary(global, reservation.start, reservation.end, reservation.total);
        if !global.quiet {
            if self.dry_run {
                eprintln!("Dry run: nothing saved.");
            } else {
                eprintln!("Reservation {} updated.", reservation.id);
            }
        }
        if !self.dry_run {
            println!("{}", reservation.id);
        }

        Ok(())
    }
}
