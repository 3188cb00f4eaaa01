//! Reserve command implementation.
//!
//! Prices a stay for a guest at a host, shows the summary, and books it.

use chrono::NaiveDate;
use clap::Args;

use myhouse::booking::ValidationMode;
use myhouse::ReservationRequest;

use crate::error::CliError;
use crate::utils::{parse_date, print_summary, require_success, GlobalOptions, Session};

/// Make a reservation.
#[derive(Args)]
pub struct ReserveCommand {
    /// Email of the guest staying
    #[arg(long, value_name = "EMAIL")]
    pub guest_email: String,

    /// Email of the host renting
    #[arg(long, value_name = "EMAIL")]
    pub host_email: String,

    /// First night (YYYY-MM-DD or MM/DD/YYYY)
    #[arg(long, value_name = "DATE", value_parser = parse_date)]
    pub start: NaiveDate,

    /// Checkout day (YYYY-MM-DD or MM/DD/YYYY)
    #[arg(long, value_name = "DATE", value_parser = parse_date)]
    pub end: NaiveDate,

    /// Validate and price without saving
    #[arg(long)]
    pub dry_run: bool,
}

impl ReserveCommand {
    /// Execute the reserve command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let session = Session::open(global)?;
        let guest = session.guest_by_email(&self.guest_email)?;
        let host = session.host_by_email(&self.host_email)?;

        let request = ReservationRequest::new()
            .with_guest(guest)
            .with_host(host)
            .with_dates(self.start, self.end)
            .priced();

        if self.dry_run {
            let candidate = require_success(
                session
                    .service
                    .validate(Some(&request), ValidationMode::Create)?,
            )?;
            print_summary(global, candidate.start, candidate.end, candidate.total);
            if !global.quiet {
                eprintln!("Dry run: nothing saved.");
            }
            return Ok(());
        }

        let reservation = require_success(session.service.add(&request)?)?;
        print_summary(global, reservation.start, reservation.end, reservation.total);
        if !global.quiet {
            eprintln!("Reservation {} created.", reservation.id);
        }
        println!("{}", reservation.id);

        Ok(())
    }
}
