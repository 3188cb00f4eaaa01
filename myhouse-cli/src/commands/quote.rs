//! Quote command implementation.

use chrono::NaiveDate;
use clap::Args;

use myhouse::booking::quote;

use crate::error::CliError;
use crate::utils::{display_money, parse_date, GlobalOptions, Session};

/// Price a stay without booking it.
#[derive(Args)]
pub struct QuoteCommand {
    /// Email of the host
    #[arg(long, value_name = "EMAIL")]
    pub host_email: String,

    /// First night (YYYY-MM-DD or MM/DD/YYYY)
    #[arg(long, value_name = "DATE", value_parser = parse_date)]
    pub start: NaiveDate,

    /// Checkout day (YYYY-MM-DD or MM/DD/YYYY)
    #[arg(long, value_name = "DATE", value_parser = parse_date)]
    pub end: NaiveDate,
}

impl QuoteCommand {
    /// Execute the quote command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if self.start >= self.end {
            return Err(CliError::InvalidArguments(
                "start date must be before end date".to_string(),
            ));
        }

        let session = Session::open(global)?;
        let host = session.host_by_email(&self.host_email)?;
        let nights = quote(self.start, self.end, &host);

        if !global.quiet {
            eprintln!("{}", host.heading());
        }
        println!("Weekday nights: {}", nights.weekday_nights);
        println!("Weekend nights: {}", nights.weekend_nights);
        println!("Total: {}", display_money(nights.total));

        Ok(())
    }
}
