//! Cancel command implementation.

use clap::Args;

use crate::error::CliError;
use crate::utils::{require_success, GlobalOptions, Session};

/// Cancel a future reservation.
#[derive(Args)]
pub struct CancelCommand {
    /// Email of the guest who made the reservation
    #[arg(long, value_name = "EMAIL")]
    pub guest_email: String,

    /// Email of the host
    #[arg(long, value_name = "EMAIL")]
    pub host_email: String,

    /// Reservation id at that host
    #[arg(long, value_name = "ID")]
    pub id: u32,
}

impl CancelCommand {
    /// Execute the cancel command.
    ///
    /// Ownership is checked here; the past-date rule is left to the
    /// service so its message reaches the user.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let session = Session::open(global)?;
        let guest = session.guest_by_email(&self.guest_email)?;
        let host = session.host_by_email(&self.host_email)?;
        let existing = session.guest_reservation(&host, &guest, self.id, false)?;

        let removed = require_success(session.service.delete_by_id(existing.id, &host.id)?)?;
        if !global.quiet {
            eprintln!("Reservation {} cancelled.", removed.id);
        }
        println!("{}", removed.id);

        Ok(())
    }
}
