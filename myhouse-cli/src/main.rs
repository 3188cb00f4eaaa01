//! Main entry point for the myhouse CLI.
//!
//! Commands mirror the booking workflow:
//! - `list`: View a host's reservations
//! - `reserve`: Make a reservation
//! - `edit`: Change a future reservation's dates
//! - `cancel`: Cancel a future reservation

use clap::Parser;
use myhouse_cli::cli::{Cli, Command};
use myhouse_cli::error::CliError;

fn main() {
    let cli = Cli::parse();

    // Route library log output through the same logger
    let logger = myhouse::init_logger(cli.verbose, cli.quiet);
    logger.install();

    let global = cli.global_options();

    let result = match cli.command {
        Command::List(cmd) => cmd.execute(&global),
        Command::Reserve(cmd) => cmd.execute(&global),
        Command::Edit(cmd) => cmd.execute(&global),
        Command::Cancel(cmd) => cmd.execute(&global),
        Command::Quote(cmd) => cmd.execute(&global),
        Command::Import(cmd) => cmd.execute(&global),
        Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            if let CliError::Rejected(_) = e {
                eprintln!("{e}");
            } else {
                eprintln!("Error: {e}");
            }
            std::process::exit(e.exit_code());
        }
    }
}
