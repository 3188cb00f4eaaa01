//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CancelCommand, CompletionsCommand, EditCommand, ImportCommand, ListCommand, QuoteCommand,
    ReserveCommand,
};
use crate::utils::{parse_date, GlobalOptions};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for booking property-rental reservations.
#[derive(Parser)]
#[command(name = "myhouse")]
#[command(version, about = "Book and manage property-rental reservations", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "MYHOUSE_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the database busy timeout (in seconds)
    #[arg(long, value_name = "SECONDS", global = true, env = "MYHOUSE_BUSY_TIMEOUT")]
    pub busy_timeout: Option<u64>,

    /// Treat this date as today
    #[arg(long, value_name = "DATE", global = true, hide = true, env = "MYHOUSE_TODAY", value_parser = parse_date)]
    pub today: Option<NaiveDate>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// The options every command receives.
    pub fn global_options(&self) -> GlobalOptions {
        GlobalOptions {
            verbose: self.verbose,
            quiet: self.quiet,
            data_dir: self.data_dir.clone(),
            busy_timeout: self.busy_timeout,
            today: self.today,
        }
    }
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// List a host's reservations
    List(ListCommand),

    /// Make a reservation
    Reserve(ReserveCommand),

    /// Change the dates of a future reservation
    Edit(EditCommand),

    /// Cancel a future reservation
    Cancel(CancelCommand),

    /// Price a stay without booking it
    Quote(QuoteCommand),

    /// Copy the CSV data set into SQLite
    Import(ImportCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
