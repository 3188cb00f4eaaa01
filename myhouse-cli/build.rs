//! Build script for myhouse-cli.
//!
//! Generates the man page at build time using clap_mangen. The page is
//! placed in OUT_DIR for inclusion in release builds.
//!
//! Build scripts cannot depend on the crate being built, so the command
//! tree is described again here.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep this synchronized with src/cli.rs.
fn build_cli() -> Command {
    Command::new("myhouse")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Book and manage property-rental reservations")
        .long_about(
            "Command-line tool for viewing, making, editing and cancelling reservations \
             against hosts' nightly and weekend rates",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the data directory location")
                .value_name("PATH")
                .global(true)
                .env("MYHOUSE_DATA_DIR"),
        )
        .arg(
            Arg::new("busy-timeout")
                .long("busy-timeout")
                .help("Override the database busy timeout (in seconds)")
                .value_name("SECONDS")
                .global(true)
                .env("MYHOUSE_BUSY_TIMEOUT"),
        )
        .subcommands(vec![
            Command::new("list")
                .about("List a host's reservations")
                .long_about("Show a host's reservations sorted by start date"),
            Command::new("reserve")
                .about("Make a reservation")
                .long_about("Price, validate and book a stay for a guest at a host"),
            Command::new("edit")
                .about("Change the dates of a future reservation")
                .long_about("Move or resize one of a guest's future reservations at a host"),
            Command::new("cancel")
                .about("Cancel a future reservation")
                .long_about("Delete one of a guest's reservations that has not yet started"),
            Command::new("quote")
                .about("Price a stay without booking it")
                .long_about("Count weekday and weekend nights and total them at a host's rates"),
            Command::new("import")
                .about("Copy the CSV data set into SQLite")
                .long_about("Load guests, hosts and reservations from the CSV files into the database"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("myhouse.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
