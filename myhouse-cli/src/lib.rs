//! Library exports for myhouse-cli.
//!
//! Exposes the CLI structure so the binary and tests share one definition.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
