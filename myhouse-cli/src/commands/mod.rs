//! CLI command implementations.
//!
//! - `list`: Show a host's reservations
//! - `reserve`: Make a reservation
//! - `edit`: Change a future reservation's dates
//! - `cancel`: Cancel a future reservation
//! - `quote`: Price a stay
//! - `import`: Copy the CSV data set into SQLite
//! - `completions`: Generate shell completions

pub mod cancel;
pub mod completions;
pub mod edit;
pub mod import;
pub mod list;
pub mod quote;
pub mod reserve;

pub use cancel::CancelCommand;
pub use completions::CompletionsCommand;
pub use edit::EditCommand;
pub use import::ImportCommand;
pub use list::ListCommand;
pub use quote::QuoteCommand;
pub use reserve::ReserveCommand;
