#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # myhouse
//!
//! A library for booking and validating property-rental reservations.
//!
//! Hosts rent out a property at a standard nightly rate and a higher weekend
//! rate. Guests book date ranges. The engine checks each request against the
//! host's existing bookings, prices the stay, and persists it through a
//! pluggable store.
//!
//! ## Core Types
//!
//! - [`Host`], [`Guest`], [`Reservation`]: the domain records
//! - [`ReservationRequest`]: input to validation, creation and edits
//! - [`Outcome`]: the business-rule result carrying ordered messages
//! - [`booking::ReservationService`]: the operations
//! - [`Error`] and [`Result`]: fatal storage and configuration faults
//!
//! ## Examples
//!
//! ```
//! use std::rc::Rc;
//! use chrono::NaiveDate;
//! use rust_decimal::Decimal;
//! use myhouse::booking::ReservationService;
//! use myhouse::storage::memory::{
//!     MemoryGuestDirectory, MemoryHostDirectory, MemoryReservationStore,
//! };
//! use myhouse::{Guest, Host, ReservationRequest};
//!
//! let host = Host::new("h-1", "Hazard", "eden@example.com")
//!     .with_rates(Decimal::from(10), Decimal::from(15));
//! let guest = Guest::new(1, "Romari", "Bartley", "romari@example.com");
//!
//! let service = ReservationService::new(
//!     Rc::new(MemoryReservationStore::new()),
//!     Rc::new(MemoryHostDirectory::new(vec![host.clone()])),
//!     Rc::new(MemoryGuestDirectory::new(vec![guest.clone()])),
//! )
//! .with_today(NaiveDate::from_ymd_opt(2099, 1, 1).unwrap());
//!
//! let request = ReservationRequest::new()
//!     .with_host(host)
//!     .with_guest(guest)
//!     .with_dates(
//!         NaiveDate::from_ymd_opt(2099, 10, 6).unwrap(),
//!         NaiveDate::from_ymd_opt(2099, 10, 9).unwrap(),
//!     )
//!     .priced();
//!
//! let outcome = service.add(&request).unwrap();
//! assert!(outcome.is_success());
//! assert_eq!(outcome.payload().unwrap().total, Decimal::from(30));
//! ```

pub mod booking;
pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod model;
pub mod outcome;
pub mod storage;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use database::{Database, DatabaseConfig};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use model::{
    Guest, GuestId, Host, HostId, Reservation, ReservationId, ReservationRecord,
    ReservationRequest,
};
pub use outcome::Outcome;
