//! The reservation booking engine.
//!
//! - [`overlap`]: whether two stays collide on a host's calendar
//! - [`pricing`]: cost of a stay from weekday and weekend rates
//! - [`validator`]: field, existence, date and overlap rules
//! - [`service`]: read-validate-write orchestration over the stores
//!
//! # Examples
//!
//! ```
//! use std::rc::Rc;
//!
//! use chrono::NaiveDate;
//! use myhouse::booking::ReservationService;
//! use myhouse::storage::memory::{MemoryGuestDirectory, MemoryHostDirectory, MemoryReservationStore};
//! use myhouse::{Guest, Host, ReservationRequest};
//! use rust_decimal::Decimal;
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
//!     .with_guest(guest)
//!     .with_host(host)
//!     .with_dates(
//!         NaiveDate::from_ymd_opt(2099, 10, 6).unwrap(),
//!         NaiveDate::from_ymd_opt(2099, 10, 9).unwrap(),
//!     )
//!     .priced();
//!
//! let outcome = service.add(&request).unwrap();
//! assert!(outcome.is_success());
//! assert_eq!(outcome.payload().unwrap().id, 1);
//! ```

pub mod overlap;
pub mod pricing;
pub mod service;
pub mod validator;

#[cfg(test)]
mod proptests;

pub use overlap::{first_conflict, overlaps};
pub use pricing::{price, quote, PriceQuote};
pub use service::ReservationService;
pub use validator::{ReservationValidator, ValidationMode};
