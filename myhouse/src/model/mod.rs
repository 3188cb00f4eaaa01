//! Domain types for hosts, guests and their reservations.
//!
//! Three shapes of reservation exist:
//!
//! - [`ReservationRecord`]: what a store persists (host and guest by id only)
//! - [`Reservation`]: a record hydrated with the full [`Host`] and [`Guest`]
//! - [`ReservationRequest`]: caller input for validation, creation and edits

mod guest;
mod host;
mod reservation;

pub use guest::{Guest, GuestId};
pub use host::{Host, HostId};
pub use reservation::{Reservation, ReservationId, ReservationRecord, ReservationRequest};
