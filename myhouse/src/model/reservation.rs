//! Reservation types: stored records, hydrated reservations and requests.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Guest, GuestId, Host, HostId};
use crate::booking::pricing;

/// Host-scoped reservation id.
///
/// Ids are unique only within one host's reservation set.
pub type ReservationId = u32;

/// A reservation as persisted by a store: host and guest by id only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationRecord {
    /// Host-scoped id, assigned by the store on insert.
    pub id: ReservationId,
    /// Host whose calendar holds the reservation.
    pub host_id: HostId,
    /// Guest the reservation was made for.
    pub guest_id: GuestId,
    /// First night of the stay.
    pub start: NaiveDate,
    /// Checkout day; not a night of the stay.
    pub end: NaiveDate,
    /// Total cost of the stay.
    pub total: Decimal,
}

/// A reservation with its host and guest resolved against the directories.
///
/// `host` and `guest` are `None` when the stored id no longer resolves; the
/// ids themselves are always kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    /// Host-scoped id.
    pub id: ReservationId,
    /// Id of the host as stored.
    pub host_id: HostId,
    /// Id of the guest as stored.
    pub guest_id: GuestId,
    /// The hydrated host, if it still exists.
    pub host: Option<Host>,
    /// The hydrated guest, if it still exists.
    pub guest: Option<Guest>,
    /// First night of the stay.
    pub start: NaiveDate,
    /// Checkout day.
    pub end: NaiveDate,
    /// Total cost of the stay.
    pub total: Decimal,
}

impl Reservation {
    /// Combines a stored record with whatever host and guest could be resolved.
    #[must_use]
    pub fn hydrate(record: ReservationRecord, host: Option<Host>, guest: Option<Guest>) -> Self {
        Self {
            id: record.id,
            host_id: record.host_id,
            guest_id: record.guest_id,
            host,
            guest,
            start: record.start,
            end: record.end,
            total: record.total,
        }
    }

    /// Returns the store-level shape of this reservation.
    #[must_use]
    pub fn to_record(&self) -> ReservationRecord {
        ReservationRecord {
            id: self.id,
            host_id: self.host_id.clone(),
            guest_id: self.guest_id,
            start: self.start,
            end: self.end,
            total: self.total,
        }
    }
}

/// Caller input for validating, creating or editing a reservation.
///
/// Every field the validator checks for presence is optional so that a
/// partially filled request can be reported on in full.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use myhouse::{Guest, Host, ReservationRequest};
/// use rust_decimal::Decimal;
///
/// let host = Host::new("h-1", "Hazard", "eden@example.com")
///     .with_rates(Decimal::from(10), Decimal::from(15));
/// let guest = Guest::new(1, "Romari", "Bartley", "romari@example.com");
///
/// // Sunday through Wednesday: three weekday nights
/// let request = ReservationRequest::new()
///     .with_host(host)
///     .with_guest(guest)
///     .with_dates(
///         NaiveDate::from_ymd_opt(2099, 10, 4).unwrap(),
///         NaiveDate::from_ymd_opt(2099, 10, 7).unwrap(),
///     )
///     .priced();
/// assert_eq!(request.total, Decimal::from(30));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservationRequest {
    /// Id of the reservation being edited; `None` for new reservations.
    pub id: Option<ReservationId>,
    /// Guest making the reservation.
    pub guest: Option<Guest>,
    /// Host whose property is being booked.
    pub host: Option<Host>,
    /// First night of the stay.
    pub start: Option<NaiveDate>,
    /// Checkout day.
    pub end: Option<NaiveDate>,
    /// Total cost to store with the reservation.
    pub total: Decimal,
}

impl ReservationRequest {
    /// Creates an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds an edit request from an existing reservation.
    #[must_use]
    pub fn from_reservation(reservation: &Reservation) -> Self {
        Self {
            id: Some(reservation.id),
            guest: reservation.guest.clone(),
            host: reservation.host.clone(),
            start: Some(reservation.start),
            end: Some(reservation.end),
            total: reservation.total,
        }
    }

    /// Sets the id of the reservation being edited.
    #[must_use]
    pub fn with_id(mut self, id: ReservationId) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the guest.
    #[must_use]
    pub fn with_guest(mut self, guest: Guest) -> Self {
        self.guest = Some(guest);
        self
    }

    /// Sets the host.
    #[must_use]
    pub fn with_host(mut self, host: Host) -> Self {
        self.host = Some(host);
        self
    }

    /// Sets the start date.
    #[must_use]
    pub fn with_start(mut self, start: NaiveDate) -> Self {
        self.start = Some(start);
        self
    }

    /// Sets the end date.
    #[must_use]
    pub fn with_end(mut self, end: NaiveDate) -> Self {
        self.end = Some(end);
        self
    }

    /// Sets both dates.
    #[must_use]
    pub fn with_dates(self, start: NaiveDate, end: NaiveDate) -> Self {
        self.with_start(start).with_end(end)
    }

    /// Sets the total explicitly.
    #[must_use]
    pub fn with_total(mut self, total: Decimal) -> Self {
        self.total = total;
        self
    }

    /// Recomputes the total from the host's rates.
    ///
    /// Leaves the total untouched unless host and both dates are present and
    /// the start is before the end.
    #[must_use]
    pub fn priced(mut self) -> Self {
        if let (Some(host), Some(start), Some(end)) = (&self.host, self.start, self.end) {
            if start < end {
                self.total = pricing::price(start, end, host);
            }
        }
        self
    }
}
