//! Field, existence, date and overlap rules for reservation requests.

use chrono::NaiveDate;

use super::overlap::first_conflict;
use crate::error::Result;
use crate::model::{Reservation, ReservationRecord, ReservationRequest};
use crate::outcome::{messages, Outcome};
use crate::storage::{GuestDirectory, HostDirectory, ReservationStore};

/// Whether a request describes a new reservation or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// New reservation; every stored reservation takes part in the overlap check.
    Create,
    /// Edit; the stored reservation sharing the request's id is ignored.
    Update,
}

/// Checks a [`ReservationRequest`] against the directories and the store.
///
/// Messages accumulate rather than short-circuit, so a caller sees every
/// problem with a request at once. The only early exits are an absent
/// request and a request missing one of guest, host, start or end.
pub struct ReservationValidator<'a> {
    reservations: &'a dyn ReservationStore,
    hosts: &'a dyn HostDirectory,
    guests: &'a dyn GuestDirectory,
    today: NaiveDate,
}

impl<'a> ReservationValidator<'a> {
    /// Creates a validator that treats `today` as the current date.
    #[must_use]
    pub fn new(
        reservations: &'a dyn ReservationStore,
        hosts: &'a dyn HostDirectory,
        guests: &'a dyn GuestDirectory,
        today: NaiveDate,
    ) -> Self {
        Self {
            reservations,
            hosts,
            guests,
            today,
        }
    }

    /// Validates a request.
    ///
    /// On success the outcome's payload is the candidate reservation with
    /// host and guest resolved from the request. Its id is the request's id,
    /// or 0 when the request carries none.
    ///
    /// # Errors
    ///
    /// Returns an error only when a directory or the store fails to read.
    pub fn validate(
        &self,
        request: Option<&ReservationRequest>,
        mode: ValidationMode,
    ) -> Result<Outcome<Reservation>> {
        let Some(request) = request else {
            return Ok(Outcome::failure(messages::RESERVATION_REQUIRED));
        };

        let mut outcome = Outcome::new();
        if request.guest.is_none() {
            outcome.add_message(messages::GUEST_REQUIRED);
        }
        if request.host.is_none() {
            outcome.add_message(messages::HOST_REQUIRED);
        }
        if request.start.is_none() {
            outcome.add_message(messages::START_REQUIRED);
        }
        if request.end.is_none() {
            outcome.add_message(messages::END_REQUIRED);
        }

        let (Some(guest), Some(host), Some(start), Some(end)) =
            (&request.guest, &request.host, request.start, request.end)
        else {
            return Ok(outcome);
        };

        if host.id.is_blank() || self.hosts.find_by_email(&host.email)?.is_none() {
            outcome.add_message(messages::HOST_NOT_FOUND);
        }
        if self.guests.find_by_email(&guest.email)?.is_none() {
            outcome.add_message(messages::GUEST_NOT_FOUND);
        }
        if start >= end {
            outcome.add_message(messages::START_BEFORE_END);
        }
        if start <= self.today {
            outcome.add_message(messages::START_IN_FUTURE);
        }
        if !outcome.is_success() {
            return Ok(outcome);
        }

        let exclude = match mode {
            ValidationMode::Create => None,
            ValidationMode::Update => request.id,
        };
        let existing = self.reservations.find_by_host_id(&host.id)?;
        let spans = existing.iter().map(|r| (r.id, r.start, r.end));
        if let Some(conflict) = first_conflict(start, end, spans, exclude) {
            log::debug!(
                "Request for host {} from {start} to {end} overlaps reservation {conflict}",
                host.id
            );
            outcome.add_message(messages::OVERLAP);
            return Ok(outcome);
        }

        let record = ReservationRecord {
            id: request.id.unwrap_or_default(),
            host_id: host.id.clone(),
            guest_id: guest.id,
            start,
            end,
            total: request.total,
        };
        outcome.set_payload(Reservation::hydrate(
            record,
            Some(host.clone()),
            Some(guest.clone()),
        ));
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Guest, Host, HostId};
    use crate::storage::memory::{
        MemoryGuestDirectory, MemoryHostDirectory, MemoryReservationStore,
    };
    use crate::storage::traits::MockReservationStore;
    use rust_decimal::Decimal;

    fn date(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2099, month, day).unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2099, 1, 1).unwrap()
    }

    fn host() -> Host {
        Host::new("h-1", "Hazard", "eden@example.com")
            .with_rates(Decimal::from(10), Decimal::from(15))
    }

    fn guest() -> Guest {
        Guest::new(1, "Romari", "Bartley", "romari@example.com")
    }

    fn stored(id: u32, start: NaiveDate, end: NaiveDate) -> ReservationRecord {
        ReservationRecord {
            id,
            host_id: HostId::new("h-1"),
            guest_id: 1,
            start,
            end,
            total: Decimal::ZERO,
        }
    }

    struct Fixture {
        reservations: MemoryReservationStore,
        hosts: MemoryHostDirectory,
        guests: MemoryGuestDirectory,
    }

    impl Fixture {
        fn new(records: Vec<ReservationRecord>) -> Self {
            Self {
                reservations: MemoryReservationStore::with_records(records),
                hosts: MemoryHostDirectory::new(vec![host()]),
                guests: MemoryGuestDirectory::new(vec![guest()]),
            }
        }

        fn validator(&self) -> ReservationValidator<'_> {
            ReservationValidator::new(&self.reservations, &self.hosts, &self.guests, today())
        }
    }

    fn request(start: NaiveDate, end: NaiveDate) -> ReservationRequest {
        ReservationRequest::new()
            .with_guest(guest())
            .with_host(host())
            .with_dates(start, end)
    }

    #[test]
    fn test_absent_request() {
        let fixture = Fixture::new(vec![]);
        let outcome = fixture
            .validator()
            .validate(None, ValidationMode::Create)
            .unwrap();
        assert_eq!(outcome.messages(), [messages::RESERVATION_REQUIRED]);
    }

    #[test]
    fn test_missing_guest_and_host_reports_two_messages() {
        let mut reservations = MockReservationStore::new();
        reservations.expect_find_by_host_id().never();
        let hosts = MemoryHostDirectory::new(vec![host()]);
        let guests = MemoryGuestDirectory::new(vec![guest()]);
        let validator = ReservationValidator::new(&reservations, &hosts, &guests, today());

        let request = ReservationRequest::new().with_dates(date(10, 6), date(10, 9));
        let outcome = validator
            .validate(Some(&request), ValidationMode::Create)
            .unwrap();

        assert_eq!(
            outcome.messages(),
            [messages::GUEST_REQUIRED, messages::HOST_REQUIRED]
        );
    }

    #[test]
    fn test_every_missing_field_is_reported() {
        let fixture = Fixture::new(vec![]);
        let outcome = fixture
            .validator()
            .validate(Some(&ReservationRequest::new()), ValidationMode::Create)
            .unwrap();
        assert_eq!(
            outcome.messages(),
            [
                messages::GUEST_REQUIRED,
                messages::HOST_REQUIRED,
                messages::START_REQUIRED,
                messages::END_REQUIRED,
            ]
        );
    }

    #[test]
    fn test_unknown_host_and_guest() {
        let fixture = Fixture::new(vec![]);
        let request = ReservationRequest::new()
            .with_guest(Guest::new(2, "Nobody", "Here", "nobody@example.com"))
            .with_host(Host::new("h-2", "Gone", "gone@example.com"))
            .with_dates(date(10, 6), date(10, 9));

        let outcome = fixture
            .validator()
            .validate(Some(&request), ValidationMode::Create)
            .unwrap();
        assert_eq!(
            outcome.messages(),
            [messages::HOST_NOT_FOUND, messages::GUEST_NOT_FOUND]
        );
    }

    #[test]
    fn test_blank_host_id_is_not_found() {
        let fixture = Fixture::new(vec![]);
        let request = ReservationRequest::new()
            .with_guest(guest())
            .with_host(Host::new("  ", "Hazard", "eden@example.com"))
            .with_dates(date(10, 6), date(10, 9));

        let outcome = fixture
            .validator()
            .validate(Some(&request), ValidationMode::Create)
            .unwrap();
        assert_eq!(outcome.messages(), [messages::HOST_NOT_FOUND]);
    }

    #[test]
    fn test_date_rules_accumulate() {
        let fixture = Fixture::new(vec![]);
        let past = NaiveDate::from_ymd_opt(2098, 12, 31).unwrap();
        let outcome = fixture
            .validator()
            .validate(Some(&request(past, past)), ValidationMode::Create)
            .unwrap();
        assert_eq!(
            outcome.messages(),
            [messages::START_BEFORE_END, messages::START_IN_FUTURE]
        );
    }

    #[test]
    fn test_start_today_is_rejected() {
        let fixture = Fixture::new(vec![]);
        let outcome = fixture
            .validator()
            .validate(Some(&request(today(), date(1, 3))), ValidationMode::Create)
            .unwrap();
        assert_eq!(outcome.messages(), [messages::START_IN_FUTURE]);
    }

    #[test]
    fn test_overlap_only_checked_when_otherwise_valid() {
        let fixture = Fixture::new(vec![stored(1, date(10, 1), date(10, 5))]);
        let request = ReservationRequest::new()
            .with_guest(Guest::new(2, "Nobody", "Here", "nobody@example.com"))
            .with_host(host())
            .with_dates(date(10, 2), date(10, 4));

        let outcome = fixture
            .validator()
            .validate(Some(&request), ValidationMode::Create)
            .unwrap();
        assert_eq!(outcome.messages(), [messages::GUEST_NOT_FOUND]);
    }

    #[test]
    fn test_touching_boundary_overlaps() {
        let fixture = Fixture::new(vec![stored(1, date(10, 1), date(10, 5))]);
        let outcome = fixture
            .validator()
            .validate(Some(&request(date(10, 5), date(10, 8))), ValidationMode::Create)
            .unwrap();
        assert_eq!(outcome.messages(), [messages::OVERLAP]);
    }

    #[test]
    fn test_update_skips_own_record() {
        let fixture = Fixture::new(vec![stored(1, date(10, 1), date(10, 5))]);
        let request = request(date(10, 1), date(10, 5)).with_id(1);

        let created = fixture
            .validator()
            .validate(Some(&request), ValidationMode::Create)
            .unwrap();
        assert_eq!(created.messages(), [messages::OVERLAP]);

        let updated = fixture
            .validator()
            .validate(Some(&request), ValidationMode::Update)
            .unwrap();
        assert!(updated.is_success());
    }

    #[test]
    fn test_update_still_checks_other_records() {
        let fixture = Fixture::new(vec![
            stored(1, date(10, 1), date(10, 5)),
            stored(2, date(10, 10), date(10, 12)),
        ]);
        let request = request(date(10, 1), date(10, 10)).with_id(1);
        let outcome = fixture
            .validator()
            .validate(Some(&request), ValidationMode::Update)
            .unwrap();
        assert_eq!(outcome.messages(), [messages::OVERLAP]);
    }

    #[test]
    fn test_success_payload_carries_candidate() {
        let fixture = Fixture::new(vec![]);
        let request = request(date(10, 6), date(10, 9)).priced();
        let outcome = fixture
            .validator()
            .validate(Some(&request), ValidationMode::Create)
            .unwrap();

        let candidate = outcome.payload().unwrap();
        assert_eq!(candidate.id, 0);
        assert_eq!(candidate.host_id, HostId::new("h-1"));
        assert_eq!(candidate.guest_id, 1);
        assert_eq!(candidate.total, Decimal::from(30));
        assert_eq!(candidate.guest, Some(guest()));
    }

    #[test]
    fn test_store_read_failure_is_fatal() {
        let mut reservations = MockReservationStore::new();
        reservations
            .expect_find_by_host_id()
            .returning(|_| {
                Err(crate::Error::Io(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    "disk on fire",
                )))
            });
        let hosts = MemoryHostDirectory::new(vec![host()]);
        let guests = MemoryGuestDirectory::new(vec![guest()]);
        let validator = ReservationValidator::new(&reservations, &hosts, &guests, today());

        let result = validator.validate(
            Some(&request(date(10, 6), date(10, 9))),
            ValidationMode::Create,
        );
        assert!(result.is_err());
    }
}
