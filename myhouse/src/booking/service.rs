//! Read-validate-write orchestration over the reservation store.

use std::collections::HashMap;
use std::rc::Rc;

use chrono::NaiveDate;

use super::overlap::first_conflict;
use super::validator::{ReservationValidator, ValidationMode};
use crate::error::Result;
use crate::model::{
    Guest, GuestId, Host, HostId, Reservation, ReservationId, ReservationRecord,
    ReservationRequest,
};
use crate::outcome::{messages, Outcome};
use crate::storage::{GuestDirectory, HostDirectory, ReservationStore};

/// Books, edits, cancels and lists reservations.
///
/// The service keeps no state of its own between calls. Each operation
/// reads the collaborators afresh, validates, and only then writes.
/// Business-rule failures come back as failed [`Outcome`]s; an `Err` means a
/// collaborator could not read or write.
pub struct ReservationService {
    reservations: Rc<dyn ReservationStore>,
    hosts: Rc<dyn HostDirectory>,
    guests: Rc<dyn GuestDirectory>,
    today: Option<NaiveDate>,
}

impl ReservationService {
    /// Creates a service over the given collaborators.
    #[must_use]
    pub fn new(
        reservations: Rc<dyn ReservationStore>,
        hosts: Rc<dyn HostDirectory>,
        guests: Rc<dyn GuestDirectory>,
    ) -> Self {
        Self {
            reservations,
            hosts,
            guests,
            today: None,
        }
    }

    /// Pins the date the service treats as today.
    #[must_use]
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// The date used for the future-start and past-delete rules.
    ///
    /// Falls back to the local calendar date unless pinned.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.today
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }

    fn validator(&self) -> ReservationValidator<'_> {
        ReservationValidator::new(
            self.reservations.as_ref(),
            self.hosts.as_ref(),
            self.guests.as_ref(),
            self.today(),
        )
    }

    /// Lists a host's reservations with host and guest resolved.
    ///
    /// A reservation whose host or guest id no longer resolves is still
    /// returned, with that side left as `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory or the store fails to read.
    pub fn find_by_host_id(&self, host_id: &HostId) -> Result<Vec<Reservation>> {
        let hosts: HashMap<HostId, Host> = self
            .hosts
            .find_all()?
            .into_iter()
            .map(|h| (h.id.clone(), h))
            .collect();
        let guests: HashMap<GuestId, Guest> = self
            .guests
            .find_all()?
            .into_iter()
            .map(|g| (g.id, g))
            .collect();

        let records = self.reservations.find_by_host_id(host_id)?;
        log::debug!("Loaded {} reservations for host {host_id}", records.len());

        Ok(records
            .into_iter()
            .map(|record| {
                let host = hosts.get(&record.host_id).cloned();
                let guest = guests.get(&record.guest_id).cloned();
                Reservation::hydrate(record, host, guest)
            })
            .collect())
    }

    /// Validates a request without persisting anything.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory or the store fails to read.
    pub fn validate(
        &self,
        request: Option<&ReservationRequest>,
        mode: ValidationMode,
    ) -> Result<Outcome<Reservation>> {
        self.validator().validate(request, mode)
    }

    /// Books a new reservation.
    ///
    /// On success the payload is the stored reservation carrying the id the
    /// store assigned.
    ///
    /// # Errors
    ///
    /// Returns an error if a collaborator fails to read or the store fails
    /// to write. Nothing is written when validation fails.
    pub fn add(&self, request: &ReservationRequest) -> Result<Outcome<Reservation>> {
        let mut outcome = self.validate(Some(request), ValidationMode::Create)?;
        let Some(candidate) = outcome.take_payload() else {
            return Ok(outcome);
        };

        let existing = self.find_by_host_id(&candidate.host_id)?;
        let spans = existing.iter().map(|r| (r.id, r.start, r.end));
        if first_conflict(candidate.start, candidate.end, spans, None).is_some() {
            outcome.add_message(messages::OVERLAP);
            return Ok(outcome);
        }

        let stored = self.reservations.add(candidate.to_record())?;
        log::debug!(
            "Booked reservation {} for host {} from {} to {}",
            stored.id,
            stored.host_id,
            stored.start,
            stored.end
        );
        outcome.set_payload(Reservation::hydrate(stored, candidate.host, candidate.guest));
        Ok(outcome)
    }

    /// Replaces the dates and total of an existing reservation.
    ///
    /// The request's id selects the record within the host's set. The stored
    /// guest stays on the reservation even if the request names another one.
    ///
    /// # Errors
    ///
    /// Returns an error if a collaborator fails to read or the store fails
    /// to write.
    pub fn update(&self, request: &ReservationRequest) -> Result<Outcome<Reservation>> {
        let mut outcome = self.validate(Some(request), ValidationMode::Update)?;
        let Some(mut candidate) = outcome.take_payload() else {
            return Ok(outcome);
        };

        let Some(current) = self
            .reservations
            .find_by_host_id(&candidate.host_id)?
            .into_iter()
            .find(|r| r.id == candidate.id)
        else {
            outcome.add_message(messages::NOT_FOUND);
            return Ok(outcome);
        };

        if current.guest_id != candidate.guest_id {
            log::warn!(
                "Reservation {} belongs to guest {}; ignoring guest {} in the update",
                current.id,
                current.guest_id,
                candidate.guest_id
            );
            candidate.guest = self
                .guests
                .find_all()?
                .into_iter()
                .find(|g| g.id == current.guest_id);
            candidate.guest_id = current.guest_id;
        }

        if self.reservations.update(&candidate.to_record())? {
            log::debug!(
                "Updated reservation {} for host {}",
                candidate.id,
                candidate.host_id
            );
            outcome.set_payload(candidate);
        } else {
            outcome.add_message(messages::NOT_FOUND);
        }
        Ok(outcome)
    }

    /// Cancels a reservation that has not started yet.
    ///
    /// On success the payload is the removed record.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails to read or write.
    pub fn delete_by_id(
        &self,
        id: ReservationId,
        host_id: &HostId,
    ) -> Result<Outcome<ReservationRecord>> {
        let existing = self
            .reservations
            .find_by_host_id(host_id)?
            .into_iter()
            .find(|r| r.id == id);

        if let Some(record) = &existing {
            if record.start <= self.today() {
                return Ok(Outcome::failure(messages::PAST_DELETE));
            }
        }

        if !self.reservations.delete_by_id(id, host_id)? {
            return Ok(Outcome::failure(messages::NOT_FOUND));
        }
        log::debug!("Cancelled reservation {id} for host {host_id}");

        let mut outcome = Outcome::new();
        if let Some(record) = existing {
            outcome.set_payload(record);
        }
        Ok(outcome)
    }

    /// Sorts by start date, keeping the input order of equal starts.
    #[must_use]
    pub fn sort_by_date(mut reservations: Vec<Reservation>) -> Vec<Reservation> {
        reservations.sort_by_key(|r| r.start);
        reservations
    }
}
