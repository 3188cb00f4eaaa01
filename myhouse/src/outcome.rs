//! Success/failure results for business-rule checks.
//!
//! Validation and business-rule failures are reported through [`Outcome`],
//! never through [`crate::Error`]. An outcome succeeds exactly when it holds
//! no messages.

/// Message texts reported by the booking engine.
pub mod messages {
    /// The request itself was absent.
    pub const RESERVATION_REQUIRED: &str = "reservation cannot be null";
    /// No guest on the request.
    pub const GUEST_REQUIRED: &str = "guest cannot be null";
    /// No host on the request.
    pub const HOST_REQUIRED: &str = "host cannot be null";
    /// No start date on the request.
    pub const START_REQUIRED: &str = "start date cannot be null";
    /// No end date on the request.
    pub const END_REQUIRED: &str = "end date cannot be null";
    /// Host id blank or email unknown to the host directory.
    pub const HOST_NOT_FOUND: &str = "host cannot be found";
    /// Email unknown to the guest directory.
    pub const GUEST_NOT_FOUND: &str = "guest cannot be found";
    /// Start on or after end.
    pub const START_BEFORE_END: &str = "start date must be before end date";
    /// Start on or before today.
    pub const START_IN_FUTURE: &str = "start date must be in the future";
    /// Dates collide with another reservation of the same host.
    pub const OVERLAP: &str = "date must not overlap with existing reservation";
    /// Update or delete of an id the store does not hold.
    pub const NOT_FOUND: &str = "reservation does not exist";
    /// Delete of a reservation that has started or ended.
    pub const PAST_DELETE: &str = "cannot delete past reservation";
}

/// Result of a business operation: ordered messages plus an optional payload.
///
/// The payload is only observable on success; once any message is added it
/// is hidden for good.
///
/// # Examples
///
/// ```
/// use myhouse::Outcome;
///
/// let mut outcome = Outcome::new();
/// outcome.set_payload(42);
/// assert_eq!(outcome.payload(), Some(&42));
///
/// outcome.add_message("something went wrong");
/// assert!(!outcome.is_success());
/// assert_eq!(outcome.payload(), None);
/// assert_eq!(outcome.messages(), ["something went wrong"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome<T> {
    messages: Vec<String>,
    payload: Option<T>,
}

impl<T> Default for Outcome<T> {
    fn default() -> Self {
        Self {
            messages: Vec::new(),
            payload: None,
        }
    }
}

impl<T> Outcome<T> {
    /// Creates a successful outcome without a payload.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a failed outcome with a single message.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        let mut outcome = Self::new();
        outcome.add_message(message);
        outcome
    }

    /// Creates a successful outcome carrying `payload`.
    #[must_use]
    pub fn success(payload: T) -> Self {
        Self {
            messages: Vec::new(),
            payload: Some(payload),
        }
    }

    /// Returns true when no messages have been recorded.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.messages.is_empty()
    }

    /// Appends a failure message.
    pub fn add_message(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    /// Returns the failure messages in the order they were recorded.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Stores the payload.
    pub fn set_payload(&mut self, payload: T) {
        self.payload = Some(payload);
    }

    /// Returns the payload, or `None` if the outcome failed.
    #[must_use]
    pub fn payload(&self) -> Option<&T> {
        if self.is_success() {
            self.payload.as_ref()
        } else {
            None
        }
    }

    /// Removes and returns the payload, or `None` if the outcome failed.
    pub fn take_payload(&mut self) -> Option<T> {
        if self.is_success() {
            self.payload.take()
        } else {
            None
        }
    }

    /// Consumes the outcome, returning the payload only on success.
    #[must_use]
    pub fn into_payload(self) -> Option<T> {
        if self.is_success() {
            self.payload
        } else {
            None
        }
    }
}
