//! Guest records.

use serde::{Deserialize, Serialize};

/// Identifier assigned to a guest by the guest directory.
pub type GuestId = u32;

/// A renter, identified by a unique email address.
///
/// # Examples
///
/// ```
/// use myhouse::Guest;
///
/// let guest = Guest::new(1, "Romari", "Bartley", "romari@example.com");
/// assert_eq!(guest.full_name(), "Bartley, Romari");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Guest {
    /// Directory-assigned id.
    pub id: GuestId,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Unique natural key.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Two-letter state code.
    pub state: String,
}

impl Guest {
    /// Creates a guest with empty phone and state.
    #[must_use]
    pub fn new(
        id: GuestId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            phone: String::new(),
            state: String::new(),
        }
    }

    /// Sets the phone number.
    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Sets the state code.
    #[must_use]
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    /// Returns `"Last, First"` for listings.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}, {}", self.last_name, self.first_name)
    }
}
