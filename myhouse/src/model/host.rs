//! Host records and their nightly rates.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifier of a host.
///
/// Ids are UUID-shaped strings but are not parsed as UUIDs; historical data
/// contains ids that would not pass strict UUID validation.
///
/// # Examples
///
/// ```
/// use myhouse::HostId;
///
/// let id = HostId::new("2e72f86c-b8fe-4265-b4f1-304dea8762db");
/// assert!(!id.is_blank());
/// assert!(HostId::new("  ").is_blank());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HostId(String);

impl HostId {
    /// Wraps a raw host id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true when the id is empty or whitespace, which counts as absent.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for HostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for HostId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for HostId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A property owner with a standard and a weekend nightly rate.
///
/// # Examples
///
/// ```
/// use myhouse::Host;
/// use rust_decimal::Decimal;
///
/// let host = Host::new("h-1", "Hazard", "eden@example.com")
///     .with_rates(Decimal::from(10), Decimal::from(15));
/// assert_eq!(host.weekend_rate, Decimal::from(15));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Host {
    /// Unique host id.
    pub id: HostId,
    /// Family name shown in listings.
    pub last_name: String,
    /// Unique natural key.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Street address of the property.
    pub address: String,
    /// City of the property.
    pub city: String,
    /// Two-letter state code.
    pub state: String,
    /// Postal code of the property.
    pub postal_code: String,
    /// Rate for nights starting Sunday through Thursday.
    pub standard_rate: Decimal,
    /// Rate for nights starting Friday or Saturday.
    pub weekend_rate: Decimal,
}

impl Host {
    /// Creates a host with zero rates and an empty address.
    #[must_use]
    pub fn new(id: impl Into<HostId>, last_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            last_name: last_name.into(),
            email: email.into(),
            phone: String::new(),
            address: String::new(),
            city: String::new(),
            state: String::new(),
            postal_code: String::new(),
            standard_rate: Decimal::ZERO,
            weekend_rate: Decimal::ZERO,
        }
    }

    /// Sets both nightly rates.
    #[must_use]
    pub fn with_rates(mut self, standard_rate: Decimal, weekend_rate: Decimal) -> Self {
        self.standard_rate = standard_rate;
        self.weekend_rate = weekend_rate;
        self
    }

    /// Sets the postal address.
    #[must_use]
    pub fn with_address(
        mut self,
        address: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        postal_code: impl Into<String>,
    ) -> Self {
        self.address = address.into();
        self.city = city.into();
        self.state = state.into();
        self.postal_code = postal_code.into();
        self
    }

    /// Sets the phone number.
    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Returns the `"Last: City,State"` heading used when listing a host's calendar.
    #[must_use]
    pub fn heading(&self) -> String {
        format!("{}: {},{}", self.last_name, self.city, self.state)
    }
}
