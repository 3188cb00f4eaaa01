//! Stay pricing from a host's weekday and weekend rates.
//!
//! A stay covers the nights `[start, end)`. Each night is priced by the day
//! it begins on: Friday and Saturday nights use the weekend rate, every other
//! night the standard rate.

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::Host;

/// Night counts and total for a priced stay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// Nights beginning Sunday through Thursday.
    pub weekday_nights: u32,
    /// Nights beginning Friday or Saturday.
    pub weekend_nights: u32,
    /// `weekday_nights * standard_rate + weekend_nights * weekend_rate`.
    pub total: Decimal,
}

impl PriceQuote {
    /// Total number of nights.
    #[must_use]
    pub const fn nights(&self) -> u32 {
        self.weekday_nights + self.weekend_nights
    }
}

/// Returns true for nights billed at the weekend rate.
#[must_use]
pub fn is_weekend_night(night: NaiveDate) -> bool {
    matches!(night.weekday(), Weekday::Fri | Weekday::Sat)
}

/// Prices the stay from `start` (first night) to `end` (checkout).
///
/// There is no guard on the date order; when `start >= end` the stay has no
/// nights and the total is zero. Callers validate ordering first.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use myhouse::booking::quote;
/// use myhouse::Host;
/// use rust_decimal::Decimal;
///
/// let host = Host::new("h-1", "Hazard", "eden@example.com")
///     .with_rates(Decimal::from(10), Decimal::from(15));
///
/// // Monday to the following Monday
/// let quote = quote(
///     NaiveDate::from_ymd_opt(2024, 10, 7).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 10, 14).unwrap(),
///     &host,
/// );
/// assert_eq!(quote.weekday_nights, 5);
/// assert_eq!(quote.weekend_nights, 2);
/// assert_eq!(quote.total, Decimal::from(80));
/// ```
#[must_use]
pub fn quote(start: NaiveDate, end: NaiveDate, host: &Host) -> PriceQuote {
    let (weekend_nights, weekday_nights) = start
        .iter_days()
        .take_while(|night| *night < end)
        .fold((0u32, 0u32), |(weekend, weekday), night| {
            if is_weekend_night(night) {
                (weekend + 1, weekday)
            } else {
                (weekend, weekday + 1)
            }
        });

    let total = Decimal::from(weekday_nights) * host.standard_rate
        + Decimal::from(weekend_nights) * host.weekend_rate;

    PriceQuote {
        weekday_nights,
        weekend_nights,
        total,
    }
}

/// Returns only the total of [`quote`].
#[must_use]
pub fn price(start: NaiveDate, end: NaiveDate, host: &Host) -> Decimal {
    quote(start, end, host).total
}
