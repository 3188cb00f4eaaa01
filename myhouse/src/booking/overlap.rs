//! Date-range collision test for a host's calendar.
//!
//! Two stays are apart only when one lies strictly before the other. A stay
//! ending on the day another begins still collides: there is no same-day
//! turnover.

use chrono::NaiveDate;

use crate::model::ReservationId;

/// Returns true when the candidate stay collides with an existing one.
///
/// Boundary days count as shared, so back-to-back stays overlap.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use myhouse::booking::overlaps;
///
/// let d = |day| NaiveDate::from_ymd_opt(2099, 10, day).unwrap();
///
/// assert!(overlaps(d(3), d(6), d(5), d(9)));
/// // Back-to-back stays collide
/// assert!(overlaps(d(1), d(5), d(5), d(9)));
/// // A clear day apart does not
/// assert!(!overlaps(d(1), d(4), d(5), d(9)));
/// ```
#[must_use]
pub fn overlaps(
    candidate_start: NaiveDate,
    candidate_end: NaiveDate,
    existing_start: NaiveDate,
    existing_end: NaiveDate,
) -> bool {
    let entirely_before = candidate_start < existing_start && candidate_end < existing_start;
    let entirely_after = candidate_start > existing_end && candidate_end > existing_end;
    !entirely_before && !entirely_after
}

/// Returns the id of the first existing stay the candidate collides with.
///
/// `existing` yields `(id, start, end)` triples. A stay whose id equals
/// `exclude` is skipped, which lets an edited reservation ignore its own
/// stored dates.
pub fn first_conflict<I>(
    start: NaiveDate,
    end: NaiveDate,
    existing: I,
    exclude: Option<ReservationId>,
) -> Option<ReservationId>
where
    I: IntoIterator<Item = (ReservationId, NaiveDate, NaiveDate)>,
{
    existing
        .into_iter()
        .filter(|(id, _, _)| Some(*id) != exclude)
        .find(|(_, existing_start, existing_end)| {
            overlaps(start, end, *existing_start, *existing_end)
        })
        .map(|(id, _, _)| id)
}
