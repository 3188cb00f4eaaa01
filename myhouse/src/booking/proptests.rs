//! Property-based tests for overlap detection and pricing.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::overlap::overlaps;
use super::pricing::quote;
use crate::model::Host;

fn base() -> NaiveDate {
    NaiveDate::from_ymd_opt(2099, 1, 1).unwrap()
}

fn day(offset: u64) -> NaiveDate {
    base() + Days::new(offset)
}

// Strategy for generating stays with start < end
fn stay_strategy() -> impl Strategy<Value = (NaiveDate, NaiveDate)> {
    (0u64..720, 1u64..60).prop_map(|(start, nights)| (day(start), day(start + nights)))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Overlap does not depend on which stay is the candidate
    #[test]
    fn overlap_is_symmetric(a in stay_strategy(), b in stay_strategy()) {
        prop_assert_eq!(overlaps(a.0, a.1, b.0, b.1), overlaps(b.0, b.1, a.0, a.1));
    }

    // Back-to-back stays collide
    #[test]
    fn touching_stays_overlap(a in stay_strategy(), nights in 1u64..30) {
        let next_end = a.1 + Days::new(nights);
        prop_assert!(overlaps(a.0, a.1, a.1, next_end));
        prop_assert!(overlaps(a.1, next_end, a.0, a.1));
    }

    // A clear day between stays means no collision
    #[test]
    fn gapped_stays_do_not_overlap(a in stay_strategy(), gap in 1u64..30, nights in 1u64..30) {
        let next_start = a.1 + Days::new(gap);
        let next_end = next_start + Days::new(nights);
        prop_assert!(!overlaps(a.0, a.1, next_start, next_end));
        prop_assert!(!overlaps(next_start, next_end, a.0, a.1));
    }

    // Every night is either a weekday or a weekend night
    #[test]
    fn night_counts_cover_the_stay((start, end) in stay_strategy()) {
        let host = Host::new("h-1", "Hazard", "eden@example.com")
            .with_rates(Decimal::from(10), Decimal::from(15));
        let q = quote(start, end, &host);
        let nights = u32::try_from((end - start).num_days()).unwrap();

        prop_assert_eq!(q.weekday_nights + q.weekend_nights, nights);
        prop_assert_eq!(
            q.total,
            Decimal::from(q.weekday_nights) * Decimal::from(10)
                + Decimal::from(q.weekend_nights) * Decimal::from(15)
        );
    }

    // Any seven consecutive nights hold exactly one Friday and one Saturday
    #[test]
    fn full_week_has_two_weekend_nights(start in 0u64..720) {
        let host = Host::new("h-1", "Hazard", "eden@example.com")
            .with_rates(Decimal::ONE, Decimal::TWO);
        let q = quote(day(start), day(start + 7), &host);
        prop_assert_eq!(q.weekend_nights, 2);
        prop_assert_eq!(q.weekday_nights, 5);
    }
}
