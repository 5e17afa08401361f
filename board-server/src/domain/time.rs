//! Minute arithmetic and clock formatting.
//!
//! TfNSW provides timestamps as RFC 3339 instants (UTC). This module
//! handles the conversion to rider-facing quantities: whole minutes
//! until departure, whole minutes of delay, and `HH:MM` clock strings
//! in a display timezone.
//!
//! The current time is always a parameter so tests can inject a fixed
//! clock.

use chrono::{DateTime, Duration, FixedOffset, Utc};

/// Round a signed duration to whole minutes.
///
/// Ties (exact half minutes) round toward positive infinity, matching
/// the original frontend's `Math.round` behavior: +90s rounds to 2,
/// +30s rounds to 1, and -30s rounds to 0.
///
/// # Examples
///
/// ```
/// use board_server::domain::round_minutes;
/// use chrono::Duration;
///
/// assert_eq!(round_minutes(Duration::seconds(90)), 2);
/// assert_eq!(round_minutes(Duration::seconds(30)), 1);
/// assert_eq!(round_minutes(Duration::seconds(-30)), 0);
/// assert_eq!(round_minutes(Duration::seconds(-90)), -1);
/// ```
pub fn round_minutes(delta: Duration) -> i64 {
    (delta.num_seconds() + 30).div_euclid(60)
}

/// Whole minutes from `now` until `departure`; negative if already passed.
pub fn minutes_until(now: DateTime<Utc>, departure: DateTime<Utc>) -> i64 {
    round_minutes(departure - now)
}

/// Delay in whole minutes: estimated minus planned. Positive means late.
pub fn delay_minutes(planned: DateTime<Utc>, estimated: DateTime<Utc>) -> i64 {
    round_minutes(estimated - planned)
}

/// Format an instant as a 24-hour `HH:MM` clock string in the display offset.
pub fn format_clock(t: DateTime<Utc>, offset: FixedOffset) -> String {
    t.with_timezone(&offset).format("%H:%M").to_string()
}

/// Format an instant as `HH:MM:SS`, used for the "Last updated" stamp.
pub fn format_clock_seconds(t: DateTime<Utc>, offset: FixedOffset) -> String {
    t.with_timezone(&offset).format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, h, m, s).unwrap()
    }

    #[test]
    fn rounds_to_nearest_minute() {
        assert_eq!(round_minutes(Duration::seconds(0)), 0);
        assert_eq!(round_minutes(Duration::seconds(29)), 0);
        assert_eq!(round_minutes(Duration::seconds(31)), 1);
        assert_eq!(round_minutes(Duration::seconds(89)), 1);
        assert_eq!(round_minutes(Duration::seconds(91)), 2);
        assert_eq!(round_minutes(Duration::seconds(-29)), 0);
        assert_eq!(round_minutes(Duration::seconds(-31)), -1);
    }

    #[test]
    fn half_minute_ties_round_up() {
        // The documented tie rule: toward positive infinity.
        assert_eq!(round_minutes(Duration::seconds(30)), 1);
        assert_eq!(round_minutes(Duration::seconds(90)), 2);
        assert_eq!(round_minutes(Duration::seconds(150)), 3);
        assert_eq!(round_minutes(Duration::seconds(-30)), 0);
        assert_eq!(round_minutes(Duration::seconds(-90)), -1);
    }

    #[test]
    fn minutes_until_negative_when_passed() {
        let now = at(10, 30, 0);
        assert_eq!(minutes_until(now, at(10, 40, 0)), 10);
        assert_eq!(minutes_until(now, at(10, 25, 0)), -5);
        assert_eq!(minutes_until(now, at(10, 30, 0)), 0);
    }

    #[test]
    fn delay_from_planned_and_estimated() {
        assert_eq!(delay_minutes(at(10, 0, 0), at(10, 1, 30)), 2);
        assert_eq!(delay_minutes(at(10, 0, 0), at(10, 0, 0)), 0);
        // Running early.
        assert_eq!(delay_minutes(at(10, 0, 0), at(9, 58, 0)), -2);
    }

    #[test]
    fn clock_in_display_offset() {
        let sydney = FixedOffset::east_opt(10 * 3600).unwrap();
        assert_eq!(format_clock(at(4, 30, 0), sydney), "14:30");
        assert_eq!(format_clock_seconds(at(4, 30, 15), sydney), "14:30:15");
    }

    #[test]
    fn clock_is_24_hour() {
        let sydney = FixedOffset::east_opt(10 * 3600).unwrap();
        // 21:05 UTC is 07:05 in Sydney the next day; no AM/PM marker.
        assert_eq!(format_clock(at(21, 5, 0), sydney), "07:05");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Rounding never strays more than half a minute from the true value,
        /// accounting for the upward tie bias.
        #[test]
        fn rounding_error_is_bounded(secs in -100_000i64..100_000) {
            let rounded = round_minutes(Duration::seconds(secs));
            let diff = rounded * 60 - secs;
            prop_assert!(diff >= -29, "rounded {rounded} from {secs}s");
            prop_assert!(diff <= 30, "rounded {rounded} from {secs}s");
        }

        /// Rounding is monotonic: a later departure never rounds earlier.
        #[test]
        fn rounding_is_monotonic(a in -100_000i64..100_000, b in -100_000i64..100_000) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(
                round_minutes(Duration::seconds(lo)) <= round_minutes(Duration::seconds(hi))
            );
        }
    }
}
