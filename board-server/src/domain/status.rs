//! Departure status derivation.

use std::fmt;

/// Rider-facing status for a departure, derived from minutes-until and
/// delay.
///
/// Exactly one variant applies for any input; the branches are evaluated
/// in order, so an imminent departure reads "NOW" even when it is also
/// delayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepartureStatus {
    /// Departing within 2 minutes.
    Imminent,
    /// Running late by this many minutes.
    Delayed(i64),
    /// Departing within 5 minutes, on time.
    Soon(i64),
    /// Scheduled further out, on time.
    Scheduled(i64),
}

impl DepartureStatus {
    /// Derive the status from minutes until departure and delay minutes.
    pub fn derive(minutes_until: i64, delay_minutes: i64) -> Self {
        if minutes_until <= 2 {
            DepartureStatus::Imminent
        } else if delay_minutes > 0 {
            DepartureStatus::Delayed(delay_minutes)
        } else if minutes_until <= 5 {
            DepartureStatus::Soon(minutes_until)
        } else {
            DepartureStatus::Scheduled(minutes_until)
        }
    }

    /// CSS class used when rendering the status cell.
    pub fn css_class(&self) -> &'static str {
        match self {
            DepartureStatus::Imminent | DepartureStatus::Soon(_) => "status-soon",
            DepartureStatus::Delayed(_) => "status-delayed",
            DepartureStatus::Scheduled(_) => "status-ontime",
        }
    }
}

impl fmt::Display for DepartureStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DepartureStatus::Imminent => write!(f, "NOW"),
            DepartureStatus::Delayed(mins) => write!(f, "+{mins} min"),
            DepartureStatus::Soon(mins) | DepartureStatus::Scheduled(mins) => {
                write!(f, "{mins} min")
            }
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// The derivation is total and the branch order is respected.
        #[test]
        fn exactly_one_branch_applies(mins in -120i64..600, delay in -60i64..180) {
            let status = DepartureStatus::derive(mins, delay);
            match status {
                DepartureStatus::Imminent => prop_assert!(mins <= 2),
                DepartureStatus::Delayed(d) => {
                    prop_assert!(mins > 2 && delay > 0);
                    prop_assert_eq!(d, delay);
                }
                DepartureStatus::Soon(m) => {
                    prop_assert!(mins > 2 && mins <= 5 && delay <= 0);
                    prop_assert_eq!(m, mins);
                }
                DepartureStatus::Scheduled(m) => {
                    prop_assert!(mins > 5 && delay <= 0);
                    prop_assert_eq!(m, mins);
                }
            }
        }

        /// Every status renders a non-empty label.
        #[test]
        fn label_is_never_empty(mins in -120i64..600, delay in -60i64..180) {
            prop_assert!(!DepartureStatus::derive(mins, delay).to_string().is_empty());
        }
    }
}
