//! The normalized departure record.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One upcoming departure from the monitored stop.
///
/// This is the stable internal record derived from a raw TfNSW stop
/// event. It is a value type: built fresh on every fetch, never mutated,
/// and discarded on the next refresh. The sequence of departures always
/// preserves the order of the source events.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Departure {
    /// Raw line/service identifier, e.g. "T1 North Shore Line" or "333".
    /// "Unknown" if the API omitted it.
    pub line: String,

    /// Destination name. "Unknown" if absent.
    pub destination: String,

    /// Planned departure time, falling back to the estimated time.
    /// `None` only when both are absent (unschedulable event).
    pub departure_time: Option<DateTime<Utc>>,

    /// Raw platform/bay descriptor, e.g. "Platform 3" or "Stop B".
    pub platform: Option<String>,

    /// Whether the event carries realtime data.
    pub realtime: Option<bool>,

    /// Estimated minus planned departure in whole minutes; 0 when either
    /// timestamp is missing. Negative means running early.
    pub delay_minutes: i64,

    /// Transport mode derived from the product class. "Unknown" if absent.
    pub mode: String,

    /// Descriptive fleet text, e.g. "Sydney Trains Network". Empty if absent.
    pub fleet_type: String,

    /// Stopping-pattern descriptor. Empty if absent.
    pub stopping_pattern: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn serializes_for_json_endpoint() {
        let dep = Departure {
            line: "T1".into(),
            destination: "Berowra".into(),
            departure_time: Some(Utc.with_ymd_and_hms(2025, 6, 1, 4, 30, 0).unwrap()),
            platform: Some("Platform 2".into()),
            realtime: Some(true),
            delay_minutes: 3,
            mode: "Train".into(),
            fleet_type: String::new(),
            stopping_pattern: String::new(),
        };

        let json = serde_json::to_value(&dep).unwrap();
        assert_eq!(json["line"], "T1");
        assert_eq!(json["delay_minutes"], 3);
        assert_eq!(json["departure_time"], "2025-06-01T04:30:00Z");
    }
}
