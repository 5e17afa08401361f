//! View models for the rendered board.

use chrono::{DateTime, FixedOffset, Utc};

use crate::domain::{
    Departure, DepartureStatus, contrasting_text_color, format_clock, format_clock_seconds,
    line_color, minutes_until, short_line_name, short_platform,
};

/// Placeholder clock string for a departure with no usable time.
const NO_TIME_CLOCK: &str = "--:--";

/// A fully rendered board: one row per departure, source order preserved.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardView {
    /// Rows in the order the API returned them.
    pub rows: Vec<DepartureRow>,

    /// `HH:MM:SS` stamp of when this view was built.
    pub updated: String,
}

impl BoardView {
    /// Build a view from normalized departures.
    ///
    /// `now` is sampled once by the caller and shared by every row, so a
    /// single render pass is internally consistent.
    pub fn build(departures: &[Departure], now: DateTime<Utc>, offset: FixedOffset) -> Self {
        let rows = departures
            .iter()
            .map(|dep| DepartureRow::from_departure(dep, now, offset))
            .collect();

        Self {
            rows,
            updated: format_clock_seconds(now, offset),
        }
    }
}

/// One row of the board, ready for the template.
#[derive(Debug, Clone, PartialEq)]
pub struct DepartureRow {
    /// `HH:MM` departure clock, or "--:--" when the event has no time.
    pub clock: String,

    /// Status text: "NOW", "+N min", or "N min".
    pub status_label: String,

    /// CSS class for the status cell.
    pub status_class: &'static str,

    /// Short line code, e.g. "T1".
    pub line_code: String,

    /// Line badge background color.
    pub line_color: &'static str,

    /// Legible text color for the line badge.
    pub text_color: &'static str,

    pub destination: String,

    /// Fleet/stopping-pattern annotation, e.g. " • Sydney Trains Network • Limited stops".
    pub info: String,

    /// Short platform label, "-" when unknown.
    pub platform: String,

    /// Whether the row is backed by realtime data.
    pub realtime: bool,
}

impl DepartureRow {
    /// Derive the presentation of a single departure.
    pub fn from_departure(dep: &Departure, now: DateTime<Utc>, offset: FixedOffset) -> Self {
        let (clock, status_label, status_class) = match dep.departure_time {
            Some(t) => {
                let status = DepartureStatus::derive(minutes_until(now, t), dep.delay_minutes);
                (format_clock(t, offset), status.to_string(), status.css_class())
            }
            // Unschedulable event: still rendered, with placeholders.
            None => (NO_TIME_CLOCK.to_string(), "-".to_string(), "status-ontime"),
        };

        let color = line_color(&dep.line);

        let mut info = String::new();
        if !dep.fleet_type.is_empty() {
            info.push_str(" • ");
            info.push_str(&dep.fleet_type);
        }
        if !dep.stopping_pattern.is_empty() {
            info.push_str(" • ");
            info.push_str(&dep.stopping_pattern);
        }

        Self {
            clock,
            status_label,
            status_class,
            line_code: short_line_name(&dep.line),
            line_color: color,
            text_color: contrasting_text_color(color),
            destination: dep.destination.clone(),
            info,
            platform: short_platform(dep.platform.as_deref().unwrap_or("")),
            realtime: dep.realtime.unwrap_or(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn sydney() -> FixedOffset {
        FixedOffset::east_opt(10 * 3600).unwrap()
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 4, 30, 0).unwrap()
    }

    fn departure(mins_out: i64, delay: i64) -> Departure {
        Departure {
            line: "T1 North Shore & Western Line".into(),
            destination: "Berowra".into(),
            departure_time: Some(now() + Duration::minutes(mins_out)),
            platform: Some("Platform 3".into()),
            realtime: Some(true),
            delay_minutes: delay,
            mode: "Train".into(),
            fleet_type: "Sydney Trains Network".into(),
            stopping_pattern: "Limited stops".into(),
        }
    }

    #[test]
    fn row_derives_all_presentation_fields() {
        let row = DepartureRow::from_departure(&departure(10, 3), now(), sydney());

        assert_eq!(row.clock, "14:40");
        assert_eq!(row.status_label, "+3 min");
        assert_eq!(row.status_class, "status-delayed");
        assert_eq!(row.line_code, "T1");
        assert_eq!(row.line_color, "#F99D1C");
        assert_eq!(row.text_color, "#000000");
        assert_eq!(row.destination, "Berowra");
        assert_eq!(row.info, " • Sydney Trains Network • Limited stops");
        assert_eq!(row.platform, "3");
        assert!(row.realtime);
    }

    #[test]
    fn row_without_time_gets_placeholders() {
        let mut dep = departure(10, 0);
        dep.departure_time = None;
        dep.platform = None;
        dep.fleet_type = String::new();
        dep.stopping_pattern = String::new();
        dep.realtime = None;

        let row = DepartureRow::from_departure(&dep, now(), sydney());
        assert_eq!(row.clock, "--:--");
        assert_eq!(row.status_label, "-");
        assert_eq!(row.platform, "-");
        assert_eq!(row.info, "");
        assert!(!row.realtime);
    }

    #[test]
    fn imminent_row_shows_now() {
        let row = DepartureRow::from_departure(&departure(1, 5), now(), sydney());
        assert_eq!(row.status_label, "NOW");
        assert_eq!(row.status_class, "status-soon");
    }

    #[test]
    fn view_preserves_order_and_stamps_update_time() {
        let deps = vec![departure(20, 0), departure(5, 0), departure(12, 0)];
        let view = BoardView::build(&deps, now(), sydney());

        assert_eq!(view.rows.len(), 3);
        let labels: Vec<_> = view.rows.iter().map(|r| r.status_label.clone()).collect();
        assert_eq!(labels, vec!["20 min", "5 min", "12 min"]);
        assert_eq!(view.updated, "14:30:00");
    }

    #[test]
    fn empty_departures_build_empty_view() {
        let view = BoardView::build(&[], now(), sydney());
        assert!(view.rows.is_empty());
    }
}
