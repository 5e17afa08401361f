//! Conversion from TfNSW DTOs to domain types.
//!
//! This is the departure normalizer: it flattens the deeply-nested,
//! everything-optional stop events into `Departure` records with the
//! documented field defaults. No event is ever dropped for missing
//! optional fields; only a wholesale missing events collection yields an
//! empty board.

use chrono::{DateTime, Utc};

use crate::domain::{Departure, StopSuggestion, delay_minutes};

use super::types::{DepartureMonitorResponse, RawStopEvent, StopFinderResponse};

/// Normalize a departure monitor payload into ordered departures.
///
/// The order of the source events is preserved. A payload without a
/// `stopEvents` collection normalizes to an empty list, not an error.
pub fn normalize_departures(response: &DepartureMonitorResponse) -> Vec<Departure> {
    let events = response.stop_events.as_deref().unwrap_or(&[]);
    events.iter().map(normalize_event).collect()
}

/// Normalize a single raw stop event.
fn normalize_event(event: &RawStopEvent) -> Departure {
    let transportation = event.transportation.as_ref();
    let product = transportation.and_then(|t| t.product.as_ref());

    let line = transportation
        .and_then(|t| non_empty(t.number.clone()))
        .unwrap_or_else(|| "Unknown".to_string());

    let destination = transportation
        .and_then(|t| t.destination.as_ref())
        .and_then(|d| non_empty(d.name.clone()))
        .unwrap_or_else(|| "Unknown".to_string());

    let planned = parse_instant(event.departure_time_planned.as_deref());
    let estimated = parse_instant(event.departure_time_estimated.as_deref());

    // Delay requires both timestamps; otherwise it defaults to 0.
    let delay = match (planned, estimated) {
        (Some(p), Some(e)) => delay_minutes(p, e),
        _ => 0,
    };

    let platform = event
        .location
        .as_ref()
        .and_then(|l| l.properties.as_ref())
        .and_then(|p| p.platform.clone());

    let stopping_pattern = event
        .stop
        .as_ref()
        .and_then(|s| s.properties.as_ref())
        .and_then(|p| p.stop_type.clone())
        .unwrap_or_default();

    Departure {
        line,
        destination,
        departure_time: planned.or(estimated),
        platform,
        realtime: event.is_realtime_controlled,
        delay_minutes: delay,
        mode: mode_name(product.and_then(|p| p.class)),
        fleet_type: product.and_then(|p| p.name.clone()).unwrap_or_default(),
        stopping_pattern,
    }
}

/// Treat empty or whitespace-only strings as absent, so they take the
/// same defaults as omitted fields.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Parse an RFC 3339 timestamp, treating unparseable input as absent.
fn parse_instant(raw: Option<&str>) -> Option<DateTime<Utc>> {
    let raw = raw?;
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Map a numeric TfNSW product class to a mode name.
fn mode_name(class: Option<u32>) -> String {
    match class {
        Some(1) => "Train".to_string(),
        Some(2) => "Metro".to_string(),
        Some(4) => "Light Rail".to_string(),
        Some(5) => "Bus".to_string(),
        Some(7) => "Coach".to_string(),
        Some(9) => "Ferry".to_string(),
        Some(11) => "School Bus".to_string(),
        Some(other) => other.to_string(),
        None => "Unknown".to_string(),
    }
}

/// Extract stop suggestions from a stop finder payload.
///
/// Only locations of kind "stop" are usable as a departure monitor
/// target; anything without an id is skipped.
pub fn stop_suggestions(response: &StopFinderResponse) -> Vec<StopSuggestion> {
    let locations = response.locations.as_deref().unwrap_or(&[]);

    locations
        .iter()
        .filter(|l| l.kind.as_deref() == Some("stop"))
        .filter_map(|l| {
            let id = l.id.clone()?;
            let name = l
                .disassembled_name
                .clone()
                .or_else(|| l.name.clone())
                .unwrap_or_else(|| id.clone());
            Some(StopSuggestion { id, name })
        })
        .collect()
}
