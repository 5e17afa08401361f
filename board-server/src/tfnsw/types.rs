//! TfNSW API response DTOs.
//!
//! These types map directly to the Trip Planner rapidJSON responses.
//! They use `Option` liberally because the API omits fields rather than
//! sending null values.

use serde::Deserialize;

/// Response from the `departure_mon` endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartureMonitorResponse {
    /// Upcoming stop events. Absent entirely when the stop id is unknown.
    pub stop_events: Option<Vec<RawStopEvent>>,
}

/// A single raw stop event (one departing service).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawStopEvent {
    /// Planned departure, RFC 3339.
    pub departure_time_planned: Option<String>,

    /// Realtime estimated departure, RFC 3339.
    pub departure_time_estimated: Option<String>,

    /// Whether this event carries realtime data.
    pub is_realtime_controlled: Option<bool>,

    /// The departing service.
    pub transportation: Option<Transportation>,

    /// The specific location (platform/wharf/bay) of the departure.
    pub location: Option<EventLocation>,

    /// Stop-level properties for this event.
    pub stop: Option<EventStop>,
}

/// Service information for a stop event.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transportation {
    /// Line/service identifier, e.g. "T1 North Shore & Western Line".
    pub number: Option<String>,

    /// Where the service is headed.
    pub destination: Option<TransportationDestination>,

    /// Product (mode) descriptor.
    pub product: Option<TransportationProduct>,
}

/// Destination of a service.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportationDestination {
    pub name: Option<String>,
}

/// Product descriptor: numeric mode class plus fleet name.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportationProduct {
    /// Numeric product class (1 train, 2 metro, 5 bus, 9 ferry, ...).
    pub class: Option<u32>,

    /// Fleet name, e.g. "Sydney Trains Network".
    pub name: Option<String>,
}

/// Departure location of a stop event.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventLocation {
    pub properties: Option<LocationProperties>,
}

/// Properties of a departure location.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationProperties {
    /// Platform/bay descriptor, e.g. "Platform 3".
    pub platform: Option<String>,
}

/// Stop-level data attached to an event.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventStop {
    pub properties: Option<StopProperties>,
}

/// Stop-level properties.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopProperties {
    /// Stopping-pattern descriptor, e.g. "Limited stops".
    pub stop_type: Option<String>,
}

/// Response from the `stop_finder` endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopFinderResponse {
    pub locations: Option<Vec<StopFinderLocation>>,
}

/// A candidate location from stop search.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopFinderLocation {
    /// Provider-specific stop id.
    pub id: Option<String>,

    /// Full name, e.g. "Central Station, Sydney".
    pub name: Option<String>,

    /// Short name without the locality suffix.
    pub disassembled_name: Option<String>,

    /// Location kind; departures only make sense for "stop".
    #[serde(rename = "type")]
    pub kind: Option<String>,
}
