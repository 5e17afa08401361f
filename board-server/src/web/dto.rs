//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Departure, StopSuggestion};

/// Form body for selecting a stop.
#[derive(Debug, Deserialize)]
pub struct SubmitStopRequest {
    /// TfNSW stop id, e.g. "200060" for Central
    pub stop_id: String,
}

/// Query for the departures JSON API.
#[derive(Debug, Deserialize)]
pub struct DeparturesRequest {
    pub stop_id: String,
}

/// Query for stop autocomplete.
#[derive(Debug, Deserialize)]
pub struct StopSearchRequest {
    /// Partial stop name
    pub q: String,
}

/// Departures for a stop, in API order.
#[derive(Debug, Serialize)]
pub struct DeparturesResponse {
    pub departures: Vec<Departure>,
}

/// Stop autocomplete results.
#[derive(Debug, Serialize)]
pub struct StopSearchResponse {
    pub stops: Vec<StopSuggestion>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
