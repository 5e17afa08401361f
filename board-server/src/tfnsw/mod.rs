//! TfNSW Trip Planner API client.
//!
//! This module provides an HTTP client for the Transport for NSW Trip
//! Planner API (`departure_mon` and `stop_finder` endpoints) and the
//! conversion from its rapidJSON payloads to domain types.
//!
//! Key characteristics of the API:
//! - Nearly every field is optional; absent fields are omitted rather
//!   than sent as null
//! - Timestamps are RFC 3339 instants in UTC
//! - Authentication is an `Authorization: apikey <KEY>` header

mod client;
mod convert;
mod error;
mod types;

pub use client::{TfnswClient, TfnswConfig};
pub use convert::{normalize_departures, stop_suggestions};
pub use error::TfnswError;
pub use types::{
    DepartureMonitorResponse, RawStopEvent, StopFinderLocation, StopFinderResponse,
    Transportation,
};
