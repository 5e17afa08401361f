//! Live departure board server.
//!
//! A web application that shows upcoming public-transport departures
//! for a chosen stop, refreshed every 30 seconds from the TfNSW
//! Trip Planner API.

pub mod board;
pub mod cache;
pub mod domain;
pub mod stops;
pub mod tfnsw;
pub mod web;
