//! Stop search suggestions.

use serde::Serialize;

/// A candidate stop returned by name search.
///
/// Ephemeral: only used to populate the autocomplete dropdown. The id is
/// the provider-specific stop identifier accepted by the departures
/// endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StopSuggestion {
    pub id: String,
    pub name: String,
}
