//! Application state for the web layer.

use crate::board::{BoardConfig, BoardController, DepartureSource};
use crate::stops::{RecentStopStore, SearchConfig, StopFinder, StopSource};

/// Shared application state.
///
/// Contains all the services needed to handle requests.
pub struct AppState<S> {
    /// Departure source used directly by the JSON API
    pub source: S,

    /// Board state machine and refresh timer
    pub controller: BoardController<S>,

    /// Debounced stop autocomplete
    pub finder: StopFinder<S>,
}

impl<S> Clone for AppState<S>
where
    S: Clone,
{
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            controller: self.controller.clone(),
            finder: self.finder.clone(),
        }
    }
}

impl<S> AppState<S>
where
    S: DepartureSource + StopSource + Clone,
{
    /// Create a new app state.
    pub fn new(
        source: S,
        store: Option<RecentStopStore>,
        board_config: BoardConfig,
        search_config: SearchConfig,
    ) -> Self {
        Self {
            controller: BoardController::new(source.clone(), store, board_config),
            finder: StopFinder::new(source.clone(), search_config),
            source,
        }
    }
}
