//! Web layer for the departure board.
//!
//! Serves the board page, an HTML fragment the page polls, and JSON
//! endpoints for departures and stop autocomplete.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
pub use templates::*;
