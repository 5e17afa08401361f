//! Domain types for the departure board.
//!
//! This module contains the normalized departure record and the pure
//! derivation logic (time arithmetic, status ladder, line/platform
//! classification) that turns it into something displayable. Everything
//! here is deterministic: the current time is always a parameter, never
//! sampled internally.

mod departure;
mod lines;
mod status;
mod stop;
mod time;

pub use departure::Departure;
pub use lines::{contrasting_text_color, line_color, short_line_name, short_platform};
pub use status::DepartureStatus;
pub use stop::StopSuggestion;
pub use time::{delay_minutes, format_clock, format_clock_seconds, minutes_until, round_minutes};
