//! Askama templates for the web frontend.

use askama::Template;

// BoardPhase is matched on inside the board fragment template.
use crate::board::{BoardPhase, BoardSnapshot};

/// Full board page with the stop form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    /// Stop id to prefill the form with, if one is already selected.
    pub stop_id: Option<String>,
}

/// Board fragment the page polls (no base.html).
#[derive(Template)]
#[template(path = "board.html")]
pub struct BoardTemplate {
    pub snapshot: BoardSnapshot,
}
