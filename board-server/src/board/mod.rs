//! Board orchestration: fetch, normalize, render, refresh.

use std::future::Future;

use crate::domain::Departure;
use crate::tfnsw::TfnswError;

mod controller;
mod view;

pub use controller::{BoardConfig, BoardController, BoardError, BoardPhase, BoardSnapshot};
pub use view::{BoardView, DepartureRow};

/// Something the board can fetch departures from.
///
/// Implemented by the TfNSW client, its cached wrapper, and test mocks.
pub trait DepartureSource: Send + Sync + 'static {
    /// Fetch normalized departures for a stop.
    fn departures(
        &self,
        stop_id: &str,
    ) -> impl Future<Output = Result<Vec<Departure>, TfnswError>> + Send;
}
