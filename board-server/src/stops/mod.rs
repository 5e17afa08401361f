//! Stop lookup: name search with debouncing, and last-stop persistence.

use std::future::Future;

use crate::domain::StopSuggestion;
use crate::tfnsw::TfnswError;

mod error;
mod finder;
mod recent;

pub use error::StoreError;
pub use finder::{SearchConfig, StopFinder};
pub use recent::RecentStopStore;

/// Something stop suggestions can be fetched from.
pub trait StopSource: Send + Sync + 'static {
    /// Search stops by free-text name.
    fn find_stops(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<StopSuggestion>, TfnswError>> + Send;
}
