//! Debounced stop-name autocomplete.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use crate::domain::StopSuggestion;

use super::StopSource;

/// Autocomplete tuning knobs.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// How long a query waits before hitting the API.
    pub debounce: Duration,

    /// Queries shorter than this return nothing without a lookup.
    pub min_query_len: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(300),
            min_query_len: 2,
        }
    }
}

/// Shared handle to the autocomplete pipeline.
///
/// Concurrent queries race through a generation counter: only the
/// newest one reaches the API, earlier ones come back empty.
pub struct StopFinder<S> {
    inner: Arc<FinderInner<S>>,
}

impl<S> Clone for StopFinder<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

struct FinderInner<S> {
    source: S,
    config: SearchConfig,
    generation: AtomicU64,
}

impl<S: StopSource> StopFinder<S> {
    pub fn new(source: S, config: SearchConfig) -> Self {
        Self {
            inner: Arc::new(FinderInner {
                source,
                config,
                generation: AtomicU64::new(0),
            }),
        }
    }

    /// Suggest stops for a partial name.
    ///
    /// Waits out the debounce window first; if a newer query arrives in
    /// the meantime this one yields nothing. Lookup failures also yield
    /// nothing, since stale suggestions are worse than none.
    pub async fn suggest(&self, query: &str) -> Vec<StopSuggestion> {
        let query = query.trim();
        if query.chars().count() < self.inner.config.min_query_len {
            return Vec::new();
        }

        let generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::time::sleep(self.inner.config.debounce).await;
        if self.inner.generation.load(Ordering::SeqCst) != generation {
            return Vec::new();
        }

        match self.inner.source.find_stops(query).await {
            Ok(stops) => stops,
            Err(e) => {
                tracing::debug!("stop search failed: {e}");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    use crate::tfnsw::TfnswError;

    /// Echoes the query back as a single suggestion.
    struct Echo {
        calls: Arc<AtomicUsize>,
    }

    impl StopSource for Echo {
        async fn find_stops(&self, query: &str) -> Result<Vec<StopSuggestion>, TfnswError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![StopSuggestion {
                id: "200060".into(),
                name: query.to_string(),
            }])
        }
    }

    struct Failing;

    impl StopSource for Failing {
        async fn find_stops(&self, _query: &str) -> Result<Vec<StopSuggestion>, TfnswError> {
            Err(TfnswError::RateLimited)
        }
    }

    fn finder<S: StopSource>(source: S) -> StopFinder<S> {
        StopFinder::new(source, SearchConfig::default())
    }

    #[tokio::test(start_paused = true)]
    async fn short_queries_skip_the_api() {
        let calls = Arc::new(AtomicUsize::new(0));
        let finder = finder(Echo {
            calls: Arc::clone(&calls),
        });

        assert!(finder.suggest("").await.is_empty());
        assert!(finder.suggest("c").await.is_empty());
        assert!(finder.suggest("  c  ").await.is_empty());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn query_is_trimmed_before_lookup() {
        let calls = Arc::new(AtomicUsize::new(0));
        let finder = finder(Echo {
            calls: Arc::clone(&calls),
        });

        let stops = finder.suggest("  central  ").await;
        assert_eq!(stops.len(), 1);
        assert_eq!(stops[0].name, "central");
    }

    #[tokio::test(start_paused = true)]
    async fn superseded_query_yields_nothing() {
        let calls = Arc::new(AtomicUsize::new(0));
        let finder = finder(Echo {
            calls: Arc::clone(&calls),
        });

        let stale = finder.clone();
        let stale_task = tokio::spawn(async move { stale.suggest("cent").await });
        tokio::task::yield_now().await;

        let fresh = finder.suggest("central").await;
        assert_eq!(fresh.len(), 1);
        assert_eq!(fresh[0].name, "central");

        assert!(stale_task.await.unwrap().is_empty());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn lookup_errors_become_empty() {
        let finder = finder(Failing);
        assert!(finder.suggest("central").await.is_empty());
    }
}
