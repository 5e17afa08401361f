//! Caching layer for TfNSW API responses.
//!
//! The board refreshes every 30 seconds and multiple browser tabs can
//! watch the same stop, so departure responses are cached briefly per
//! stop id. Stop-finder queries are not cached; the debounce already
//! limits their rate.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::board::DepartureSource;
use crate::domain::{Departure, StopSuggestion};
use crate::stops::StopSource;
use crate::tfnsw::{TfnswClient, TfnswError};

/// Configuration for the departures cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached stops.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(15),
            max_capacity: 100,
        }
    }
}

/// TfNSW client with short-lived departure caching.
#[derive(Clone)]
pub struct CachedTfnswClient<S = TfnswClient> {
    client: S,
    departures: MokaCache<String, Arc<Vec<Departure>>>,
}

impl<S> CachedTfnswClient<S> {
    /// Wrap a client with a fresh cache.
    pub fn new(client: S, config: &CacheConfig) -> Self {
        let departures = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { client, departures }
    }

    /// Access the underlying client for operations that bypass cache.
    pub fn client(&self) -> &S {
        &self.client
    }

    /// Number of stops currently cached.
    pub fn entry_count(&self) -> u64 {
        self.departures.entry_count()
    }

    /// Drop all cached entries.
    pub fn invalidate_all(&self) {
        self.departures.invalidate_all();
    }
}

impl<S: DepartureSource> CachedTfnswClient<S> {
    /// Get departures for a stop, from cache when fresh.
    ///
    /// Errors are never cached, so a failed fetch retries on the next
    /// call.
    pub async fn get_departures(&self, stop_id: &str) -> Result<Arc<Vec<Departure>>, TfnswError> {
        if let Some(entry) = self.departures.get(stop_id).await {
            return Ok(entry);
        }

        let departures = self.client.departures(stop_id).await?;
        let entry = Arc::new(departures);
        self.departures
            .insert(stop_id.to_string(), entry.clone())
            .await;

        Ok(entry)
    }
}

impl<S: DepartureSource> DepartureSource for CachedTfnswClient<S> {
    async fn departures(&self, stop_id: &str) -> Result<Vec<Departure>, TfnswError> {
        Ok((*self.get_departures(stop_id).await?).clone())
    }
}

impl<S: StopSource> StopSource for CachedTfnswClient<S> {
    async fn find_stops(&self, query: &str) -> Result<Vec<StopSuggestion>, TfnswError> {
        self.client.find_stops(query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use chrono::Utc;

    fn departure(destination: &str) -> Departure {
        Departure {
            line: "Metro North West Line".into(),
            destination: destination.into(),
            departure_time: Some(Utc::now()),
            platform: None,
            realtime: Some(true),
            delay_minutes: 0,
            mode: "Metro".into(),
            fleet_type: String::new(),
            stopping_pattern: String::new(),
        }
    }

    /// Echoes the stop id as the destination, counting upstream calls.
    #[derive(Clone)]
    struct Counting {
        calls: Arc<AtomicUsize>,
        fail: bool,
    }

    impl DepartureSource for Counting {
        async fn departures(&self, stop_id: &str) -> Result<Vec<Departure>, TfnswError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(TfnswError::RateLimited)
            } else {
                Ok(vec![departure(stop_id)])
            }
        }
    }

    fn cached(calls: &Arc<AtomicUsize>, fail: bool) -> CachedTfnswClient<Counting> {
        CachedTfnswClient::new(
            Counting {
                calls: Arc::clone(calls),
                fail,
            },
            &CacheConfig::default(),
        )
    }

    #[tokio::test]
    async fn repeated_fetch_hits_cache() {
        let calls = Arc::new(AtomicUsize::new(0));
        let client = cached(&calls, false);

        let first = client.get_departures("200060").await.unwrap();
        let second = client.get_departures("200060").await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(first, second);
        client.departures.run_pending_tasks().await;
        assert_eq!(client.entry_count(), 1);
    }

    #[tokio::test]
    async fn different_stops_fetch_separately() {
        let calls = Arc::new(AtomicUsize::new(0));
        let client = cached(&calls, false);

        let a = client.get_departures("200060").await.unwrap();
        let b = client.get_departures("200070").await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(a[0].destination, "200060");
        assert_eq!(b[0].destination, "200070");
    }

    #[tokio::test]
    async fn errors_are_not_cached() {
        let calls = Arc::new(AtomicUsize::new(0));
        let client = cached(&calls, true);

        assert!(client.get_departures("200060").await.is_err());
        assert!(client.get_departures("200060").await.is_err());

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(client.entry_count(), 0);
    }

    #[tokio::test]
    async fn invalidate_forces_refetch() {
        let calls = Arc::new(AtomicUsize::new(0));
        let client = cached(&calls, false);

        client.get_departures("200060").await.unwrap();
        client.invalidate_all();
        client.departures.run_pending_tasks().await;
        client.get_departures("200060").await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
