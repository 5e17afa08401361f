//! Board state machine and refresh timer.
//!
//! The controller is a shared singleton: it owns the current board
//! phase, runs loads against the departure source, and keeps a 30
//! second refresh timer alive while a stop is selected. Handlers take
//! snapshots of the state rather than borrowing it.

use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use chrono::{FixedOffset, Utc};
use tokio::task::JoinHandle;

use crate::stops::RecentStopStore;

use super::view::BoardView;
use super::DepartureSource;

/// Controller tuning knobs.
#[derive(Debug, Clone)]
pub struct BoardConfig {
    /// How often a displayed board re-fetches departures.
    pub refresh_interval: Duration,

    /// Timezone offset used for clock rendering.
    pub display_offset: FixedOffset,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            refresh_interval: Duration::from_secs(30),
            display_offset: FixedOffset::east_opt(10 * 3600).expect("valid offset"),
        }
    }
}

/// What the board is currently showing.
#[derive(Debug, Clone, PartialEq)]
pub enum BoardPhase {
    /// No stop selected yet.
    Idle,

    /// A load is in flight.
    Loading,

    /// Departures are on screen.
    Displaying(BoardView),

    /// The load succeeded but the stop has no upcoming departures.
    Empty,

    /// The load failed; the message is user-visible.
    Failed(String),
}

/// Point-in-time copy of the controller state.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardSnapshot {
    pub stop_id: Option<String>,
    pub phase: BoardPhase,
}

/// User-facing controller errors.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("Please enter a stop ID")]
    EmptyStop,
}

/// Shared handle to the board state machine.
///
/// Cloning is cheap; all clones observe the same state.
pub struct BoardController<S> {
    inner: Arc<Inner<S>>,
}

impl<S> Clone for BoardController<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

struct Inner<S> {
    source: S,
    store: Option<RecentStopStore>,
    config: BoardConfig,
    state: Mutex<BoardSnapshot>,

    /// Monotonic tag for loads; a finished load whose tag no longer
    /// matches has been superseded and its result is dropped.
    generation: AtomicU64,

    /// The active refresh timer, replaced wholesale on each submit.
    refresh_task: Mutex<Option<JoinHandle<()>>>,
}

impl<S: DepartureSource> BoardController<S> {
    pub fn new(source: S, store: Option<RecentStopStore>, config: BoardConfig) -> Self {
        Self {
            inner: Arc::new(Inner {
                source,
                store,
                config,
                state: Mutex::new(BoardSnapshot {
                    stop_id: None,
                    phase: BoardPhase::Idle,
                }),
                generation: AtomicU64::new(0),
                refresh_task: Mutex::new(None),
            }),
        }
    }

    /// Current state, copied out.
    pub fn snapshot(&self) -> BoardSnapshot {
        self.inner.state.lock().unwrap().clone()
    }

    /// The stop the board is tracking, if any.
    pub fn current_stop(&self) -> Option<String> {
        self.inner.state.lock().unwrap().stop_id.clone()
    }

    /// Select a stop and load its departures.
    ///
    /// Whitespace-only input is rejected without touching the current
    /// board. On success the stop is persisted (best effort) and the
    /// refresh timer restarts from zero.
    pub async fn submit_stop(&self, stop_id: &str) -> Result<(), BoardError> {
        let stop_id = stop_id.trim();
        if stop_id.is_empty() {
            return Err(BoardError::EmptyStop);
        }

        if let Some(store) = &self.inner.store {
            if let Err(e) = store.save(stop_id) {
                tracing::warn!("failed to persist last stop: {e}");
            }
        }

        let generation = self.begin_load(Some(stop_id.to_string()));
        self.load(stop_id, generation).await;
        self.restart_timer();
        Ok(())
    }

    /// Re-fetch departures for the current stop.
    ///
    /// No-ops when no stop is selected or a load is already in flight.
    pub async fn refresh(&self) {
        let stop_id = {
            let state = self.inner.state.lock().unwrap();
            if matches!(state.phase, BoardPhase::Loading) {
                return;
            }
            match &state.stop_id {
                Some(stop_id) => stop_id.clone(),
                None => return,
            }
        };

        let generation = self.begin_load(None);
        self.load(&stop_id, generation).await;
    }

    /// Mark the board as loading and claim a fresh generation tag.
    fn begin_load(&self, stop_id: Option<String>) -> u64 {
        let generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let mut state = self.inner.state.lock().unwrap();
        if let Some(stop_id) = stop_id {
            state.stop_id = Some(stop_id);
        }
        state.phase = BoardPhase::Loading;
        generation
    }

    async fn load(&self, stop_id: &str, generation: u64) {
        let phase = match self.inner.source.departures(stop_id).await {
            Ok(departures) if departures.is_empty() => BoardPhase::Empty,
            Ok(departures) => BoardPhase::Displaying(BoardView::build(
                &departures,
                Utc::now(),
                self.inner.config.display_offset,
            )),
            Err(e) => {
                tracing::error!("Error loading departures: {e}");
                BoardPhase::Failed(e.to_string())
            }
        };

        let mut state = self.inner.state.lock().unwrap();
        if self.inner.generation.load(Ordering::SeqCst) != generation {
            // A newer submit or refresh owns the board now.
            return;
        }
        state.phase = phase;
    }

    /// Replace the refresh timer with a new one anchored at "now".
    ///
    /// The interval's first tick fires immediately and is skipped,
    /// since the submit that started the timer just loaded.
    fn restart_timer(&self) {
        let controller = self.clone();
        let period = self.inner.config.refresh_interval;

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.tick().await;
            loop {
                ticker.tick().await;
                controller.refresh().await;
            }
        });

        let mut slot = self.inner.refresh_task.lock().unwrap();
        if let Some(old) = slot.replace(handle) {
            old.abort();
        }
    }
}
