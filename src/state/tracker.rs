//! Elapsed time tracking with pause/resume

use std::{
    sync::{Arc, Mutex, MutexGuard, PoisonError, Weak},
    time::Duration,
};
use tokio::{sync::watch, task::JoinHandle, time::Instant};
use tracing::{debug, info};

use super::TimerState;
use crate::tasks::refresh_task;

/// Refresh cadence used when none is configured
pub const DEFAULT_CADENCE: Duration = Duration::from_millis(10);

/// Shortest cadence a tracker will refresh at
pub const MIN_CADENCE: Duration = Duration::from_millis(1);

#[derive(Debug)]
struct Inner {
    state: TimerState,
    /// Time accumulated by earlier runs; the baseline instant of the current
    /// run is `anchor - accumulated_millis`
    accumulated_millis: u64,
    /// Instant the current run began, present only while running
    anchor: Option<Instant>,
    /// Bumped on every start and reset so stale refresh loops can tell they are stale
    generation: u64,
    refresh: Option<JoinHandle<()>>,
}

impl Inner {
    fn new() -> Self {
        Self {
            state: TimerState::new(),
            accumulated_millis: 0,
            anchor: None,
            generation: 0,
            refresh: None,
        }
    }

    /// Recompute elapsed time from the baseline when running
    fn sync_elapsed(&mut self) -> TimerState {
        if let (true, Some(anchor)) = (self.state.is_running, self.anchor) {
            let run_millis = u64::try_from(anchor.elapsed().as_millis()).unwrap_or(u64::MAX);
            let elapsed = self.accumulated_millis.saturating_add(run_millis);
            self.state = TimerState::running(self.state.elapsed_millis.max(elapsed));
        }
        self.state
    }

    fn cancel_refresh(&mut self) {
        if let Some(handle) = self.refresh.take() {
            handle.abort();
        }
    }
}

/// Freeze the current run at its recomputed elapsed time
fn end_run(inner: &mut Inner) -> TimerState {
    let elapsed_millis = inner.sync_elapsed().elapsed_millis;
    inner.state = TimerState::stopped(elapsed_millis);
    inner.accumulated_millis = elapsed_millis;
    inner.anchor = None;
    inner.cancel_refresh();

    info!("Timer stopped at {:?}", inner.state.elapsed());
    inner.state
}

#[derive(Debug)]
struct Shared {
    inner: Mutex<Inner>,
    updates_tx: watch::Sender<TimerState>,
    cadence: Duration,
}

/// Running/stopped stopwatch reporting elapsed milliseconds.
///
/// Cloning yields another handle to the same timer. While running, a
/// background task recomputes the elapsed time every `cadence` and publishes
/// it to subscribers; `read` recomputes on demand so it is never stale.
///
/// `start` spawns onto the current Tokio runtime and must be called from
/// within one.
#[derive(Debug, Clone)]
pub struct ElapsedTimeTracker {
    shared: Arc<Shared>,
}

/// Non-owning handle held by the refresh task
#[derive(Debug, Clone)]
pub struct WeakTracker {
    shared: Weak<Shared>,
}

impl WeakTracker {
    pub fn upgrade(&self) -> Option<ElapsedTimeTracker> {
        self.shared.upgrade().map(|shared| ElapsedTimeTracker { shared })
    }
}

impl ElapsedTimeTracker {
    /// Create a stopped tracker that refreshes every `cadence` while running.
    /// Cadences below `MIN_CADENCE` are raised to it.
    pub fn new(cadence: Duration) -> Self {
        let (updates_tx, _) = watch::channel(TimerState::new());

        Self {
            shared: Arc::new(Shared {
                inner: Mutex::new(Inner::new()),
                updates_tx,
                cadence: cadence.max(MIN_CADENCE),
            }),
        }
    }

    pub fn cadence(&self) -> Duration {
        self.shared.cadence
    }

    pub fn downgrade(&self) -> WeakTracker {
        WeakTracker {
            shared: Arc::downgrade(&self.shared),
        }
    }

    /// Subscribe to state updates from commands and refresh ticks
    pub fn subscribe(&self) -> watch::Receiver<TimerState> {
        self.shared.updates_tx.subscribe()
    }

    /// Start or resume the timer. Returns false if it was already running.
    pub fn start(&self) -> bool {
        let mut inner = self.lock();
        if inner.state.is_running {
            debug!("Start ignored, timer already running");
            return false;
        }

        let snapshot = self.begin_run(&mut inner);
        drop(inner);

        self.publish(snapshot);
        true
    }

    /// Stop the timer, freezing the elapsed time. Returns false if it was not running.
    pub fn stop(&self) -> bool {
        let mut inner = self.lock();
        if !inner.state.is_running {
            debug!("Stop ignored, timer not running");
            return false;
        }

        let snapshot = end_run(&mut inner);
        drop(inner);

        self.publish(snapshot);
        true
    }

    /// Zero the timer and stop any active refresh, whatever the prior state.
    /// Returns false if it was already stopped at zero.
    pub fn reset(&self) -> bool {
        let mut inner = self.lock();
        let changed = inner.state != TimerState::new();
        inner.cancel_refresh();
        inner.generation += 1;
        inner.state = TimerState::new();
        inner.accumulated_millis = 0;
        inner.anchor = None;
        drop(inner);

        info!("Timer reset");
        self.publish(TimerState::new());
        changed
    }

    /// Stop when running, start otherwise, and return the resulting state.
    /// The check and the transition happen under one lock, so every call
    /// flips the timer exactly once.
    pub fn toggle(&self) -> TimerState {
        let mut inner = self.lock();
        let snapshot = if inner.state.is_running {
            end_run(&mut inner)
        } else {
            self.begin_run(&mut inner)
        };
        drop(inner);

        self.publish(snapshot);
        snapshot
    }

    fn begin_run(&self, inner: &mut Inner) -> TimerState {
        inner.accumulated_millis = inner.state.elapsed_millis;
        inner.anchor = Some(Instant::now());
        inner.state = TimerState::running(inner.accumulated_millis);
        inner.generation += 1;

        let generation = inner.generation;
        let handle = tokio::spawn(refresh_task(self.downgrade(), generation));
        if let Some(stale) = inner.refresh.replace(handle) {
            stale.abort();
        }

        info!("Timer started at {}ms (run {})", inner.state.elapsed_millis, generation);
        inner.state
    }

    /// Current snapshot; elapsed time is recomputed if running
    pub fn read(&self) -> TimerState {
        self.lock().sync_elapsed()
    }

    /// Whether a refresh loop is currently attached to the timer
    pub fn is_refreshing(&self) -> bool {
        self.lock()
            .refresh
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// One refresh tick for run `generation`. Returns `None` once the run is over.
    pub(crate) fn refresh(&self, generation: u64) -> Option<TimerState> {
        let mut inner = self.lock();
        if !inner.state.is_running || inner.generation != generation {
            return None;
        }

        let snapshot = inner.sync_elapsed();
        drop(inner);

        self.publish(snapshot);
        Some(snapshot)
    }

    fn publish(&self, state: TimerState) {
        self.shared.updates_tx.send_replace(state);
    }

    // State is plain data left consistent at every unlock, so a poisoned lock is usable
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.shared
            .inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ElapsedTimeTracker {
    fn default() -> Self {
        Self::new(DEFAULT_CADENCE)
    }
}
