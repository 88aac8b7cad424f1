//! Main application state management

use std::{
    sync::{Mutex, PoisonError},
    time::{Duration, Instant},
};
use chrono::{DateTime, Utc};
use tracing::info;

use super::{ElapsedTimeTracker, TimerState};

/// Outcome of a command applied to the stopwatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandOutcome {
    /// Whether the command moved the timer to a different state
    pub changed: bool,
    pub timer: TimerState,
}

/// Main application state shared by all HTTP handlers
#[derive(Debug)]
pub struct AppState {
    /// The stopwatch driven by the API
    pub tracker: ElapsedTimeTracker,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    last_action: Mutex<Option<(String, DateTime<Utc>)>>,
}

impl AppState {
    /// Create a new AppState with a stopped tracker refreshing every `cadence`
    pub fn new(port: u16, host: String, cadence: Duration) -> Self {
        Self {
            tracker: ElapsedTimeTracker::new(cadence),
            start_time: Instant::now(),
            port,
            host,
            last_action: Mutex::new(None),
        }
    }

    /// Start or resume the stopwatch
    pub fn start(&self) -> CommandOutcome {
        let changed = self.tracker.start();
        self.finish("start", changed)
    }

    /// Stop the stopwatch
    pub fn stop(&self) -> CommandOutcome {
        let changed = self.tracker.stop();
        self.finish("stop", changed)
    }

    /// Flip between running and stopped; a toggle always transitions
    pub fn toggle(&self) -> CommandOutcome {
        let timer = self.tracker.toggle();
        self.record_action("toggle");
        CommandOutcome { changed: true, timer }
    }

    /// Zero the stopwatch
    pub fn reset(&self) -> CommandOutcome {
        let changed = self.tracker.reset();
        self.finish("reset", changed)
    }

    fn finish(&self, action: &str, changed: bool) -> CommandOutcome {
        if changed {
            self.record_action(action);
        } else {
            info!("{} had no effect, timer unchanged", action);
        }
        CommandOutcome {
            changed,
            timer: self.tracker.read(),
        }
    }

    fn record_action(&self, action: &str) {
        let mut last_action = self
            .last_action
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *last_action = Some((action.to_string(), Utc::now()));
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self
            .last_action
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        match last_action {
            Some((action, time)) => (Some(action), Some(time)),
            None => (None, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(0, "127.0.0.1".to_string(), Duration::from_millis(10))
    }

    #[tokio::test(start_paused = true)]
    async fn repeated_start_reports_no_change() {
        let state = state();
        assert!(state.start().changed);

        let outcome = state.start();
        assert!(!outcome.changed);
        assert!(outcome.timer.is_running);
    }

    #[tokio::test(start_paused = true)]
    async fn last_action_tracks_effective_commands_only() {
        let state = state();
        assert_eq!(state.get_last_action(), (None, None));

        state.start();
        tokio::time::sleep(Duration::from_millis(30)).await;
        state.stop();
        state.stop();

        let (action, time) = state.get_last_action();
        assert_eq!(action.as_deref(), Some("stop"));
        assert!(time.is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn reset_of_fresh_timer_is_unchanged() {
        let state = state();
        let outcome = state.reset();
        assert!(!outcome.changed);
        assert_eq!(outcome.timer, TimerState::new());
    }

    #[tokio::test(start_paused = true)]
    async fn reset_after_run_reports_change() {
        let state = state();
        state.toggle();
        tokio::time::sleep(Duration::from_millis(20)).await;
        state.toggle();

        let outcome = state.reset();
        assert!(outcome.changed);
        assert_eq!(outcome.timer, TimerState::new());
    }

    #[test]
    fn uptime_starts_in_seconds() {
        assert!(state().get_uptime().ends_with('s'));
    }
}
