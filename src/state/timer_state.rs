//! Timer state structure

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::utils::format_elapsed;

/// Snapshot of the stopwatch as seen by callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    /// Milliseconds accumulated since the last reset, excluding paused intervals
    pub elapsed_millis: u64,
    /// Whether the timer is currently accumulating time
    pub is_running: bool,
}

impl TimerState {
    /// Create a stopped timer state with zero elapsed time
    pub fn new() -> Self {
        Self {
            elapsed_millis: 0,
            is_running: false,
        }
    }

    /// Create a running timer state
    pub fn running(elapsed_millis: u64) -> Self {
        Self {
            elapsed_millis,
            is_running: true,
        }
    }

    /// Create a stopped timer state
    pub fn stopped(elapsed_millis: u64) -> Self {
        Self {
            elapsed_millis,
            is_running: false,
        }
    }

    pub fn elapsed(&self) -> Duration {
        Duration::from_millis(self.elapsed_millis)
    }

    /// Render the elapsed time as `MM:SS.cc`
    pub fn display(&self) -> String {
        format_elapsed(self.elapsed_millis)
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}
