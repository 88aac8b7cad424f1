//! State management module
//! 
//! This module contains the stopwatch state, the tracker that owns it, and
//! the shared server state handed to HTTP handlers.

pub mod app_state;
pub mod timer_state;
pub mod tracker;

// Re-export main types
pub use app_state::AppState;
pub use timer_state::TimerState;
pub use tracker::{ElapsedTimeTracker, WeakTracker, DEFAULT_CADENCE};
