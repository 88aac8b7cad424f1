//! stopwatchd - A pausable stopwatch served over HTTP
//! 
//! This library provides an elapsed time tracker with start, stop and reset
//! semantics, the background refresh that keeps it current, and an HTTP API
//! that drives it.

pub mod config;
pub mod state;
pub mod api;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use state::{AppState, ElapsedTimeTracker, TimerState};
pub use api::create_router;
pub use utils::signals::shutdown_signal;
