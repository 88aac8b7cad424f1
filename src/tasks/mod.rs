//! Background tasks module
//! 
//! This module contains the periodic task that keeps a running tracker's
//! elapsed time fresh.

pub mod refresh;

// Re-export main functions
pub use refresh::refresh_task;
