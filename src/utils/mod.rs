//! Utility functions module
//! 
//! Signal handling and display helpers used by the daemon and the API.

pub mod format;
pub mod signals;

// Re-export main functions
pub use format::format_elapsed;
pub use signals::shutdown_signal;
