//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::{app_state::CommandOutcome, TimerState};

/// API response structure for command endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    /// Whether the command changed the timer
    pub changed: bool,
    pub timestamp: DateTime<Utc>,
    pub timer: TimerState,
}

impl ApiResponse {
    /// Create a response describing the timer after a command
    pub fn from_outcome(message: String, outcome: CommandOutcome) -> Self {
        let status = if outcome.timer.is_running { "running" } else { "stopped" };
        Self {
            status: status.to_string(),
            message,
            changed: outcome.changed,
            timestamp: Utc::now(),
            timer: outcome.timer,
        }
    }
}

/// Status response with the rendered stopwatch face
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub timer: TimerState,
    /// Elapsed time as `MM:SS.cc`
    pub display: String,
    pub cadence_ms: u64,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
