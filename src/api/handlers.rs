//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{extract::State, response::Json};
use tracing::info;

use crate::state::AppState;
use super::responses::{ApiResponse, HealthResponse, StatusResponse};

/// Handle POST /start - Start or resume the stopwatch
pub async fn start_handler(State(state): State<Arc<AppState>>) -> Json<ApiResponse> {
    let outcome = state.start();
    info!("Start endpoint called - changed={}", outcome.changed);

    let message = if outcome.changed {
        "Stopwatch started"
    } else {
        "Stopwatch already running"
    };
    Json(ApiResponse::from_outcome(message.to_string(), outcome))
}

/// Handle POST /stop - Stop the stopwatch
pub async fn stop_handler(State(state): State<Arc<AppState>>) -> Json<ApiResponse> {
    let outcome = state.stop();
    info!("Stop endpoint called - changed={}", outcome.changed);

    let message = if outcome.changed {
        format!("Stopwatch stopped at {}", outcome.timer.display())
    } else {
        "Stopwatch already stopped".to_string()
    };
    Json(ApiResponse::from_outcome(message, outcome))
}

/// Handle POST /toggle - Start when stopped, stop when running
pub async fn toggle_handler(State(state): State<Arc<AppState>>) -> Json<ApiResponse> {
    let outcome = state.toggle();
    info!("Toggle endpoint called - running={}", outcome.timer.is_running);

    let message = if outcome.timer.is_running {
        "Stopwatch started".to_string()
    } else {
        format!("Stopwatch stopped at {}", outcome.timer.display())
    };
    Json(ApiResponse::from_outcome(message, outcome))
}

/// Handle POST /reset - Zero the stopwatch
pub async fn reset_handler(State(state): State<Arc<AppState>>) -> Json<ApiResponse> {
    let outcome = state.reset();
    info!("Reset endpoint called - changed={}", outcome.changed);

    Json(ApiResponse::from_outcome("Stopwatch reset".to_string(), outcome))
}

/// Handle GET /status - Return the current stopwatch reading
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let timer = state.tracker.read();
    let (last_action, last_action_time) = state.get_last_action();
    let cadence_ms = u64::try_from(state.tracker.cadence().as_millis()).unwrap_or(u64::MAX);

    Json(StatusResponse {
        timer,
        display: timer.display(),
        cadence_ms,
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    })
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
