//! HTTP API module
//!
//! This module contains all HTTP endpoint handlers and response structures.

pub mod handlers;
pub mod responses;

use std::sync::Arc;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use handlers::*;

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/start", post(start_handler))
        .route("/stop", post(stop_handler))
        .route("/toggle", post(toggle_handler))
        .route("/reset", post(reset_handler))
        .route("/status", get(status_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum::{
        body::{to_bytes, Body},
        http::{Method, Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;

    fn router() -> Router {
        let state = Arc::new(AppState::new(20554, "127.0.0.1".to_string(), Duration::from_millis(10)));
        create_router(state)
    }

    async fn call(app: &Router, method: Method, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test(start_paused = true)]
    async fn start_stop_status_flow() {
        let app = router();

        let (status, body) = call(&app, Method::POST, "/start").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "running");
        assert_eq!(body["changed"], true);
        assert_eq!(body["timer"]["is_running"], true);

        tokio::time::sleep(Duration::from_millis(1_250)).await;

        let (_, body) = call(&app, Method::POST, "/stop").await;
        assert_eq!(body["status"], "stopped");
        let elapsed = body["timer"]["elapsed_millis"].as_u64().unwrap();
        assert!((1_250..1_260).contains(&elapsed), "elapsed {}", elapsed);

        let (status, body) = call(&app, Method::GET, "/status").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["timer"]["elapsed_millis"].as_u64(), Some(elapsed));
        assert_eq!(body["display"], "00:01.25");
        assert_eq!(body["cadence_ms"], 10);
        assert_eq!(body["last_action"], "stop");
    }

    #[tokio::test(start_paused = true)]
    async fn repeated_stop_is_reported_unchanged() {
        let app = router();

        let (_, body) = call(&app, Method::POST, "/stop").await;
        assert_eq!(body["changed"], false);
        assert_eq!(body["message"], "Stopwatch already stopped");
        assert_eq!(body["timer"]["elapsed_millis"], 0);
    }

    #[tokio::test(start_paused = true)]
    async fn toggle_then_reset() {
        let app = router();

        let (_, body) = call(&app, Method::POST, "/toggle").await;
        assert_eq!(body["status"], "running");
        tokio::time::sleep(Duration::from_millis(40)).await;

        let (_, body) = call(&app, Method::POST, "/reset").await;
        assert_eq!(body["status"], "stopped");
        assert_eq!(body["changed"], true);
        assert_eq!(body["timer"]["elapsed_millis"], 0);
        assert_eq!(body["timer"]["is_running"], false);
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let (status, body) = call(&router(), Method::GET, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn commands_require_post() {
        let request = Request::builder()
            .method(Method::GET)
            .uri("/start")
            .body(Body::empty())
            .unwrap();
        let response = router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
