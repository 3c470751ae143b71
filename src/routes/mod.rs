//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the console's HTTP surface under a single Axum router:
//! the dev mock login at `/login`, the navigation table and welcome-page
//! fixtures under `/api`, and the proxy routes that front the detection
//! backend. CORS is wide open — the console is the same-origin dev server
//! for a browser frontend.

pub mod auth;
pub mod dashboard;
pub mod detect;
pub mod menu;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// The full console router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/login", post(auth::login))
        .route("/api/routes", get(menu::list_routes))
        .route("/api/dashboard", get(dashboard::dashboard_data))
        .route("/api/storage", get(detect::list_storage))
        .route("/api/files", delete(detect::delete_files))
        .route("/api/prediction", post(detect::predict_files))
        .route("/api/prediction/{file_id}", get(detect::list_predictions))
        .route("/api/validation", post(detect::validate_weights))
        .route("/api/validation/{weights_id}", get(detect::list_validations))
        .route("/api/training", post(detect::start_training))
        .route("/api/training/{pid}", delete(detect::stop_training))
        .route("/api/training/{pid}/log", get(detect::training_log))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
