//! HTTP API server for stepform.

#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]
#![allow(missing_debug_implementations, reason = "Internal types")]

pub mod api_error;
mod handlers;
mod request_types;
mod response_types;

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use stepform_service::FormService;

/// Shared application state for all HTTP handlers.
pub struct AppState {
    /// Workflow for form sessions and answers
    pub form_service: Arc<FormService>,
    /// Allowed CORS origins; empty allows any origin
    pub cors_origins: Vec<String>,
}

impl AppState {
    #[must_use]
    pub const fn new(form_service: Arc<FormService>, cors_origins: Vec<String>) -> Self {
        Self { form_service, cors_origins }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = cors_layer(&state.cors_origins);
    Router::new()
        .route("/", get(handlers::forms::root))
        .route("/api/forms/init", post(handlers::forms::init_form))
        .route("/api/forms/save-answer", post(handlers::forms::save_answer))
        .route("/api/forms/submit", post(handlers::forms::submit_form))
        .route("/api/forms/{session_id}", get(handlers::forms::get_form_data))
        .layer(cors)
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        return layer.allow_origin(Any);
    }
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(origin = %origin, error = %e, "ignoring invalid CORS origin");
                None
            },
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(allowed))
}
