//! Route definitions.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{home, setup_whatsapp, webhooks, AppState};

/// Builds the full application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .nest("/api", api_routes(state))
}

fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/setup_whatsapp", post(setup_whatsapp))
        .route("/webhooks", post(webhooks))
        .with_state(state)
}
