use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeFile;
use tower_http::trace::TraceLayer;

use super::chat;
use super::health;
use super::state::AppState;

/// Create the full router with application state.
/// CORS is wide open so the chat widget can iframe across domains.
pub fn create_router_with_state(state: AppState) -> Router {
    Router::new()
        .route("/chat", post(chat::chat))
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        .route_service("/", ServeFile::new("static/chat.html"))
        .route_service("/widget-test", ServeFile::new("static/widget-test.html"))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
