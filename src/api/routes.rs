use axum::{
    routing::{get, post, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Static content
        .route("/catalog", get(handlers::get_catalog))
        .route("/catalog/interests", get(handlers::get_interests))
        .route("/catalog/sports", get(handlers::get_sports))
        .route("/languages", get(handlers::get_languages))
        .route("/updates", get(handlers::get_updates))
        // Sessions
        .route("/sessions", post(handlers::create_session))
        .route(
            "/sessions/:id",
            get(handlers::get_session).delete(handlers::delete_session),
        )
        .route("/sessions/:id/section", put(handlers::select_section))
        .route("/sessions/:id/progress", post(handlers::record_progress))
        // Preferences
        .route(
            "/sessions/:id/preferences",
            put(handlers::update_preferences),
        )
        .route(
            "/sessions/:id/recommendations",
            get(handlers::get_recommendations),
        )
        // Chat
        .route("/sessions/:id/chat", put(handlers::set_chat_open))
        .route("/sessions/:id/chat/messages", post(handlers::send_message))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
