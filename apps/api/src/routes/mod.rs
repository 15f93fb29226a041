pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::stages::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route("/api/topic", post(handlers::handle_topic))
        .route("/api/literature", post(handlers::handle_literature))
        .route("/api/structure", post(handlers::handle_structure))
        .route("/api/introduction", post(handlers::handle_introduction))
        .route("/api/abstract", post(handlers::handle_abstract))
        .route("/api/journal", post(handlers::handle_journal))
        .route("/api/review-response", post(handlers::handle_review_response))
        .with_state(state)
}
