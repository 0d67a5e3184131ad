pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::matching::handlers;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/score", post(handlers::handle_score))
        .route("/api/v1/match", post(handlers::handle_match))
        .route("/api/v1/batch-match", post(handlers::handle_batch_match))
        .fallback(not_found)
        .with_state(state)
}
