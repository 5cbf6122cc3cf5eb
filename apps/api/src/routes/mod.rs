pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::roadmap::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/roadmap", post(handlers::handle_generate_roadmap))
        .route(
            "/api/roadmap/cache",
            get(handlers::handle_cache_stats).delete(handlers::handle_clear_cache),
        )
        .with_state(state)
}
