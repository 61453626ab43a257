pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::beds::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/beds/optimize", post(handlers::handle_optimize_bed))
        .route("/api/v1/plans/optimize", post(handlers::handle_optimize_plan))
        .with_state(state)
}
