pub mod health;


use axum::{
    routing::{get, post},
    Router,
};

use crate::applications::handlers as applications;
use crate::scan::handlers as scan;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // ATS list
        .route(
            "/api/v1/applications",
            get(applications::handle_list_applications),
        )
        // Resume scan
        .route("/api/v1/resume/scan", post(scan::handle_scan))
        .route("/api/v1/resume/scan/:id", get(scan::handle_get_scan))
        .route("/api/v1/match/score", post(scan::handle_score_preview))
        .with_state(state)
}
