use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/schedule", get(handlers::schedule::get_schedule))
        .route("/api/schedule/range", get(handlers::schedule::get_range))
        .route(
            "/api/schedule/layout",
            post(handlers::schedule::layout_sessions),
        )
}
