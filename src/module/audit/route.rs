use axum::Router;
use axum::routing::{get, post};

use crate::app::AppState;
use crate::module::audit::controller;

pub fn register_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(controller::index))
        .route("/api/audit", post(controller::run_audit))
        .route("/api/history", get(controller::get_history))
        .fallback(controller::not_found)
        .with_state(state)
}
