use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/dashboard", get(handlers::get_dashboard))
        .route("/api/field", post(handlers::set_field))
        .route("/api/submit", post(handlers::submit))
        .route("/api/edit", post(handlers::begin_edit))
        .route("/api/delete", post(handlers::delete_record))
        .route("/api/filter", post(handlers::set_filter))
        .with_state(state)
}
