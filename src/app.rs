use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/habits", get(handlers::list_habits).post(handlers::create_habit))
        .route("/habits/summary", get(handlers::month_summary))
        .route("/habits/:id/mark", post(handlers::mark_habit))
        .route("/habits/:id", delete(handlers::delete_habit))
        .with_state(state)
}
