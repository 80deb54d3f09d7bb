use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

/// Creates all API routes with state
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .merge(handlers::vehicles::routes())
        .merge(handlers::users::routes())
        .merge(handlers::cells::routes())
        .merge(handlers::payments::routes())
        .with_state(state)
}
