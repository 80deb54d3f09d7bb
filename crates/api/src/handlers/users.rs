use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};

use crate::{
    dto::{CreateUserRequest, UserResponse},
    errors::{domain_error, ApiError},
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route("/users", get(get_all_users).post(register_user))
}

async fn get_all_users(State(state): State<AppState>) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = state.get_users.get_all().await.map_err(domain_error)?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

async fn register_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let user = state
        .register_user
        .execute(req.name, req.email, req.role)
        .await
        .map_err(domain_error)?;

    Ok((StatusCode::CREATED, Json(user.into())))
}
