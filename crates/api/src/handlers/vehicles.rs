use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use tracing::debug;

use crate::{
    dto::{CreateVehicleRequest, VehicleResponse},
    errors::{domain_error, ApiError, ErrorResponse},
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/vehicles", get(get_all_vehicles).post(register_vehicle))
        .route("/vehicles/{plate}", get(get_vehicle))
}

async fn get_all_vehicles(
    State(state): State<AppState>,
) -> Result<Json<Vec<VehicleResponse>>, ApiError> {
    let vehicles = state.get_vehicles.get_all().await.map_err(domain_error)?;
    debug!(count = vehicles.len(), "Vehicles retrieved successfully");
    Ok(Json(vehicles.into_iter().map(VehicleResponse::from).collect()))
}

async fn get_vehicle(
    State(state): State<AppState>,
    Path(plate): Path<String>,
) -> Result<Json<VehicleResponse>, ApiError> {
    match state.get_vehicles.get_by_plate(&plate).await {
        Ok(Some(vehicle)) => Ok(Json(vehicle.into())),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Vehicle {} not found", plate.trim().to_uppercase()),
            }),
        )),
        Err(e) => Err(domain_error(e)),
    }
}

async fn register_vehicle(
    State(state): State<AppState>,
    Json(req): Json<CreateVehicleRequest>,
) -> Result<(StatusCode, Json<VehicleResponse>), ApiError> {
    let vehicle = state
        .register_vehicle
        .execute(req.into())
        .await
        .map_err(domain_error)?;

    Ok((StatusCode::CREATED, Json(vehicle.into())))
}
