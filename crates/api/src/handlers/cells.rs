use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use parkway_domain::{Cell, CellType, DomainError};

use crate::{
    dto::{CellResponse, CreateCellRequest},
    errors::{domain_error, ApiError},
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/cells", get(get_all_cells).post(register_cell))
        .route("/cells/{number}", get(get_cell))
}

async fn get_all_cells(State(state): State<AppState>) -> Result<Json<Vec<CellResponse>>, ApiError> {
    let cells = state.get_cells.get_all().await.map_err(domain_error)?;
    Ok(Json(cells.into_iter().map(CellResponse::from).collect()))
}

async fn get_cell(
    State(state): State<AppState>,
    Path(number): Path<String>,
) -> Result<Json<CellResponse>, ApiError> {
    state
        .get_cells
        .get_by_number(&number)
        .await
        .and_then(|cell| {
            cell.ok_or_else(|| {
                DomainError::NotFound(format!("Cell {} not found", Cell::normalize_number(&number)))
            })
        })
        .map(|cell| Json(CellResponse::from(cell)))
        .map_err(domain_error)
}

async fn register_cell(
    State(state): State<AppState>,
    Json(req): Json<CreateCellRequest>,
) -> Result<(StatusCode, Json<CellResponse>), ApiError> {
    let cell_type = match req.cell_type.as_deref() {
        Some(t) => t.parse::<CellType>().map_err(domain_error)?,
        None => CellType::default(),
    };

    let cell = state
        .register_cell
        .execute(req.number, cell_type)
        .await
        .map_err(domain_error)?;

    Ok((StatusCode::CREATED, Json(cell.into())))
}
