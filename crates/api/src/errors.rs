use axum::{http::StatusCode, Json};
use parkway_domain::DomainError;
use serde::Serialize;
use tracing::warn;

#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

pub fn status_for(err: &DomainError) -> StatusCode {
    match err {
        DomainError::Validation(_) | DomainError::MalformedTime(_) => StatusCode::BAD_REQUEST,
        DomainError::NotFound(_) => StatusCode::NOT_FOUND,
        DomainError::Conflict(_) => StatusCode::CONFLICT,
    }
}

pub fn domain_error(err: DomainError) -> ApiError {
    let status = status_for(&err);
    warn!(status = status.as_u16(), error = %err, "Request rejected");

    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}
