use axum::{extract::State, response::Json, routing::post, Router};

use crate::{
    dto::{PaymentResponse, QuoteRequest, QuoteResponse, RegisterPaymentRequest},
    errors::{domain_error, ApiError},
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/payments", post(register_payment))
        .route("/payments/quote", post(quote_fee))
}

async fn register_payment(
    State(state): State<AppState>,
    Json(req): Json<RegisterPaymentRequest>,
) -> Result<Json<PaymentResponse>, ApiError> {
    let receipt = state
        .register_payment
        .execute(req.into())
        .await
        .map_err(domain_error)?;

    Ok(Json(receipt.into()))
}

async fn quote_fee(
    State(state): State<AppState>,
    Json(req): Json<QuoteRequest>,
) -> Result<Json<QuoteResponse>, ApiError> {
    let quote = state
        .quote_fee
        .execute(&req.entry_time, &req.exit_time)
        .map_err(domain_error)?;

    Ok(Json(quote.into()))
}
