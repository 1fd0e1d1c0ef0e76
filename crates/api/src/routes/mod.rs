//! API route definitions.

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use finboard_shared::AppError;

use crate::AppState;

pub mod clients;
pub mod health;
pub mod ledger_entries;
pub mod payables;
pub mod receivables;
pub mod reports;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(clients::routes())
        .merge(payables::routes())
        .merge(receivables::routes())
        .merge(ledger_entries::routes())
        .merge(reports::routes())
}

/// Renders an application error as the standard JSON error body.
pub(crate) fn error_response(error: &AppError) -> Response {
    let status =
        StatusCode::from_u16(error.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    (
        status,
        Json(json!({
            "error": error.error_code(),
            "message": error.to_string(),
        })),
    )
        .into_response()
}
