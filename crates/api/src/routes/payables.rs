//! Payable routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{error, info};

use finboard_core::domain::SettlementStatus;
use finboard_db::PayableRepository;
use finboard_shared::{
    AppError,
    types::{PageRequest, PageResponse},
};

use crate::{AppState, routes::error_response};

/// Creates the payable routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/payables", get(list_payables).post(create_payable))
        .route("/payables/{id}", get(get_payable))
}

/// Query parameters for listing payables.
#[derive(Debug, Deserialize)]
pub struct ListPayablesQuery {
    /// Page number (1-indexed).
    pub page: Option<u32>,
    /// Items per page.
    pub per_page: Option<u32>,
    /// Settlement status filter.
    pub status: Option<String>,
}

/// Request body for creating a payable.
#[derive(Debug, Deserialize)]
pub struct CreatePayableRequest {
    /// Supplier name.
    pub supplier: String,
    /// Amount owed.
    pub amount: Decimal,
    /// Due date.
    pub due_date: NaiveDate,
    /// Settlement status selector.
    pub status: String,
}

/// GET /payables - Lists payables with pagination and optional status filter.
#[axum::debug_handler]
async fn list_payables(
    State(state): State<AppState>,
    Query(query): Query<ListPayablesQuery>,
) -> impl IntoResponse {
    let status = match query.status.as_deref() {
        Some(raw) => match raw.parse::<SettlementStatus>() {
            Ok(status) => Some(status),
            Err(e) => return error_response(&AppError::Validation(e.to_string())),
        },
        None => None,
    };
    let page = PageRequest {
        page: query.page.unwrap_or(1),
        per_page: query.per_page.unwrap_or(20).min(100),
    };

    let repo = PayableRepository::new((*state.db).clone());

    match repo.list(status, &page).await {
        Ok((rows, total)) => {
            Json(PageResponse::new(rows, page.page, page.per_page, total)).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to list payables");
            error_response(&AppError::Database("Failed to list payables".to_string()))
        }
    }
}

/// POST /payables - Creates a payable.
#[axum::debug_handler]
async fn create_payable(
    State(state): State<AppState>,
    Json(payload): Json<CreatePayableRequest>,
) -> impl IntoResponse {
    let supplier = payload.supplier.trim();
    if supplier.is_empty() {
        return error_response(&AppError::Validation(
            "Supplier name must not be empty".to_string(),
        ));
    }
    if payload.amount < Decimal::ZERO {
        return error_response(&AppError::Validation(
            "Amount must not be negative".to_string(),
        ));
    }
    let status: SettlementStatus = match payload.status.parse() {
        Ok(status) => status,
        Err(e) => return error_response(&AppError::Validation(e.to_string())),
    };

    let repo = PayableRepository::new((*state.db).clone());

    match repo
        .create(supplier, payload.amount, payload.due_date, status)
        .await
    {
        Ok(payable) => {
            info!(
                payable_id = payable.id,
                supplier = %payable.supplier,
                "Payable created"
            );
            (StatusCode::CREATED, Json(payable)).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to create payable");
            error_response(&AppError::Database("Failed to create payable".to_string()))
        }
    }
}

/// GET `/payables/{id}` - Gets a payable by id.
#[axum::debug_handler]
async fn get_payable(State(state): State<AppState>, Path(id): Path<i32>) -> impl IntoResponse {
    let repo = PayableRepository::new((*state.db).clone());

    match repo.find_by_id(id).await {
        Ok(Some(payable)) => Json(payable).into_response(),
        Ok(None) => error_response(&AppError::NotFound(format!("Payable {id}"))),
        Err(e) => {
            error!(error = %e, "Failed to get payable");
            error_response(&AppError::Database("Failed to get payable".to_string()))
        }
    }
}
