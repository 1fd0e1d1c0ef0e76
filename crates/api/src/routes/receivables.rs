//! Receivable routes.

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
use finboard_db::{ClientRepository, ReceivableRepository};
use finboard_shared::{
    AppError,
    types::{PageRequest, PageResponse},
};

use crate::{AppState, routes::error_response};

/// Creates the receivable routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/receivables", get(list_receivables).post(create_receivable))
        .route("/receivables/{id}", get(get_receivable))
}

/// Query parameters for listing receivables.
#[derive(Debug, Deserialize)]
pub struct ListReceivablesQuery {
    /// Page number (1-indexed).
    pub page: Option<u32>,
    /// Items per page.
    pub per_page: Option<u32>,
    /// Settlement status filter.
    pub status: Option<String>,
}

/// Request body for creating a receivable.
#[derive(Debug, Deserialize)]
pub struct CreateReceivableRequest {
    /// Owning client id.
    pub client_id: i32,
    /// Amount due.
    pub amount: Decimal,
    /// Due date.
    pub due_date: NaiveDate,
    /// Settlement status selector.
    pub status: String,
}

/// GET /receivables - Lists receivables with pagination and optional status filter.
#[axum::debug_handler]
async fn list_receivables(
    State(state): State<AppState>,
    Query(query): Query<ListReceivablesQuery>,
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

    let repo = ReceivableRepository::new((*state.db).clone());

    match repo.list(status, &page).await {
        Ok((rows, total)) => {
            Json(PageResponse::new(rows, page.page, page.per_page, total)).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to list receivables");
            error_response(&AppError::Database("Failed to list receivables".to_string()))
        }
    }
}

/// POST /receivables - Creates a receivable for an existing client.
#[axum::debug_handler]
async fn create_receivable(
    State(state): State<AppState>,
    Json(payload): Json<CreateReceivableRequest>,
) -> impl IntoResponse {
    if payload.amount < Decimal::ZERO {
        return error_response(&AppError::Validation(
            "Amount must not be negative".to_string(),
        ));
    }
    let status: SettlementStatus = match payload.status.parse() {
        Ok(status) => status,
        Err(e) => return error_response(&AppError::Validation(e.to_string())),
    };

    // Resolve the client first so a missing one maps to 404 rather than a
    // foreign key failure.
    let client_repo = ClientRepository::new((*state.db).clone());
    match client_repo.find_by_id(payload.client_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return error_response(&AppError::NotFound(format!("Client {}", payload.client_id)));
        }
        Err(e) => {
            error!(error = %e, "Failed to look up client");
            return error_response(&AppError::Database("Failed to look up client".to_string()));
        }
    }

    let repo = ReceivableRepository::new((*state.db).clone());

    match repo
        .create(payload.client_id, payload.amount, payload.due_date, status)
        .await
    {
        Ok(receivable) => {
            info!(
                receivable_id = receivable.id,
                client_id = receivable.client_id,
                "Receivable created"
            );
            (StatusCode::CREATED, Json(receivable)).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to create receivable");
            error_response(&AppError::Database(
                "Failed to create receivable".to_string(),
            ))
        }
    }
}

/// GET `/receivables/{id}` - Gets a receivable by id.
#[axum::debug_handler]
async fn get_receivable(State(state): State<AppState>, Path(id): Path<i32>) -> impl IntoResponse {
    let repo = ReceivableRepository::new((*state.db).clone());

    match repo.find_by_id(id).await {
        Ok(Some(receivable)) => Json(receivable).into_response(),
        Ok(None) => error_response(&AppError::NotFound(format!("Receivable {id}"))),
        Err(e) => {
            error!(error = %e, "Failed to get receivable");
            error_response(&AppError::Database("Failed to get receivable".to_string()))
        }
    }
}
