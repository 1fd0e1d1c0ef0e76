//! Ledger entry routes.

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

use finboard_core::domain::EntryKind;
use finboard_db::LedgerEntryRepository;
use finboard_shared::{
    AppError,
    types::{PageRequest, PageResponse},
};

use crate::{AppState, routes::error_response};

/// Creates the ledger entry routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/ledger-entries",
            get(list_ledger_entries).post(create_ledger_entry),
        )
        .route("/ledger-entries/{id}", get(get_ledger_entry))
}

/// Query parameters for listing ledger entries.
#[derive(Debug, Deserialize)]
pub struct ListLedgerEntriesQuery {
    /// Page number (1-indexed).
    pub page: Option<u32>,
    /// Items per page.
    pub per_page: Option<u32>,
    /// Entry kind filter.
    pub kind: Option<String>,
}

/// Request body for recording a ledger entry.
#[derive(Debug, Deserialize)]
pub struct CreateLedgerEntryRequest {
    /// Entry kind selector.
    pub kind: String,
    /// Entry amount.
    pub amount: Decimal,
    /// Date the entry applies to.
    pub date: NaiveDate,
}

/// GET /ledger-entries - Lists ledger entries with pagination and optional kind filter.
#[axum::debug_handler]
async fn list_ledger_entries(
    State(state): State<AppState>,
    Query(query): Query<ListLedgerEntriesQuery>,
) -> impl IntoResponse {
    let kind = match query.kind.as_deref() {
        Some(raw) => match raw.parse::<EntryKind>() {
            Ok(kind) => Some(kind),
            Err(e) => return error_response(&AppError::Validation(e.to_string())),
        },
        None => None,
    };
    let page = PageRequest {
        page: query.page.unwrap_or(1),
        per_page: query.per_page.unwrap_or(20).min(100),
    };

    let repo = LedgerEntryRepository::new((*state.db).clone());

    match repo.list(kind, &page).await {
        Ok((rows, total)) => {
            Json(PageResponse::new(rows, page.page, page.per_page, total)).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to list ledger entries");
            error_response(&AppError::Database(
                "Failed to list ledger entries".to_string(),
            ))
        }
    }
}

/// POST /ledger-entries - Records a ledger entry.
#[axum::debug_handler]
async fn create_ledger_entry(
    State(state): State<AppState>,
    Json(payload): Json<CreateLedgerEntryRequest>,
) -> impl IntoResponse {
    if payload.amount < Decimal::ZERO {
        return error_response(&AppError::Validation(
            "Amount must not be negative".to_string(),
        ));
    }
    let kind: EntryKind = match payload.kind.parse() {
        Ok(kind) => kind,
        Err(e) => return error_response(&AppError::Validation(e.to_string())),
    };

    let repo = LedgerEntryRepository::new((*state.db).clone());

    match repo.create(kind, payload.amount, payload.date).await {
        Ok(entry) => {
            info!(entry_id = entry.id, kind = %entry.kind, "Ledger entry recorded");
            (StatusCode::CREATED, Json(entry)).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to record ledger entry");
            error_response(&AppError::Database(
                "Failed to record ledger entry".to_string(),
            ))
        }
    }
}

/// GET `/ledger-entries/{id}` - Gets a ledger entry by id.
#[axum::debug_handler]
async fn get_ledger_entry(State(state): State<AppState>, Path(id): Path<i32>) -> impl IntoResponse {
    let repo = LedgerEntryRepository::new((*state.db).clone());

    match repo.find_by_id(id).await {
        Ok(Some(entry)) => Json(entry).into_response(),
        Ok(None) => error_response(&AppError::NotFound(format!("Ledger entry {id}"))),
        Err(e) => {
            error!(error = %e, "Failed to get ledger entry");
            error_response(&AppError::Database("Failed to get ledger entry".to_string()))
        }
    }
}
