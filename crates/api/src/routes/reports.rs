//! Report routes.
//!
//! Serves the report menu and renders any of the six dashboard reports
//! from a fresh finance snapshot.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::error;

use finboard_core::reports::{ReportKind, ReportService, report_menu};
use finboard_db::{ReportRepository, repositories::SnapshotError};
use finboard_shared::AppError;

use crate::{AppState, routes::error_response};

/// Creates the report routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/reports", get(list_reports))
        .route("/reports/{report}", get(get_report))
}

/// One entry of the report menu.
#[derive(Debug, Serialize)]
pub struct ReportMenuEntry {
    /// Selector used in the report URL.
    pub report: &'static str,
    /// Human readable title.
    pub title: &'static str,
}

/// Query parameters for report generation.
#[derive(Debug, Deserialize)]
pub struct ReportQuery {
    /// Reference date for period-relative reports (defaults to today).
    pub as_of: Option<NaiveDate>,
}

/// GET /reports - Lists the available reports in menu order.
#[axum::debug_handler]
async fn list_reports() -> Json<Vec<ReportMenuEntry>> {
    let entries = report_menu()
        .into_iter()
        .map(|(report, title)| ReportMenuEntry { report, title })
        .collect();

    Json(entries)
}

/// GET `/reports/{report}` - Generates one report and renders it as a view.
#[axum::debug_handler]
async fn get_report(
    State(state): State<AppState>,
    Path(selector): Path<String>,
    Query(query): Query<ReportQuery>,
) -> impl IntoResponse {
    let kind = match selector.parse::<ReportKind>() {
        Ok(kind) => kind,
        Err(_) => {
            return error_response(&AppError::NotFound(format!("Report '{selector}'")));
        }
    };

    let as_of = query.as_of.unwrap_or_else(|| chrono::Utc::now().date_naive());

    let repo = ReportRepository::new((*state.db).clone());
    let snapshot = match repo.load_snapshot().await {
        Ok(snapshot) => snapshot,
        Err(SnapshotError::Contract(e)) => {
            error!(error = %e, "Report input contract violated");
            return error_response(&AppError::Internal(
                "Stored data violates the report input contract".to_string(),
            ));
        }
        Err(SnapshotError::Database(e)) => {
            error!(error = %e, "Failed to load report snapshot");
            return error_response(&AppError::Database(
                "Failed to load report snapshot".to_string(),
            ));
        }
    };

    let view = ReportService::generate(kind, &snapshot, as_of).into_view();

    (StatusCode::OK, Json(view)).into_response()
}
