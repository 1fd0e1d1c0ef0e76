//! Client routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::Deserialize;
use tracing::{error, info};

use finboard_db::ClientRepository;
use finboard_shared::{
    AppError,
    types::{PageRequest, PageResponse},
};

use crate::{AppState, routes::error_response};

/// Creates the client routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/clients", get(list_clients).post(create_client))
        .route("/clients/{id}", get(get_client))
}

/// Request body for creating a client.
#[derive(Debug, Deserialize)]
pub struct CreateClientRequest {
    /// Client name.
    pub name: String,
}

/// GET /clients - Lists clients with pagination.
#[axum::debug_handler]
async fn list_clients(
    State(state): State<AppState>,
    Query(page): Query<PageRequest>,
) -> impl IntoResponse {
    let repo = ClientRepository::new((*state.db).clone());

    match repo.list(&page).await {
        Ok((rows, total)) => {
            Json(PageResponse::new(rows, page.page, page.per_page, total)).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to list clients");
            error_response(&AppError::Database("Failed to list clients".to_string()))
        }
    }
}

/// POST /clients - Creates a client.
#[axum::debug_handler]
async fn create_client(
    State(state): State<AppState>,
    Json(payload): Json<CreateClientRequest>,
) -> impl IntoResponse {
    let name = payload.name.trim();
    if name.is_empty() {
        return error_response(&AppError::Validation(
            "Client name must not be empty".to_string(),
        ));
    }

    let repo = ClientRepository::new((*state.db).clone());

    match repo.create(name).await {
        Ok(client) => {
            info!(client_id = client.id, name = %client.name, "Client created");
            (StatusCode::CREATED, Json(client)).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to create client");
            error_response(&AppError::Database("Failed to create client".to_string()))
        }
    }
}

/// GET `/clients/{id}` - Gets a client by id.
#[axum::debug_handler]
async fn get_client(State(state): State<AppState>, Path(id): Path<i32>) -> impl IntoResponse {
    let repo = ClientRepository::new((*state.db).clone());

    match repo.find_by_id(id).await {
        Ok(Some(client)) => Json(client).into_response(),
        Ok(None) => error_response(&AppError::NotFound(format!("Client {id}"))),
        Err(e) => {
            error!(error = %e, "Failed to get client");
            error_response(&AppError::Database("Failed to get client".to_string()))
        }
    }
}

#[cfg(test)]
mod integration_tests {
    use std::sync::Arc;

    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode, header},
    };
    use http_body_util::BodyExt;
    use sea_orm::{ConnectOptions, Database};
    use serde_json::json;
    use tower::ServiceExt;

    use finboard_db::migration::{Migrator, MigratorTrait};

    use crate::{AppState, create_router};

    /// Builds a router over a fresh in-memory database.
    ///
    /// The pool is pinned to one connection; `SQLite` gives every in-memory
    /// connection its own database.
    async fn setup_app() -> Router {
        let mut options = ConnectOptions::new("sqlite::memory:".to_owned());
        options.max_connections(1);

        let db = Database::connect(options)
            .await
            .expect("Failed to connect to in-memory database");
        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");

        create_router(AppState { db: Arc::new(db) })
    }

    async fn send(
        app: Router,
        method: &str,
        uri: &str,
        body: Option<serde_json::Value>,
    ) -> (StatusCode, serde_json::Value) {
        let request = match body {
            Some(body) => Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => Request::builder().method(method).uri(uri).body(Body::empty()),
        }
        .expect("Failed to build request");

        let response = app.oneshot(request).await.expect("Request failed");
        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body")
            .to_bytes();
        let body = serde_json::from_slice(&bytes).expect("Body is not JSON");
        (status, body)
    }

    #[tokio::test]
    async fn test_create_then_get_client() {
        let app = setup_app().await;

        let (status, created) = send(
            app.clone(),
            "POST",
            "/api/v1/clients",
            Some(json!({"name": "Globex Corporation"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["name"], "Globex Corporation");

        let id = created["id"].as_i64().expect("Created client has an id");
        let (status, fetched) = send(app, "GET", &format!("/api/v1/clients/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched["name"], "Globex Corporation");
    }

    #[tokio::test]
    async fn test_blank_name_is_rejected() {
        let app = setup_app().await;

        let (status, body) = send(
            app,
            "POST",
            "/api/v1/clients",
            Some(json!({"name": "   "})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_missing_client_returns_not_found() {
        let app = setup_app().await;

        let (status, body) = send(app, "GET", "/api/v1/clients/42", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_list_reports_pagination_meta() {
        let app = setup_app().await;

        for i in 1..=3 {
            let (status, _) = send(
                app.clone(),
                "POST",
                "/api/v1/clients",
                Some(json!({"name": format!("Client {i}")})),
            )
            .await;
            assert_eq!(status, StatusCode::CREATED);
        }

        let (status, body) = send(app, "GET", "/api/v1/clients?page=1&per_page=2", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"].as_array().unwrap().len(), 2);
        assert_eq!(body["meta"]["total"], 3);
        assert_eq!(body["meta"]["total_pages"], 2);
        assert_eq!(body["meta"]["per_page"], 2);
    }
}
