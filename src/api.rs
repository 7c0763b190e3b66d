//! HTTP surface consumed by the UI layer.
//!
//! Two operations: list the newest records, create one. Validation
//! rejections map to 422 with a machine-readable code; database failures
//! map to a generic 500 so callers can tell bad input from an unreachable
//! system.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use crate::store::{self, StoreError};
use crate::validate::{validate_url, ValidationError};

#[derive(Clone)]
pub struct AppState {
    pub db: std::sync::Arc<sea_orm::DatabaseConnection>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/urls", get(list_urls).post(create_url))
        .route("/healthz", get(healthz))
        .with_state(state)
}

#[derive(serde::Deserialize)]
pub struct CreateUrlRequest {
    pub url: String,
    #[serde(default)]
    pub summary: Option<String>,
}

/// Wire representation of a stored record.
#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlRecord {
    pub id: uuid::Uuid,
    pub url: String,
    pub summary: Option<String>,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}

impl From<entity::url::Model> for UrlRecord {
    fn from(model: entity::url::Model) -> Self {
        UrlRecord {
            id: model.id,
            url: model.url,
            summary: model.summary,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Rejected(ValidationError),
    #[error("an unexpected error occurred")]
    Internal(#[source] sea_orm::DbErr),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Rejected(v) => ApiError::Rejected(v),
            StoreError::Db(e) => ApiError::Internal(e),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::Rejected(v) => (StatusCode::UNPROCESSABLE_ENTITY, v.code()),
            ApiError::Internal(e) => {
                error!("Database failure: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "internal")
            }
        };
        let body = Json(json!({
            "error": code,
            "message": self.to_string(),
        }));
        (status, body).into_response()
    }
}

async fn list_urls(State(state): State<AppState>) -> Result<Json<Vec<UrlRecord>>, ApiError> {
    let records = store::list(&state.db).await?;
    Ok(Json(records.into_iter().map(UrlRecord::from).collect()))
}

async fn create_url(
    State(state): State<AppState>,
    Json(req): Json<CreateUrlRequest>,
) -> Result<(StatusCode, Json<UrlRecord>), ApiError> {
    // Early rejection; the store runs the same check again as the
    // authoritative boundary.
    validate_url(&req.url).map_err(ApiError::Rejected)?;

    let record = store::insert(&state.db, &req.url, req.summary).await?;
    Ok((StatusCode::CREATED, Json(record.into())))
}

async fn healthz(State(state): State<AppState>) -> Response {
    match state.db.ping().await {
        Ok(()) => (StatusCode::OK, "ok").into_response(),
        Err(e) => {
            warn!("Health check failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "database unreachable").into_response()
        }
    }
}
