//! Detection proxy routes — thin handlers onto the backend client.
//!
//! Handlers stay at the protocol-translation level: extract, forward, map
//! errors. Backend JSON bodies pass through untouched; a non-2xx backend
//! status is forwarded, transport failures become 502.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::Deserialize;
use serde_json::Value;

use crate::detect::{DeleteFilesRequest, DetectError, Page, PredictRequest, StorageFilter, ValidateRequest};
use crate::state::AppState;

pub(crate) fn detect_error_to_status(err: &DetectError) -> StatusCode {
    match err {
        DetectError::Response { status, .. } => {
            StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
        }
        DetectError::Request(_) | DetectError::Parse(_) | DetectError::HttpClientBuild(_) => {
            StatusCode::BAD_GATEWAY
        }
    }
}

fn proxied(result: Result<Value, DetectError>, op: &'static str) -> Result<Json<Value>, StatusCode> {
    result.map(Json).map_err(|e| {
        tracing::warn!(error = %e, op, "detection backend call failed");
        detect_error_to_status(&e)
    })
}

// =============================================================================
// FILE STORAGE
// =============================================================================

/// `GET /api/storage` — list stored files, optionally filtered.
pub async fn list_storage(
    State(state): State<AppState>,
    Query(filter): Query<StorageFilter>,
) -> Result<Json<Value>, StatusCode> {
    proxied(state.detect.storage(&filter).await, "storage")
}

/// `DELETE /api/files` — delete files by id, one unit.
pub async fn delete_files(
    State(state): State<AppState>,
    Json(request): Json<DeleteFilesRequest>,
) -> Result<Json<Value>, StatusCode> {
    proxied(state.detect.delete_files(&request.file_ids).await, "delete_files")
}

// =============================================================================
// PREDICTION
// =============================================================================

/// `POST /api/prediction` — submit files for prediction.
pub async fn predict_files(
    State(state): State<AppState>,
    Json(request): Json<PredictRequest>,
) -> Result<Json<Value>, StatusCode> {
    proxied(state.detect.predict_files(&request).await, "predict_files")
}

/// `GET /api/prediction/{file_id}` — paginated prediction results.
pub async fn list_predictions(
    State(state): State<AppState>,
    Path(file_id): Path<u64>,
    Query(page): Query<Page>,
) -> Result<Json<Value>, StatusCode> {
    proxied(state.detect.predictions(file_id, page).await, "predictions")
}

// =============================================================================
// VALIDATION
// =============================================================================

/// `POST /api/validation` — score weights against a dataset.
pub async fn validate_weights(
    State(state): State<AppState>,
    Json(request): Json<ValidateRequest>,
) -> Result<Json<Value>, StatusCode> {
    proxied(state.detect.validate_weights(&request).await, "validate_weights")
}

/// `GET /api/validation/{weights_id}` — paginated validation results.
pub async fn list_validations(
    State(state): State<AppState>,
    Path(weights_id): Path<u64>,
    Query(page): Query<Page>,
) -> Result<Json<Value>, StatusCode> {
    proxied(state.detect.validations(weights_id, page).await, "validations")
}

// =============================================================================
// TRAINING
// =============================================================================

/// `POST /api/training` — start a training run with opaque parameters.
pub async fn start_training(
    State(state): State<AppState>,
    Json(params): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    proxied(state.detect.start_training(&params).await, "start_training")
}

/// `DELETE /api/training/{pid}` — stop a training run.
pub async fn stop_training(
    State(state): State<AppState>,
    Path(pid): Path<u32>,
) -> Result<Json<Value>, StatusCode> {
    proxied(state.detect.stop_training(pid).await, "stop_training")
}

#[derive(Debug, Deserialize)]
pub struct TrainingLogQuery {
    pub line_no: Option<u64>,
}

/// `GET /api/training/{pid}/log` — incremental log lines from an optional
/// offset; no offset means "from start".
pub async fn training_log(
    State(state): State<AppState>,
    Path(pid): Path<u32>,
    Query(query): Query<TrainingLogQuery>,
) -> Result<Json<Value>, StatusCode> {
    proxied(state.detect.training_log(pid, query.line_no).await, "training_log")
}

#[cfg(test)]
#[path = "detect_test.rs"]
mod tests;
