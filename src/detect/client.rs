//! HTTP client for the detection backend.
//!
//! Each method is a pure request-builder with exactly one HTTP call: no
//! retries, no response caching, no request de-duplication. Response bodies
//! are passed through as JSON values — the backend owns its response shapes,
//! this layer owns only the request contract.

use std::time::Duration;

use serde::Serialize;
use serde_json::Value;

use super::config::{DetectConfig, DetectTimeouts};
use super::types::{DetectError, Page, PredictRequest, StorageFilter, ValidateRequest};

pub struct DetectClient {
    http: reqwest::Client,
    base_url: String,
}

impl DetectClient {
    /// Build a client from environment variables (see [`DetectConfig::from_env`]).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn from_env() -> Result<Self, DetectError> {
        Self::from_config(DetectConfig::from_env())
    }

    /// Build a client from a parsed typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn from_config(config: DetectConfig) -> Result<Self, DetectError> {
        let http = build_http(config.timeouts)?;
        Ok(Self { http, base_url: config.base_url })
    }

    /// Return the configured backend origin.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =========================================================================
    // FILE STORAGE
    // =========================================================================

    /// `GET /storage-data` — list stored files. Unset filters are omitted
    /// from the query string entirely.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx backend status.
    pub async fn storage(&self, filter: &StorageFilter) -> Result<Value, DetectError> {
        self.get_json("/storage-data", &storage_query(filter)).await
    }

    /// `DELETE /delete-files` — delete files by id, as one unit.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx backend status.
    pub async fn delete_files(&self, file_ids: &[u64]) -> Result<Value, DetectError> {
        let url = format!("{}/delete-files", self.base_url);
        let response = self
            .http
            .delete(url)
            .json(&serde_json::json!({ "file_ids": file_ids }))
            .send()
            .await
            .map_err(|e| DetectError::Request(e.to_string()))?;
        read_json(response).await
    }

    // =========================================================================
    // PREDICTION
    // =========================================================================

    /// `POST /prediction` — submit files for prediction under one weight.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx backend status.
    pub async fn predict_files(&self, request: &PredictRequest) -> Result<Value, DetectError> {
        self.post_json("/prediction", request).await
    }

    /// `GET /prediction-data/{file_id}` — paginated prediction results.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx backend status.
    pub async fn predictions(&self, file_id: u64, page: Page) -> Result<Value, DetectError> {
        self.get_json(&prediction_data_path(file_id), &page_query(page)).await
    }

    // =========================================================================
    // VALIDATION
    // =========================================================================

    /// `POST /validation` — score weights against a dataset. `conf` is
    /// forwarded unvalidated.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx backend status.
    pub async fn validate_weights(&self, request: &ValidateRequest) -> Result<Value, DetectError> {
        self.post_json("/validation", request).await
    }

    /// `GET /validation-data/{weights_id}` — paginated validation results.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx backend status.
    pub async fn validations(&self, weights_id: u64, page: Page) -> Result<Value, DetectError> {
        self.get_json(&validation_data_path(weights_id), &page_query(page)).await
    }

    // =========================================================================
    // TRAINING
    // =========================================================================

    /// `POST /start-training` — start a training run. The parameter object
    /// is opaque to this layer.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx backend status.
    pub async fn start_training(&self, params: &Value) -> Result<Value, DetectError> {
        self.post_json("/start-training", params).await
    }

    /// `DELETE /stop-training/{pid}` — stop a training run by process id.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx backend status.
    pub async fn stop_training(&self, pid: u32) -> Result<Value, DetectError> {
        let url = format!("{}{}", self.base_url, stop_training_path(pid));
        let response = self
            .http
            .delete(url)
            .send()
            .await
            .map_err(|e| DetectError::Request(e.to_string()))?;
        read_json(response).await
    }

    /// `GET /show-training/{pid}` — incremental training log lines. A `None`
    /// offset means "from start" and omits the `line_no` parameter.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx backend status.
    pub async fn training_log(&self, pid: u32, line_no: Option<u64>) -> Result<Value, DetectError> {
        self.get_json(&show_training_path(pid), &training_log_query(line_no))
            .await
    }

    // =========================================================================
    // TRANSPORT
    // =========================================================================

    async fn get_json(&self, path: &str, query: &[(&str, String)]) -> Result<Value, DetectError> {
        let url = format!("{}{path}", self.base_url);
        let response = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| DetectError::Request(e.to_string()))?;
        read_json(response).await
    }

    async fn post_json(&self, path: &str, body: &impl Serialize) -> Result<Value, DetectError> {
        let url = format!("{}{path}", self.base_url);
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| DetectError::Request(e.to_string()))?;
        read_json(response).await
    }
}

fn build_http(timeouts: DetectTimeouts) -> Result<reqwest::Client, DetectError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeouts.request_secs))
        .connect_timeout(Duration::from_secs(timeouts.connect_secs))
        .build()
        .map_err(|e| DetectError::HttpClientBuild(e.to_string()))
}

async fn read_json(response: reqwest::Response) -> Result<Value, DetectError> {
    let status = response.status().as_u16();
    let text = response
        .text()
        .await
        .map_err(|e| DetectError::Request(e.to_string()))?;
    if !(200..300).contains(&status) {
        return Err(DetectError::Response { status, body: text });
    }
    serde_json::from_str(&text).map_err(|e| DetectError::Parse(e.to_string()))
}

// =============================================================================
// QUERY BUILDERS
// =============================================================================

/// Build the storage listing query. `file_type`/`file_id` are omitted when
/// unset — absence means "no filter", not an empty-string match.
fn storage_query(filter: &StorageFilter) -> Vec<(&'static str, String)> {
    let mut query = vec![
        ("page", filter.page.to_string()),
        ("page_size", filter.page_size.to_string()),
    ];
    if let Some(file_type) = filter.file_type {
        query.push(("file_type", file_type.as_str().to_string()));
    }
    if let Some(file_id) = filter.file_id {
        query.push(("file_id", file_id.to_string()));
    }
    query
}

fn page_query(page: Page) -> Vec<(&'static str, String)> {
    vec![("page", page.page.to_string()), ("page_size", page.page_size.to_string())]
}

fn training_log_query(line_no: Option<u64>) -> Vec<(&'static str, String)> {
    line_no.map_or_else(Vec::new, |n| vec![("line_no", n.to_string())])
}

fn prediction_data_path(file_id: u64) -> String {
    format!("/prediction-data/{file_id}")
}

fn validation_data_path(weights_id: u64) -> String {
    format!("/validation-data/{weights_id}")
}

fn stop_training_path(pid: u32) -> String {
    format!("/stop-training/{pid}")
}

fn show_training_path(pid: u32) -> String {
    format!("/show-training/{pid}")
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
