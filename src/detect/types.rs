//! Detection backend types — file classification and request DTOs.
//!
//! Wire shapes mirror what the backend expects: ids are JSON numbers,
//! pagination travels as `page`/`page_size` query parameters. Incoming
//! request bodies accept ids as either numbers or numeric strings and
//! coerce them at the boundary, so the backend only ever sees numbers.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by detection backend operations.
#[derive(Debug, thiserror::Error)]
pub enum DetectError {
    /// The HTTP request to the detection backend failed.
    #[error("backend request failed: {0}")]
    Request(String),

    /// The detection backend returned a non-success HTTP status.
    #[error("backend response error: status {status}")]
    Response { status: u16, body: String },

    /// The backend response body was not valid JSON.
    #[error("backend response parse failed: {0}")]
    Parse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// FILE CLASSIFICATION
// =============================================================================

/// Fixed file classification shared by the upload/predict/validate/train
/// flows. Exactly these nine wire literals exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileType {
    PredictedImage,
    ValidatedImage,
    Image,
    Document,
    Video,
    PredictedVideo,
    Audio,
    Other,
    TrainingLog,
}

impl FileType {
    /// All classification values, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::PredictedImage,
        Self::ValidatedImage,
        Self::Image,
        Self::Document,
        Self::Video,
        Self::PredictedVideo,
        Self::Audio,
        Self::Other,
        Self::TrainingLog,
    ];

    /// The wire literal for this classification.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PredictedImage => "predicted_image",
            Self::ValidatedImage => "validated_image",
            Self::Image => "image",
            Self::Document => "document",
            Self::Video => "video",
            Self::PredictedVideo => "predicted_video",
            Self::Audio => "audio",
            Self::Other => "other",
            Self::TrainingLog => "training_log",
        }
    }
}

// =============================================================================
// PAGINATION AND FILTERS
// =============================================================================

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    10
}

/// Query-string pagination accepted by every listing endpoint.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Page {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for Page {
    fn default() -> Self {
        Self { page: default_page(), page_size: default_page_size() }
    }
}

/// Filter for the file storage listing. Unset filters are omitted from the
/// outgoing query entirely — absence means "no filter", not an empty match.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageFilter {
    #[serde(default)]
    pub file_type: Option<FileType>,
    #[serde(default)]
    pub file_id: Option<u64>,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for StorageFilter {
    fn default() -> Self {
        Self { file_type: None, file_id: None, page: default_page(), page_size: default_page_size() }
    }
}

// =============================================================================
// REQUEST BODIES
// =============================================================================

/// Prediction submission: run one weight over a set of stored files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictRequest {
    #[serde(deserialize_with = "de_id")]
    pub weight_id: u64,
    #[serde(deserialize_with = "de_id_vec")]
    pub files_ids: Vec<u64>,
}

/// Validation submission: score a set of weights against a dataset.
/// `conf` is forwarded as-is; the backend owns its range semantics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateRequest {
    #[serde(deserialize_with = "de_id")]
    pub dataset_id: u64,
    pub conf: f64,
    #[serde(deserialize_with = "de_id_vec")]
    pub weights_ids: Vec<u64>,
}

/// File deletion: one request, one unit — no partial-failure reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteFilesRequest {
    #[serde(deserialize_with = "de_id_vec")]
    pub file_ids: Vec<u64>,
}

// =============================================================================
// LENIENT ID DESERIALIZATION
// =============================================================================

#[derive(Deserialize)]
#[serde(untagged)]
enum IdRepr {
    Num(u64),
    Str(String),
}

impl IdRepr {
    fn coerce<E: de::Error>(self) -> Result<u64, E> {
        match self {
            Self::Num(n) => Ok(n),
            Self::Str(s) => s
                .trim()
                .parse::<u64>()
                .map_err(|_| E::custom(format!("invalid numeric id: {s:?}"))),
        }
    }
}

/// Accept a JSON number or a numeric string and produce a `u64`.
fn de_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    IdRepr::deserialize(deserializer)?.coerce()
}

/// Accept a JSON array of numbers and/or numeric strings.
fn de_id_vec<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u64>, D::Error> {
    let raw = Vec::<IdRepr>::deserialize(deserializer)?;
    raw.into_iter().map(IdRepr::coerce).collect()
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
