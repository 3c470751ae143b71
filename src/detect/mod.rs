//! Detection backend — typed client for the YOLO training/inference service.
//!
//! DESIGN
//! ======
//! The backend is an external collaborator reached only over HTTP. This
//! module owns the request contract (endpoints, query shapes, numeric-id
//! coercion) and nothing else: no retries, no caching, no authoritative
//! state about running jobs. Every read re-queries the backend.

pub mod client;
pub mod config;
pub mod types;

pub use client::DetectClient;
pub use types::{DeleteFilesRequest, DetectError, FileType, Page, PredictRequest, StorageFilter, ValidateRequest};
