//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the detection backend client and nothing else — the console keeps
//! no authoritative state of its own; every read re-queries the backend.

use std::sync::Arc;

use crate::detect::DetectClient;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum — the client is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub detect: Arc<DetectClient>,
}

impl AppState {
    #[must_use]
    pub fn new(detect: DetectClient) -> Self {
        Self { detect: Arc::new(detect) }
    }
}
