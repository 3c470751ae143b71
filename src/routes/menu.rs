//! Navigation menu route.

use axum::Json;
use serde_json::Value;

use crate::nav;

/// `GET /api/routes` — the navigation tree, rank-ordered, for the frontend
/// to merge into its route table.
pub async fn list_routes() -> Json<Value> {
    Json(serde_json::json!({
        "success": true,
        "data": nav::navigation(),
    }))
}

#[cfg(test)]
#[path = "menu_test.rs"]
mod tests;
