//! Welcome-page data route.

use axum::Json;

use crate::dashboard::{self, DashboardData};

/// `GET /api/dashboard` — demo datasets for the welcome page, regenerated
/// on every request.
pub async fn dashboard_data() -> Json<DashboardData> {
    Json(dashboard::generate())
}
