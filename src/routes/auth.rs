//! Mock login — canned role/permission payloads for frontend development.
//!
//! This is a development fixture, not a security boundary: exactly two
//! terminal variants selected by a single equality test on the submitted
//! username, no credential verification, no store. Real deployments disable
//! it with `MOCK_AUTH=false` and put genuine authentication in front.

use axum::Json;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

fn mock_auth_enabled() -> bool {
    env_bool("MOCK_AUTH").unwrap_or(true)
}

// =============================================================================
// WIRE SHAPES
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    #[allow(dead_code)] // accepted but never verified; this is a fixture
    #[serde(default)]
    pub password: String,
}

/// Fabricated session payload. Token fields are camelCase on the wire to
/// match what the frontend session store expects.
#[derive(Debug, Clone, Serialize)]
pub struct SessionProfile {
    pub avatar: &'static str,
    pub username: &'static str,
    pub nickname: &'static str,
    pub roles: Vec<&'static str>,
    pub permissions: Vec<&'static str>,
    #[serde(rename = "accessToken")]
    pub access_token: &'static str,
    #[serde(rename = "refreshToken")]
    pub refresh_token: &'static str,
    pub expires: &'static str,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub data: SessionProfile,
}

// =============================================================================
// PROFILES
// =============================================================================

const AVATAR: &str = "/avatars/default.png";
const NICKNAME: &str = "Detection Console";
const EXPIRES: &str = "2030/10/30 00:00:00";

/// Select the canned profile for a submitted username. `"admin"` gets the
/// wildcard permission set; everything else gets the common profile.
pub(crate) fn profile_for(username: &str) -> SessionProfile {
    if username == "admin" {
        SessionProfile {
            avatar: AVATAR,
            username: "admin",
            nickname: NICKNAME,
            roles: vec!["admin"],
            permissions: vec!["*:*:*"],
            access_token: "eyJhbGciOiJIUzUxMiJ9.admin",
            refresh_token: "eyJhbGciOiJIUzUxMiJ9.adminRefresh",
            expires: EXPIRES,
        }
    } else {
        SessionProfile {
            avatar: AVATAR,
            username: "common",
            nickname: NICKNAME,
            roles: vec!["common"],
            permissions: vec!["permission:btn:add", "permission:btn:edit"],
            access_token: "eyJhbGciOiJIUzUxMiJ9.common",
            refresh_token: "eyJhbGciOiJIUzUxMiJ9.commonRefresh",
            expires: EXPIRES,
        }
    }
}

// =============================================================================
// HANDLER
// =============================================================================

/// `POST /login` — return a fabricated session. Has no failure branch: any
/// request reaching it succeeds. 404 when the fixture is disabled.
pub async fn login(Json(request): Json<LoginRequest>) -> Result<Json<LoginResponse>, StatusCode> {
    if !mock_auth_enabled() {
        return Err(StatusCode::NOT_FOUND);
    }

    Ok(Json(LoginResponse { success: true, data: profile_for(&request.username) }))
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
