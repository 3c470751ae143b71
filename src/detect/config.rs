//! Detection backend configuration parsed from environment variables.

pub const DEFAULT_DETECT_API_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectConfig {
    pub base_url: String,
    pub timeouts: DetectTimeouts,
}

impl DetectConfig {
    /// Build backend config from environment variables.
    ///
    /// Optional:
    /// - `DETECT_API_URL`: backend origin, default `http://127.0.0.1:8000`
    /// - `DETECT_REQUEST_TIMEOUT_SECS`: default 30
    /// - `DETECT_CONNECT_TIMEOUT_SECS`: default 10
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = std::env::var("DETECT_API_URL")
            .unwrap_or_else(|_| DEFAULT_DETECT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let timeouts = DetectTimeouts {
            request_secs: env_parse_u64("DETECT_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("DETECT_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        };

        Self { base_url, timeouts }
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
