//! Build-time configuration for the admin UI.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend base URL is baked in when the WASM bundle is compiled
//! (`ADMIN_API_BASE_URL`). It is never derived from the session and never
//! persisted; every REST call is prefixed with it.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL used when `ADMIN_API_BASE_URL` is not set at compile time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api/v1";

/// `localStorage` key holding the persisted `{token, details}` record.
pub const AUTH_STORAGE_KEY: &str = "auth-store";

/// The configured backend base URL, without a trailing slash.
pub fn api_base_url() -> String {
    normalize_base_url(option_env!("ADMIN_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
}

/// Trim whitespace and trailing slashes so paths can be appended with `/`.
pub fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE_URL.to_owned()
    } else {
        trimmed.to_owned()
    }
}
