//! Deployment settings fetched from the host.
//!
//! Client-side (csr): real HTTP call via `gloo-net`.
//! Native builds only get the parser, which is what tests exercise.
//!
//! ERROR HANDLING
//! ==============
//! Any failure is a configuration error shown on a panel. The settings are
//! re-validated here because the host is a separate deployable.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use session::{ConfigError, SessionSettings};

/// Path the host serves validated settings on.
pub const APP_CONFIG_PATH: &str = "/app-config.json";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("could not reach {APP_CONFIG_PATH}: {0}")]
    Fetch(String),
    #[error("{APP_CONFIG_PATH} returned HTTP {0}")]
    Status(u16),
    #[error("{APP_CONFIG_PATH} is not valid settings JSON: {0}")]
    Parse(String),
    #[error(transparent)]
    Invalid(#[from] ConfigError),
}

/// Parse and validate the settings document.
///
/// # Errors
///
/// Returns [`ConfigLoadError::Parse`] for malformed JSON and
/// [`ConfigLoadError::Invalid`] for settings that fail validation.
pub fn parse_app_config(body: &str) -> Result<SessionSettings, ConfigLoadError> {
    let settings: SessionSettings = serde_json::from_str(body).map_err(|e| ConfigLoadError::Parse(e.to_string()))?;
    settings.validate()?;
    Ok(settings)
}

/// Fetch settings from the host.
///
/// # Errors
///
/// Returns a [`ConfigLoadError`] if the request fails, the status is not
/// 2xx, or the body does not parse and validate.
#[cfg(feature = "csr")]
pub async fn fetch_app_config() -> Result<SessionSettings, ConfigLoadError> {
    let resp = gloo_net::http::Request::get(APP_CONFIG_PATH)
        .send()
        .await
        .map_err(|e| ConfigLoadError::Fetch(e.to_string()))?;
    if !resp.ok() {
        return Err(ConfigLoadError::Status(resp.status()));
    }
    let body = resp.text().await.map_err(|e| ConfigLoadError::Fetch(e.to_string()))?;
    parse_app_config(&body)
}
