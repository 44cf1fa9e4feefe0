//! Option objects passed to keycloak-js.
//!
//! Built as JSON here and converted to JS objects in `keycloak`, so the
//! field names keycloak-js expects are checked by native tests.

#[cfg(test)]
#[path = "keycloak_options_test.rs"]
mod keycloak_options_test;

use serde::Serialize;
use serde_json::Value;
use session::{InitOptions, SessionConfig};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProviderConfig<'a> {
    url: &'a str,
    realm: &'a str,
    client_id: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InitObject<'a> {
    on_load: &'static str,
    pkce_method: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    silent_check_sso_redirect_uri: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RedirectObject<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    redirect_uri: Option<&'a str>,
}

/// `new Keycloak({ url, realm, clientId })`.
pub fn provider_config(config: &SessionConfig) -> Value {
    to_value(&ProviderConfig { url: &config.url, realm: &config.realm, client_id: &config.client_id })
}

/// `keycloak.init({ onLoad, pkceMethod, silentCheckSsoRedirectUri })`.
pub fn init_object(options: &InitOptions) -> Value {
    to_value(&InitObject {
        on_load: options.policy.as_str(),
        pkce_method: options.pkce_method.as_str(),
        silent_check_sso_redirect_uri: options.silent_check_sso_redirect_uri.as_deref(),
    })
}

/// `keycloak.login({ redirectUri })` / `keycloak.logout({ redirectUri })`.
pub fn redirect_object(redirect_uri: Option<&str>) -> Value {
    to_value(&RedirectObject { redirect_uri })
}

/// Claims from `keycloak.tokenParsed` after `JSON.stringify`.
///
/// Anything other than a JSON object (including `undefined`) is no claims.
pub fn parse_token(json: Option<&str>) -> Option<Value> {
    let value: Value = serde_json::from_str(json?).ok()?;
    value.is_object().then_some(value)
}

// Serializing these borrowed string structs cannot fail.
fn to_value<T: Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}
