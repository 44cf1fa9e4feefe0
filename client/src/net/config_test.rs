use session::{DenialPolicy, InitPolicy};

use super::*;

#[test]
fn parse_minimal_document_applies_defaults() {
    let settings =
        parse_app_config(r#"{"config":{"url":"http://id.example","realm":"r1","clientId":"c1"}}"#).unwrap();
    assert_eq!(settings.config.client_id, "c1");
    assert_eq!(settings.init_policy, InitPolicy::CheckSso);
    assert_eq!(settings.denial_policy, DenialPolicy::RedirectToLogin);
    assert_eq!(settings.refresh_margin_secs, 30);
    assert_eq!(settings.login_route, "/login");
    assert_eq!(settings.post_logout_path, "/");
}

#[test]
fn parse_full_document() {
    let body = r#"{
        "config": {"url": "https://id.example", "realm": "r1", "clientId": "c1"},
        "initPolicy": "login-required",
        "denialPolicy": "inline",
        "refreshMarginSecs": 60,
        "loginRoute": "/sign-in",
        "postLogoutPath": "/bye",
        "pkceMethod": "S256",
        "silentCheckSsoPath": "/silent-check-sso.html"
    }"#;
    let settings = parse_app_config(body).unwrap();
    assert_eq!(settings.init_policy, InitPolicy::LoginRequired);
    assert_eq!(settings.denial_policy, DenialPolicy::InlineUnauthorized);
    assert_eq!(settings.refresh_margin_secs, 60);
    assert_eq!(settings.silent_check_sso_path.as_deref(), Some("/silent-check-sso.html"));
}

#[test]
fn parse_rejects_malformed_json() {
    assert!(matches!(parse_app_config("not json"), Err(ConfigLoadError::Parse(_))));
}

#[test]
fn parse_rejects_missing_endpoint() {
    assert!(matches!(
        parse_app_config(r#"{"config":{"realm":"r1","clientId":"c1"}}"#),
        Err(ConfigLoadError::Parse(_))
    ));
}

#[test]
fn parse_rejects_invalid_settings() {
    let err = parse_app_config(r#"{"config":{"url":"ftp://id.example","realm":"r1","clientId":"c1"}}"#).unwrap_err();
    assert!(matches!(err, ConfigLoadError::Invalid(ConfigError::InvalidUrl { .. })));

    let err =
        parse_app_config(r#"{"config":{"url":"http://id.example","realm":" ","clientId":"c1"}}"#).unwrap_err();
    assert!(matches!(err, ConfigLoadError::Invalid(ConfigError::Blank { .. })));
}

#[test]
fn load_error_messages_name_the_path() {
    assert_eq!(ConfigLoadError::Status(404).to_string(), "/app-config.json returned HTTP 404");
}
