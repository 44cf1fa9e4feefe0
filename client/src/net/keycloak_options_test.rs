use serde_json::json;
use session::{InitPolicy, PkceMethod};

use super::*;

#[test]
fn provider_config_uses_keycloak_field_names() {
    let config = SessionConfig::new("http://id.example/", "r1", "c1").unwrap();
    assert_eq!(provider_config(&config), json!({ "url": "http://id.example", "realm": "r1", "clientId": "c1" }));
}

#[test]
fn init_object_for_check_sso_with_silent_page() {
    let options = InitOptions {
        policy: InitPolicy::CheckSso,
        pkce_method: PkceMethod::S256,
        silent_check_sso_redirect_uri: Some("http://app.example/silent-check-sso.html".into()),
    };
    assert_eq!(
        init_object(&options),
        json!({
            "onLoad": "check-sso",
            "pkceMethod": "S256",
            "silentCheckSsoRedirectUri": "http://app.example/silent-check-sso.html"
        })
    );
}

#[test]
fn init_object_omits_unset_silent_page() {
    let options = InitOptions {
        policy: InitPolicy::LoginRequired,
        pkce_method: PkceMethod::S256,
        silent_check_sso_redirect_uri: None,
    };
    assert_eq!(init_object(&options), json!({ "onLoad": "login-required", "pkceMethod": "S256" }));
}

#[test]
fn redirect_object_with_and_without_uri() {
    assert_eq!(redirect_object(Some("http://app.example/")), json!({ "redirectUri": "http://app.example/" }));
    assert_eq!(redirect_object(None), json!({}));
}

#[test]
fn parse_token_accepts_objects_only() {
    assert_eq!(parse_token(Some(r#"{"sub":"1"}"#)), Some(json!({ "sub": "1" })));
    assert_eq!(parse_token(Some("null")), None);
    assert_eq!(parse_token(Some("not json")), None);
    assert_eq!(parse_token(None), None);
}
