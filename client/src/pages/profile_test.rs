use serde_json::json;

use super::*;

fn claims(value: serde_json::Value) -> Claims {
    Claims::from_value(value).unwrap()
}

#[test]
fn profile_rows_lists_present_claims_in_order() {
    let claims = claims(json!({
        "sub": "u-1",
        "preferred_username": "alice",
        "email": "alice@example.com",
        "exp": 1_700_000_000
    }));
    assert_eq!(
        profile_rows(&claims, "c1"),
        vec![
            ("Username", "alice".to_owned()),
            ("Email", "alice@example.com".to_owned()),
            ("Subject", "u-1".to_owned()),
            ("Token expires", "1700000000 (unix time)".to_owned()),
        ]
    );
}

#[test]
fn profile_rows_merges_realm_and_client_roles_sorted() {
    let claims = claims(json!({
        "realm_access": { "roles": ["user"] },
        "resource_access": { "c1": { "roles": ["admin"] }, "other": { "roles": ["ignored"] } }
    }));
    assert_eq!(profile_rows(&claims, "c1"), vec![("Roles", "admin, user".to_owned())]);
}

#[test]
fn profile_rows_empty_for_empty_claims() {
    assert!(profile_rows(&claims(json!({})), "c1").is_empty());
}
