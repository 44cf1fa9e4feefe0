use super::*;

#[test]
fn gated_path_without_query() {
    assert_eq!(gated_path("/protected", ""), "/protected");
    assert_eq!(gated_path("/protected", "?"), "/protected");
}

#[test]
fn gated_path_keeps_query_either_form() {
    assert_eq!(gated_path("/reports", "?y=1"), "/reports?y=1");
    assert_eq!(gated_path("/reports", "y=1"), "/reports?y=1");
}

#[test]
fn login_route_match_ignores_trailing_slash() {
    assert!(is_login_route("/login", "/login"));
    assert!(is_login_route("/login/", "/login"));
    assert!(is_login_route("/auth/sign-in", "/auth/sign-in"));
    assert!(!is_login_route("/login-help", "/login"));
    assert!(!is_login_route("/", "/login"));
}
