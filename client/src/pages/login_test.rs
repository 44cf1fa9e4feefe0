use super::*;

#[test]
fn login_prompt_names_return_path() {
    let intent = NavigationIntent::from_query("/login", Some("/protected"));
    assert_eq!(login_prompt(&intent), "Sign in to continue to /protected.");
}

#[test]
fn login_prompt_without_return_path() {
    let intent = NavigationIntent::from_query("/login", None);
    assert_eq!(login_prompt(&intent), "Sign in to continue.");
}

#[test]
fn login_prompt_ignores_offsite_from() {
    let intent = NavigationIntent::from_query("/login", Some("//evil.example/x"));
    assert_eq!(login_prompt(&intent), "Sign in to continue.");
}
