//! Route path helpers.

#[cfg(test)]
#[path = "paths_test.rs"]
mod paths_test;

/// The path the gate sees: pathname plus query string, if any.
///
/// Accepts the router's search with or without its leading `?`.
pub fn gated_path(pathname: &str, search: &str) -> String {
    let query = search.trim_start_matches('?');
    if query.is_empty() { pathname.to_owned() } else { format!("{pathname}?{query}") }
}

/// `true` if `pathname` is the configured login route.
pub fn is_login_route(pathname: &str, login_route: &str) -> bool {
    pathname.trim_end_matches('/') == login_route.trim_end_matches('/')
}
