//! Signed-in user's token claims.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use session::{Claims, SessionSettings};

use crate::components::auth_gate::AuthGate;
use crate::state::auth::AuthState;

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <AuthGate>
            <ProfileContent/>
        </AuthGate>
    }
}

#[component]
fn ProfileContent() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let client_id = expect_context::<SessionSettings>().config.client_id;

    let rows = move || {
        auth.with(|state| state.snapshot.claims.as_ref().map(|c| profile_rows(c, &client_id)))
            .unwrap_or_default()
            .into_iter()
            .map(|(label, value)| view! { <tr><th>{label}</th><td>{value}</td></tr> })
            .collect_view()
    };

    view! {
        <section class="profile">
            <h1>"Profile"</h1>
            <table class="profile__claims">
                <tbody>{rows}</tbody>
            </table>
        </section>
    }
}

/// Label/value pairs shown on the profile page. Absent claims are skipped.
pub fn profile_rows(claims: &Claims, client_id: &str) -> Vec<(&'static str, String)> {
    let mut rows = Vec::new();
    let text = [
        ("Username", claims.preferred_username()),
        ("Name", claims.name()),
        ("Email", claims.email()),
        ("Subject", claims.subject()),
    ];
    for (label, value) in text {
        if let Some(value) = value {
            rows.push((label, value.to_owned()));
        }
    }

    let roles = claims.roles(client_id);
    if !roles.is_empty() {
        rows.push(("Roles", roles.into_iter().collect::<Vec<_>>().join(", ")));
    }
    if let Some(exp) = claims.expires_at() {
        rows.push(("Token expires", format!("{exp} (unix time)")));
    }
    rows
}
