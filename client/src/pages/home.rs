//! Public landing page.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let status = move || {
        let state = auth.get();
        if state.loading() {
            "Checking your session...".to_owned()
        } else if state.init_failed() {
            "Sign-in is currently unavailable.".to_owned()
        } else if let Some(name) = state.display_name() {
            format!("Signed in as {name}.")
        } else {
            "You are not signed in.".to_owned()
        }
    };

    view! {
        <section class="home">
            <h1>"Gatehouse"</h1>
            <p class="home__status">{status}</p>
            <ul class="home__links">
                <li><a href="/protected">"Protected page"</a>" (any signed-in user)"</li>
                <li><a href="/profile">"Profile"</a>" (your token claims)"</li>
                <li><a href="/admin">"Admin"</a>" (requires the admin role)"</li>
            </ul>
        </section>
    }
}
