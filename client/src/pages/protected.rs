//! Content for any signed-in user.

use leptos::prelude::*;

use crate::components::auth_gate::AuthGate;
use crate::state::auth::AuthState;

#[component]
pub fn ProtectedPage() -> impl IntoView {
    view! {
        <AuthGate>
            <ProtectedContent/>
        </AuthGate>
    }
}

#[component]
fn ProtectedContent() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let name = move || auth.with(AuthState::display_name).unwrap_or_default();

    view! {
        <section class="protected">
            <h1>"Protected"</h1>
            <p>"Welcome, "{name}". Only signed-in users can see this page."</p>
        </section>
    }
}
