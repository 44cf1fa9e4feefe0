//! Role-restricted page.

use leptos::prelude::*;

use crate::components::auth_gate::AuthGate;

/// Role required to view the admin page.
pub const ADMIN_ROLE: &str = "admin";

#[component]
pub fn AdminPage() -> impl IntoView {
    view! {
        <AuthGate roles=&[ADMIN_ROLE]>
            <section class="admin">
                <h1>"Admin"</h1>
                <p>"You hold the '"{ADMIN_ROLE}"' role."</p>
            </section>
        </AuthGate>
    }
}
