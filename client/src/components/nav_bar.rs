//! Top navigation with the sign-in / sign-out control.

use leptos::prelude::*;
use session::SessionSettings;

use crate::state::auth::AuthState;
use crate::state::session::use_session;

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let settings = expect_context::<SessionSettings>();
    let session = use_session();
    let login_href = settings.login_route.clone();
    let busy = RwSignal::new(false);

    let on_logout = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);
        #[cfg(feature = "csr")]
        {
            let handle = session.get_value();
            leptos::task::spawn_local(async move {
                if let Err(e) = handle.logout().await {
                    leptos::logging::error!("logout failed: {e}");
                    busy.set(false);
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = session;
        }
    };

    let account = move || {
        let state = auth.get();
        if state.loading() {
            view! { <span class="nav__status">"..."</span> }.into_any()
        } else if state.is_authenticated() {
            let name = state.display_name().unwrap_or_else(|| "signed in".to_owned());
            view! {
                <span class="nav__user">{name}</span>
                <button class="nav__button" on:click=on_logout disabled=move || busy.get()>
                    "Sign out"
                </button>
            }
            .into_any()
        } else {
            view! { <a class="nav__button" href=login_href.clone()>"Sign in"</a> }.into_any()
        }
    };

    view! {
        <nav class="nav">
            <a class="nav__brand" href="/">"Gatehouse"</a>
            <a href="/protected">"Protected"</a>
            <a href="/profile">"Profile"</a>
            <a href="/admin">"Admin"</a>
            <span class="nav__spacer"></span>
            {account}
        </nav>
    }
}
