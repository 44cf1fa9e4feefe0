//! Login entry route.
//!
//! SYSTEM CONTEXT
//! ==============
//! The gate sends denied navigations here with `?from=<path>`. Clicking
//! sign-in hands the rebuilt intent to the session handle, which starts the
//! provider redirect with the return path as its redirect URI. Users who are
//! already signed in are sent straight to that path.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_query_map;
use session::intent::FROM_PARAM;
use session::{NavigationIntent, SessionSettings, SessionStatus};

use crate::components::panels::{InitErrorPanel, LoadingPanel};
use crate::state::auth::AuthState;
use crate::state::session::use_session;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let login_route = expect_context::<SessionSettings>().login_route;
    let session = use_session();
    let query = use_query_map();

    let intent = Memo::new(move |_| {
        let from = query.with(|q| q.get(FROM_PARAM));
        NavigationIntent::from_query(&login_route, from.as_deref())
    });
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_sign_in = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);
        error.set(None);
        let intent = intent.get_untracked();
        #[cfg(feature = "csr")]
        {
            let handle = session.get_value();
            leptos::task::spawn_local(async move {
                if let Err(e) = handle.login(Some(&intent)).await {
                    leptos::logging::error!("login redirect failed: {e}");
                    error.set(Some(e.to_string()));
                    busy.set(false);
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (intent, session);
        }
    };

    move || {
        let state = auth.get();
        match state.snapshot.status {
            SessionStatus::Uninitialized => view! { <LoadingPanel/> }.into_any(),
            SessionStatus::Failed(failure) => view! { <InitErrorPanel failure=failure/> }.into_any(),
            SessionStatus::Authenticated => {
                view! { <Redirect path=intent.get().return_path().to_owned()/> }.into_any()
            }
            SessionStatus::Unauthenticated => view! {
                <section class="login-page">
                    <div class="login-card">
                        <h1>"Sign in"</h1>
                        <p class="login-card__subtitle">{move || login_prompt(&intent.get())}</p>
                        <button class="login-button" on:click=on_sign_in disabled=move || busy.get()>
                            "Continue to sign-in"
                        </button>
                        <Show when=move || error.with(Option::is_some)>
                            <p class="login-card__error">{move || error.get().unwrap_or_default()}</p>
                        </Show>
                    </div>
                </section>
            }
            .into_any(),
        }
    }
}

/// Subtitle telling the user where they will land.
pub fn login_prompt(intent: &NavigationIntent) -> String {
    match &intent.from {
        Some(path) => format!("Sign in to continue to {path}."),
        None => "Sign in to continue.".to_owned(),
    }
}
