//! Session owner: builds the handle, starts bootstrap, mounts the router.
//!
//! ARCHITECTURE
//! ============
//! Rendered once settings are loaded. It constructs the one
//! `SessionHandle` for the page, mirrors it into `RwSignal<AuthState>`
//! through a subscription owned by this component, spawns the watcher and
//! the one-shot bootstrap, and provides the handle and settings to every
//! route below it.

use leptos::prelude::*;
use leptos_router::StaticSegment;
use leptos_router::components::{Route, Router, Routes};
use session::{SessionHandle, SessionSettings};

use crate::components::nav_bar::NavBar;
use crate::components::panels::ConfigErrorPanel;
use crate::net::keycloak;
use crate::pages::{
    admin::AdminPage, fallback::RouteFallback, home::HomePage, profile::ProfilePage, protected::ProtectedPage,
};
use crate::state::auth::AuthState;
use crate::state::session::provide_session;
use crate::util::browser;

#[component]
pub fn SessionRoot(settings: SessionSettings) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let adapter = match keycloak::connect(&settings) {
        Ok(adapter) => adapter,
        Err(e) => {
            leptos::logging::error!("identity adapter unavailable: {e}");
            return view! { <ConfigErrorPanel message=e.to_string()/> }.into_any();
        }
    };
    let Some(origin) = browser::origin() else {
        return view! { <ConfigErrorPanel message="Page origin is unavailable.".to_owned()/> }.into_any();
    };

    provide_context(settings.clone());
    let handle = SessionHandle::new(adapter, settings, &origin);

    // Dropped with this component's owner, which unsubscribes.
    let subscription = handle.subscribe(move |snapshot| {
        auth.set(AuthState { snapshot: snapshot.clone() });
    });
    StoredValue::new_local(subscription);

    provide_session(handle.clone());
    start_session(handle);

    view! {
        <Router>
            <NavBar/>
            <main class="page">
                <Routes fallback=|| view! { <RouteFallback/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("protected") view=ProtectedPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                    <Route path=StaticSegment("admin") view=AdminPage/>
                </Routes>
            </main>
        </Router>
    }
    .into_any()
}

/// Spawn the event watcher, then the one-shot bootstrap.
fn start_session(handle: SessionHandle) {
    #[cfg(feature = "csr")]
    {
        use session::{SessionWatcher, bootstrap};

        let watcher = SessionWatcher::new(&handle);
        leptos::task::spawn_local(watcher.run());
        leptos::task::spawn_local(async move {
            let outcome = bootstrap(&handle).await;
            leptos::logging::log!("session bootstrap settled: {}", outcome.status().label());
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = handle;
    }
}
