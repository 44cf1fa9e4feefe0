//! Root application component: settings load, then the session root.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::panels::{ConfigErrorPanel, LoadingPanel};
use crate::components::session_root::SessionRoot;
use crate::state::auth::AuthState;
use crate::state::config::ConfigPhase;

/// Root application component.
///
/// Provides the auth signal, fetches `/app-config.json`, and only then
/// mounts `SessionRoot`. A settings failure shows a configuration panel and
/// bootstrap is never invoked.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    let config = RwSignal::new(ConfigPhase::Loading);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match crate::net::config::fetch_app_config().await {
            Ok(settings) => config.set(ConfigPhase::Ready(settings)),
            Err(e) => {
                leptos::logging::error!("failed to load settings: {e}");
                config.set(ConfigPhase::Failed(e.to_string()));
            }
        }
    });

    view! {
        <Title text="Gatehouse"/>
        {move || match config.get() {
            ConfigPhase::Loading => view! { <LoadingPanel/> }.into_any(),
            ConfigPhase::Failed(message) => view! { <ConfigErrorPanel message=message/> }.into_any(),
            ConfigPhase::Ready(settings) => view! { <SessionRoot settings=settings/> }.into_any(),
        }}
    }
}
