//! Route guard around protected content.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps a route's content and renders whatever `session::AccessGate`
//! decides for the current location. The decision is memoized, so a denied
//! navigation redirects once and later unrelated signal updates do not
//! re-trigger it.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;
use session::{AccessGate, GateDecision, SessionSettings};

use crate::components::panels::{ForbiddenPanel, InitErrorPanel, LoadingPanel, UnauthorizedPanel};
use crate::state::auth::AuthState;
use crate::util::paths::gated_path;

#[component]
pub fn AuthGate(
    /// Roles required beyond being signed in (realm or this client's).
    #[prop(optional)]
    roles: &'static [&'static str],
    children: ChildrenFn,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let settings = expect_context::<SessionSettings>();
    let gate = AccessGate::new(&settings).with_required_roles(roles.iter().copied());
    let location = use_location();

    let decision = Memo::new(move |_| {
        let path = gated_path(&location.pathname.get(), &location.search.get());
        auth.with(|state| state.decide(&gate, &path))
    });

    move || match decision.get() {
        GateDecision::Loading => view! { <LoadingPanel/> }.into_any(),
        GateDecision::Allow => children().into_any(),
        GateDecision::RedirectToLogin(intent) => {
            leptos::logging::log!("access denied for {:?}; redirecting to login", intent.from);
            view! { <Redirect path=intent.href()/> }.into_any()
        }
        GateDecision::Unauthorized(intent) => view! { <UnauthorizedPanel intent=intent/> }.into_any(),
        GateDecision::Forbidden { missing } => view! { <ForbiddenPanel missing=missing/> }.into_any(),
        GateDecision::InitFailed(failure) => view! { <InitErrorPanel failure=failure/> }.into_any(),
    }
}
