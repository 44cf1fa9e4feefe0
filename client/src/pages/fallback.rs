//! Unmatched paths: the configured login route, or not found.
//!
//! The login route comes from deployment settings, so it cannot be a static
//! route segment. It is matched here instead.

use leptos::prelude::*;
use leptos_router::hooks::use_location;
use session::SessionSettings;

use crate::pages::login::LoginPage;
use crate::util::paths::is_login_route;

#[component]
pub fn RouteFallback() -> impl IntoView {
    let login_route = expect_context::<SessionSettings>().login_route;
    let location = use_location();
    let on_login = Memo::new(move |_| is_login_route(&location.pathname.get(), &login_route));

    move || {
        if on_login.get() {
            view! { <LoginPage/> }.into_any()
        } else {
            view! { <NotFound/> }.into_any()
        }
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <section class="not-found">
            <h1>"Page not found"</h1>
            <a href="/">"Back to home"</a>
        </section>
    }
}
