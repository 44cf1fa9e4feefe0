//! Loading, error, and denial panels.
//!
//! Everything the gate renders instead of route content lives here so the
//! wording stays consistent across routes.

#[cfg(test)]
#[path = "panels_test.rs"]
mod panels_test;

use leptos::prelude::*;
use session::{InitFailure, NavigationIntent};

use crate::util::browser;

/// Neutral state while bootstrap is pending. Never shows protected content
/// and never starts a redirect.
#[component]
pub fn LoadingPanel() -> impl IntoView {
    view! {
        <div class="panel panel--loading" role="status" aria-live="polite">
            <span class="panel__spinner"></span>
            "Checking your session..."
        </div>
    }
}

/// Bootstrap failed. Reload is the only retry.
#[component]
pub fn InitErrorPanel(failure: InitFailure) -> impl IntoView {
    view! {
        <div class="panel panel--error" role="alert">
            <h2>"Sign-in is unavailable"</h2>
            <p>{init_failure_message(&failure)}</p>
            <button class="panel__button" on:click=move |_| browser::reload()>
                "Reload"
            </button>
        </div>
    }
}

/// Settings could not be loaded; bootstrap was never attempted.
#[component]
pub fn ConfigErrorPanel(message: String) -> impl IntoView {
    view! {
        <div class="panel panel--error" role="alert">
            <h2>"This app is misconfigured"</h2>
            <p>{message}</p>
        </div>
    }
}

/// Inline denial with a login affordance carrying the intent.
#[component]
pub fn UnauthorizedPanel(intent: NavigationIntent) -> impl IntoView {
    view! {
        <div class="panel panel--denied">
            <h2>"Sign in required"</h2>
            <p>"You need to sign in to view this page."</p>
            <a class="panel__button" href=intent.href()>
                "Sign in"
            </a>
        </div>
    }
}

/// Signed in but missing roles. Not a login problem, so no login link.
#[component]
pub fn ForbiddenPanel(missing: Vec<String>) -> impl IntoView {
    view! {
        <div class="panel panel--forbidden">
            <h2>"Access denied"</h2>
            <p>{forbidden_message(&missing)}</p>
        </div>
    }
}

pub fn init_failure_message(failure: &InitFailure) -> String {
    match failure {
        InitFailure::Adapter(reason) => {
            format!("Could not reach the identity provider ({reason}). Reload the page to try again.")
        }
        InitFailure::AlreadyStarted => "Session setup was started twice. Reload the page.".to_owned(),
    }
}

pub fn forbidden_message(missing: &[String]) -> String {
    match missing {
        [] => "Your account is not allowed to view this page.".to_owned(),
        [role] => format!("This page requires the '{role}' role."),
        roles => format!("This page requires these roles: {}.", roles.join(", ")),
    }
}
