//! Window access for the few places that need it.
//!
//! Non-browser builds no-op so components stay renderable in native tests.

/// `window.location.origin`, e.g. `https://app.example`.
pub fn origin() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        web_sys::window().and_then(|w| w.location().origin().ok())
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Full page reload; the only retry path after a failed bootstrap.
pub fn reload() {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().reload() {
                leptos::logging::error!("page reload failed: {e:?}");
            }
        }
    }
}
