//! keycloak-js binding for the session core.
//!
//! SYSTEM CONTEXT
//! ==============
//! `index.html` imports the keycloak-js module and exposes it as the global
//! `Keycloak` class. This module wraps one instance in [`IdentityAdapter`]: promises
//! become futures, `on*` callbacks become [`session::AdapterEvent`]s on the
//! sink the session handle registers.
//!
//! TRADE-OFFS
//! ==========
//! Options and token payloads cross the boundary as JSON text
//! (`JSON.parse` / `JSON.stringify`) rather than through a typed bridge.
//! The objects are tiny and the field names stay testable natively.

use std::rc::Rc;

use session::{AdapterError, IdentityAdapter, SessionSettings};

#[cfg(feature = "csr")]
pub use browser::KeycloakAdapter;

/// Build the identity adapter for `settings`.
///
/// # Errors
///
/// Returns [`AdapterError::Unavailable`] when keycloak-js is not loaded, or
/// always on non-browser builds.
pub fn connect(settings: &SessionSettings) -> Result<Rc<dyn IdentityAdapter>, AdapterError> {
    #[cfg(feature = "csr")]
    {
        let adapter = browser::KeycloakAdapter::new(settings)?;
        Ok(Rc::new(adapter))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = settings;
        Err(AdapterError::Unavailable("keycloak-js requires a browser build".to_owned()))
    }
}

#[cfg(feature = "csr")]
mod browser {
    use std::cell::RefCell;

    use js_sys::{Function, JSON, Promise};
    use serde_json::Value;
    use session::{
        AdapterError, AdapterEvent, EventSink, IdentityAdapter, InitOptions, LoginOptions, LogoutOptions,
        SessionSettings,
    };
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::JsFuture;

    use crate::net::keycloak_options;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_name = Keycloak)]
        type JsKeycloak;

        #[wasm_bindgen(constructor, catch, js_class = "Keycloak")]
        fn new(config: &JsValue) -> Result<JsKeycloak, JsValue>;

        #[wasm_bindgen(method, catch)]
        fn init(this: &JsKeycloak, options: &JsValue) -> Result<Promise, JsValue>;

        #[wasm_bindgen(method, catch)]
        fn login(this: &JsKeycloak, options: &JsValue) -> Result<Promise, JsValue>;

        #[wasm_bindgen(method, catch)]
        fn logout(this: &JsKeycloak, options: &JsValue) -> Result<Promise, JsValue>;

        #[wasm_bindgen(method, catch, js_name = updateToken)]
        fn update_token(this: &JsKeycloak, min_validity: u32) -> Result<Promise, JsValue>;

        #[wasm_bindgen(method, getter)]
        fn authenticated(this: &JsKeycloak) -> Option<bool>;

        #[wasm_bindgen(method, getter, js_name = tokenParsed)]
        fn token_parsed(this: &JsKeycloak) -> JsValue;

        #[wasm_bindgen(method, setter, js_name = onAuthSuccess)]
        fn set_on_auth_success(this: &JsKeycloak, callback: &Function);

        #[wasm_bindgen(method, setter, js_name = onAuthError)]
        fn set_on_auth_error(this: &JsKeycloak, callback: &Function);

        #[wasm_bindgen(method, setter, js_name = onAuthLogout)]
        fn set_on_auth_logout(this: &JsKeycloak, callback: &Function);

        #[wasm_bindgen(method, setter, js_name = onAuthRefreshSuccess)]
        fn set_on_auth_refresh_success(this: &JsKeycloak, callback: &Function);

        #[wasm_bindgen(method, setter, js_name = onAuthRefreshError)]
        fn set_on_auth_refresh_error(this: &JsKeycloak, callback: &Function);

        #[wasm_bindgen(method, setter, js_name = onTokenExpired)]
        fn set_on_token_expired(this: &JsKeycloak, callback: &Function);
    }

    type CallbackSetter = fn(&JsKeycloak, &Function);

    /// One keycloak-js instance. Callbacks live as long as the adapter.
    pub struct KeycloakAdapter {
        keycloak: JsKeycloak,
        callbacks: RefCell<Vec<Closure<dyn Fn()>>>,
    }

    impl KeycloakAdapter {
        /// `new Keycloak({ url, realm, clientId })`.
        ///
        /// # Errors
        ///
        /// Returns [`AdapterError::Unavailable`] if the `Keycloak` global is
        /// missing or rejects the config.
        pub fn new(settings: &SessionSettings) -> Result<Self, AdapterError> {
            let config = to_js(&keycloak_options::provider_config(&settings.config))?;
            let keycloak = JsKeycloak::new(&config)
                .map_err(|e| AdapterError::Unavailable(format!("keycloak-js not loaded: {}", js_error_message(&e))))?;
            Ok(Self { keycloak, callbacks: RefCell::new(Vec::new()) })
        }
    }

    #[async_trait::async_trait(?Send)]
    impl IdentityAdapter for KeycloakAdapter {
        async fn init(&self, options: InitOptions) -> Result<bool, AdapterError> {
            let js_options = to_js(&keycloak_options::init_object(&options))?;
            let authenticated = settle(self.keycloak.init(&js_options)).await?;
            Ok(authenticated.as_bool().unwrap_or(false))
        }

        async fn login(&self, options: LoginOptions) -> Result<(), AdapterError> {
            let js_options = to_js(&keycloak_options::redirect_object(options.redirect_uri.as_deref()))?;
            settle(self.keycloak.login(&js_options)).await.map(|_| ())
        }

        async fn logout(&self, options: LogoutOptions) -> Result<(), AdapterError> {
            let js_options = to_js(&keycloak_options::redirect_object(options.redirect_uri.as_deref()))?;
            settle(self.keycloak.logout(&js_options)).await.map(|_| ())
        }

        async fn update_token(&self, min_validity_secs: u32) -> Result<bool, AdapterError> {
            let refreshed = settle(self.keycloak.update_token(min_validity_secs)).await?;
            Ok(refreshed.as_bool().unwrap_or(false))
        }

        fn authenticated(&self) -> bool {
            self.keycloak.authenticated().unwrap_or(false)
        }

        fn token_parsed(&self) -> Option<Value> {
            let raw = self.keycloak.token_parsed();
            if raw.is_undefined() || raw.is_null() {
                return None;
            }
            let json = JSON::stringify(&raw).ok().and_then(|s| s.as_string());
            keycloak_options::parse_token(json.as_deref())
        }

        fn register_events(&self, sink: EventSink) {
            let setters: [(AdapterEvent, CallbackSetter); 6] = [
                (AdapterEvent::AuthSuccess, JsKeycloak::set_on_auth_success),
                (AdapterEvent::AuthError, JsKeycloak::set_on_auth_error),
                (AdapterEvent::AuthLogout, JsKeycloak::set_on_auth_logout),
                (AdapterEvent::AuthRefreshSuccess, JsKeycloak::set_on_auth_refresh_success),
                (AdapterEvent::AuthRefreshError, JsKeycloak::set_on_auth_refresh_error),
                (AdapterEvent::TokenExpired, JsKeycloak::set_on_token_expired),
            ];

            let mut callbacks = self.callbacks.borrow_mut();
            for (event, set) in setters {
                let sink = sink.clone();
                let callback = Closure::<dyn Fn()>::new(move || {
                    if !sink.emit(event) {
                        leptos::logging::warn!("keycloak event {event:?} dropped: session watcher gone");
                    }
                });
                set(&self.keycloak, callback.as_ref().unchecked_ref());
                callbacks.push(callback);
            }
        }
    }

    async fn settle(call: Result<Promise, JsValue>) -> Result<JsValue, AdapterError> {
        let promise = call.map_err(|e| AdapterError::Call(js_error_message(&e)))?;
        JsFuture::from(promise)
            .await
            .map_err(|e| AdapterError::Call(js_error_message(&e)))
    }

    fn to_js(value: &Value) -> Result<JsValue, AdapterError> {
        JSON::parse(&value.to_string()).map_err(|e| AdapterError::Call(js_error_message(&e)))
    }

    /// keycloak-js rejects with `Error`s, strings, or `undefined`.
    fn js_error_message(err: &JsValue) -> String {
        if let Some(error) = err.dyn_ref::<js_sys::Error>() {
            return String::from(error.message());
        }
        if let Some(message) = err.as_string() {
            return message;
        }
        JSON::stringify(err)
            .ok()
            .and_then(|s| s.as_string())
            .unwrap_or_else(|| "keycloak-js call rejected".to_owned())
    }
}
