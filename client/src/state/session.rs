//! Context access to the session handle.
//!
//! The handle is `Rc`-based and not `Send`, so it lives in a local arena
//! slot. Event handlers capture the (`Copy`) slot and read the handle out
//! when they fire.

use leptos::prelude::*;
use session::SessionHandle;

/// Context type holding the process-wide session handle.
pub type SessionContext = StoredValue<SessionHandle, LocalStorage>;

pub fn provide_session(handle: SessionHandle) {
    provide_context::<SessionContext>(StoredValue::new_local(handle));
}

/// The session slot provided by `SessionRoot`.
///
/// # Panics
///
/// Panics if called outside a `SessionRoot`.
pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}
