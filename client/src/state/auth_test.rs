use serde_json::json;
use session::{Claims, DenialPolicy, InitFailure, NavigationIntent, SessionConfig, SessionSettings};

use super::*;

fn settings() -> SessionSettings {
    SessionSettings::new(SessionConfig {
        url: "http://id.example".to_owned(),
        realm: "r1".to_owned(),
        client_id: "c1".to_owned(),
    })
}

fn state(status: SessionStatus, claims: Option<serde_json::Value>) -> AuthState {
    AuthState { snapshot: SessionSnapshot { status, claims: claims.and_then(Claims::from_value) } }
}

// =============================================================
// AuthState flags
// =============================================================

#[test]
fn auth_state_default_is_loading() {
    let state = AuthState::default();
    assert!(state.loading());
    assert!(!state.is_authenticated());
    assert!(state.display_name().is_none());
}

#[test]
fn settled_states_are_not_loading() {
    assert!(!state(SessionStatus::Unauthenticated, None).loading());
    assert!(!state(SessionStatus::Authenticated, None).loading());
    assert!(state(SessionStatus::Failed(InitFailure::AlreadyStarted), None).init_failed());
}

#[test]
fn display_name_prefers_preferred_username() {
    let state = state(SessionStatus::Authenticated, Some(json!({ "preferred_username": "alice", "name": "Alice A" })));
    assert_eq!(state.display_name().as_deref(), Some("alice"));
}

// =============================================================
// Gate decisions
// =============================================================

#[test]
fn default_state_gates_to_loading() {
    let gate = AccessGate::new(&settings());
    assert_eq!(AuthState::default().decide(&gate, "/protected"), GateDecision::Loading);
}

#[test]
fn unauthenticated_state_redirects_with_intent() {
    let gate = AccessGate::new(&settings());
    assert_eq!(
        state(SessionStatus::Unauthenticated, None).decide(&gate, "/protected"),
        GateDecision::RedirectToLogin(NavigationIntent::denied("/login", "/protected"))
    );
}

#[test]
fn inline_policy_state_is_unauthorized() {
    let mut settings = settings();
    settings.denial_policy = DenialPolicy::InlineUnauthorized;
    let gate = AccessGate::new(&settings);
    assert!(matches!(
        state(SessionStatus::Unauthenticated, None).decide(&gate, "/protected"),
        GateDecision::Unauthorized(_)
    ));
}
