//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! A reactive mirror of the session handle. The handle's subscriber writes
//! every new snapshot here; gates and user-aware components read it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use session::{AccessGate, GateDecision, SessionSnapshot, SessionStatus};

/// Latest session snapshot, provided as `RwSignal<AuthState>`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub snapshot: SessionSnapshot,
}

impl AuthState {
    /// Bootstrap has not settled yet.
    pub fn loading(&self) -> bool {
        !self.snapshot.status.is_settled()
    }

    pub fn is_authenticated(&self) -> bool {
        self.snapshot.is_authenticated()
    }

    pub fn init_failed(&self) -> bool {
        matches!(self.snapshot.status, SessionStatus::Failed(_))
    }

    /// Name shown in the nav bar.
    pub fn display_name(&self) -> Option<String> {
        self.snapshot.username().map(str::to_owned)
    }

    /// Gate decision for `path` against the current snapshot.
    pub fn decide(&self, gate: &AccessGate, path: &str) -> GateDecision {
        gate.decide(&self.snapshot, path)
    }
}
