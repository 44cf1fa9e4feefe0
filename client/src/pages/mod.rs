//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Public pages (`home`, `login`) read the auth signal directly. Protected
//! pages wrap their content in `AuthGate` and never check auth themselves.

pub mod admin;
pub mod fallback;
pub mod home;
pub mod login;
pub mod profile;
pub mod protected;
