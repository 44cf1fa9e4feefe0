//! Networking and identity-provider bindings.
//!
//! SYSTEM CONTEXT
//! ==============
//! `config` fetches deployment settings from the host, `keycloak` binds
//! keycloak-js to the session core's adapter trait, and `keycloak_options`
//! builds the option objects passed across that boundary.

pub mod config;
pub mod keycloak;
pub mod keycloak_options;
