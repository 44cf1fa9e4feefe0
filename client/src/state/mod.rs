//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `config` tracks loading the deployment settings; `auth` mirrors the
//! session handle into a reactive signal; `session` is the context wrapper
//! around the handle itself.

pub mod auth;
pub mod config;
pub mod session;
