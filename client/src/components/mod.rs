//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session_root` owns the session handle and the router; `auth_gate` wraps
//! protected route content; `panels` renders the gate's non-content states.

pub mod auth_gate;
pub mod nav_bar;
pub mod panels;
pub mod session_root;
