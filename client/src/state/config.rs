//! Deployment settings load state.
//!
//! The SPA cannot build a session handle until `/app-config.json` arrives.
//! A load failure is terminal for the page: bootstrap is never invoked.

use session::SessionSettings;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum ConfigPhase {
    #[default]
    Loading,
    Ready(SessionSettings),
    Failed(String),
}
