//! Small helpers kept out of components.
//!
//! `paths` is pure and tested natively; `browser` wraps the few `window`
//! calls the UI needs and compiles to no-ops outside the `csr` build.

pub mod browser;
pub mod paths;
