//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its load/submit orchestration (via `state::page`) and
//! delegates chrome, overlays, and form controls to `components`.

pub mod areas;
pub mod assets;
pub mod assignments;
pub mod categories;
pub(crate) mod common;
pub mod companies;
pub mod dashboard;
pub mod employees;
pub mod login;
pub mod maintenance;
pub mod sites;
