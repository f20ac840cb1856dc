//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the app chrome, the route guard, the two overlays, and
//! small presentational pieces shared by pages. They read shared handles
//! (`AuthState`, `Notifier`, `Confirmer`) from Leptos context.

pub mod confirm_dialog;
pub mod form_field;
pub mod layout;
pub mod loading;
pub mod notification_overlay;
pub mod protected;
pub mod status_badge;
