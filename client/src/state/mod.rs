//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern so components depend on small focused models:
//! `session` (persisted auth), `notifications` and `confirm` (the two
//! overlays), and `page` (per-route load/submit lifecycle).

pub mod confirm;
pub mod notifications;
pub mod page;
pub mod session;
