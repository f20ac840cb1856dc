//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (`storage`) and pure
//! rules (`guard`, `format`, `forms`) from page and component logic so they
//! can be tested without a browser.

pub mod format;
pub mod forms;
pub mod guard;
pub mod storage;
