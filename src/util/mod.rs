//! Utility helpers shared across page and flow modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, navigation) and input
//! rules from page logic so flows stay testable off the browser.

pub mod navigate;
pub mod storage;
pub mod validate;
