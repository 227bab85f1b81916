//! Client state: the persisted session, alert queue, and per-form status.
//!
//! ARCHITECTURE
//! ============
//! `session` is the only state that outlives a page load. `alert` and `form`
//! are reactive view state provided through Leptos signals.

pub mod alert;
pub mod form;
pub mod session;
