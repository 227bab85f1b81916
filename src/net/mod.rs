//! Networking modules for the auth REST endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` defines the [`api::AuthApi`] seam and its `gloo-net` implementation;
//! `types` holds the JSON payloads and the structural error taxonomy.

pub mod api;
pub mod types;
