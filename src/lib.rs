//! # authpages
//!
//! Leptos + WASM client for the login / signup / home demo pages.
//!
//! Each static page (`login.html`, `signup.html`, `index.html`) loads the same
//! bundle; the bootstrap in [`app`] resolves the page from the URL and mounts
//! its view. Form handling lives in [`flows`] as plain async functions over
//! injected API, storage, and alert seams so it can be tested without a DOM.

pub mod app;
pub mod components;
pub mod config;
pub mod flows;
pub mod net;
pub mod pages;
pub mod route;
pub mod state;
pub mod util;

#[cfg(test)]
pub(crate) mod test_helpers;
