//! Page flows: what happens between a user action and the next page.
//!
//! ARCHITECTURE
//! ============
//! Each flow is a plain function over a [`FlowContext`] (API client, session
//! store, alert presenter, config) and returns a [`FlowOutcome`] telling the
//! page whether to navigate or restore its submit control. Pages own the DOM;
//! flows own the decisions.
//!
//! ERROR HANDLING
//! ==============
//! Local validation failures come back as `Err(FieldError)` before any request
//! is sent. Everything after that is reported through alerts and folded into a
//! `FlowOutcome`; no flow leaves the page unusable.

pub mod home;
pub mod login;
pub mod signup;

use std::rc::Rc;
use std::time::Duration;

use crate::config::ClientConfig;
use crate::net::api::{AuthApi, HttpAuthApi};
use crate::route::Page;
use crate::state::alert::{AlertLevel, AlertPresenter};
use crate::state::session::{SessionStore, UserSession};
use crate::util::storage::LocalStorage;

pub const GENERIC_ERROR: &str = "An error occurred. Please try again later.";

/// A pending page change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Navigation {
    pub to: Page,
    pub after: Duration,
}

impl Navigation {
    #[must_use]
    pub const fn now(to: Page) -> Self {
        Self { to, after: Duration::ZERO }
    }

    #[must_use]
    pub const fn after(to: Page, after: Duration) -> Self {
        Self { to, after }
    }
}

/// How a finished flow leaves the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlowOutcome {
    Navigate(Navigation),
    /// Stay on the page and re-enable the submit control.
    Restored,
}

/// Dependencies shared by every flow.
#[derive(Clone)]
pub struct FlowContext {
    pub api: Rc<dyn AuthApi>,
    pub sessions: SessionStore,
    pub alerts: Rc<dyn AlertPresenter>,
    pub config: Rc<ClientConfig>,
}

impl FlowContext {
    pub fn new(
        api: Rc<dyn AuthApi>,
        sessions: SessionStore,
        alerts: Rc<dyn AlertPresenter>,
        config: Rc<ClientConfig>,
    ) -> Self {
        Self { api, sessions, alerts, config }
    }

    /// Context wired to `fetch` and `localStorage`.
    pub fn browser(alerts: Rc<dyn AlertPresenter>, config: Rc<ClientConfig>) -> Self {
        let api = Rc::new(HttpAuthApi::new(config.endpoints.clone()));
        let sessions = SessionStore::new(Rc::new(LocalStorage), config.storage_key.clone());
        Self { api, sessions, alerts, config }
    }
}

/// Persist `session`, show the optional alert, and head home after `after`.
///
/// A failed write is reported like any other unexpected failure.
fn establish_session(
    ctx: &FlowContext,
    flow: &str,
    session: &UserSession,
    alert: Option<(&str, AlertLevel)>,
    after: Duration,
) -> FlowOutcome {
    if let Err(e) = ctx.sessions.save(session) {
        return unexpected(ctx, flow, &e);
    }
    if let Some((message, level)) = alert {
        ctx.alerts.show(message, level);
    }
    FlowOutcome::Navigate(Navigation::after(Page::Home, after))
}

fn unexpected(ctx: &FlowContext, flow: &str, err: &dyn std::fmt::Display) -> FlowOutcome {
    log::error!("{flow} error: {err}");
    ctx.alerts.show(GENERIC_ERROR, AlertLevel::Danger);
    FlowOutcome::Restored
}
