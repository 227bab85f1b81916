//! Home page: access gate, logout, and placeholder actions.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use crate::route::Page;
use crate::state::alert::{AlertLevel, AlertPresenter};
use crate::state::session::{SessionStore, UserSession};

use super::{FlowContext, FlowOutcome, Navigation};

/// What the home page renders on load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HomeView {
    Greeting(UserSession),
    /// No usable session; leave before rendering anything user-specific.
    Redirect(Navigation),
}

/// Gate the home page on a stored session with a non-empty name.
#[must_use]
pub fn enter(sessions: &SessionStore) -> HomeView {
    match sessions.load() {
        Some(session) if !session.name.is_empty() => HomeView::Greeting(session),
        _ => HomeView::Redirect(Navigation::now(Page::Login)),
    }
}

/// Tell the backend, then forget the session and go to login.
///
/// The request is best-effort: its failure is logged and never blocks the
/// local logout.
pub async fn logout(ctx: &FlowContext) -> FlowOutcome {
    if let Err(e) = ctx.api.logout().await {
        log::warn!("logout request failed: {e}");
    }
    ctx.sessions.clear();
    FlowOutcome::Navigate(Navigation::now(Page::Login))
}

/// Home page actions that are not built yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placeholder {
    Profile,
    Settings,
    Dashboard,
}

impl Placeholder {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Profile => "Profile page coming soon!",
            Self::Settings => "Settings page coming soon!",
            Self::Dashboard => "Dashboard page coming soon!",
        }
    }
}

pub fn show_placeholder(alerts: &dyn AlertPresenter, which: Placeholder) {
    alerts.show(which.message(), AlertLevel::Info);
}
