//! Page modules, one per static HTML page.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form signals and markup and hands submissions to the
//! matching module in `flows`. The element ids are the ones the site's
//! stylesheet and copy expect (`loginForm`, `signupConfirmPassword`, ...).

pub mod home;
pub mod login;
pub mod signup;

use std::rc::Rc;

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::flows::{FlowContext, FlowOutcome};
use crate::state::alert::{AlertState, SignalAlerts};
use crate::state::form::FormState;
use crate::state::session::SessionStore;
use crate::util::navigate::navigate_to;
use crate::util::storage::LocalStorage;

/// Context values a page reads once during setup and reuses in handlers.
#[derive(Clone)]
pub(crate) struct PageDeps {
    alerts: RwSignal<AlertState>,
    config: ClientConfig,
}

impl PageDeps {
    pub(crate) fn from_context() -> Self {
        Self { alerts: expect_context::<RwSignal<AlertState>>(), config: expect_context::<ClientConfig>() }
    }

    pub(crate) fn presenter(&self) -> SignalAlerts {
        SignalAlerts::new(self.alerts, self.config.delays.alert_ttl)
    }

    pub(crate) fn sessions(&self) -> SessionStore {
        SessionStore::new(Rc::new(LocalStorage), self.config.storage_key.clone())
    }

    pub(crate) fn flow_context(&self) -> FlowContext {
        FlowContext::browser(Rc::new(self.presenter()), Rc::new(self.config.clone()))
    }
}

/// Apply a finished flow to the form and start any pending navigation.
pub(crate) fn settle(status: RwSignal<FormState>, outcome: FlowOutcome) {
    status.update(|s| s.finish(&outcome));
    if let FlowOutcome::Navigate(nav) = outcome {
        navigate_to(nav.to, nav.after);
    }
}
