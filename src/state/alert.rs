//! Dismissible notification banners.
//!
//! DESIGN
//! ======
//! Flows talk to an [`AlertPresenter`]; the page implementation pushes into a
//! reactive [`AlertState`] rendered by `components::alert_banner`, and each
//! banner removes itself after the configured TTL unless dismissed first.

#[cfg(test)]
#[path = "alert_test.rs"]
mod alert_test;

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use leptos::prelude::*;

/// Severity of an alert; maps onto the `alert-*` CSS modifiers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlertLevel {
    Success,
    Danger,
    Warning,
    #[default]
    Info,
}

impl AlertLevel {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "alert-success",
            Self::Danger => "alert-danger",
            Self::Warning => "alert-warning",
            Self::Info => "alert-info",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    pub id: u64,
    pub message: String,
    pub level: AlertLevel,
}

/// Alerts currently on screen, oldest first.
#[derive(Clone, Debug, Default)]
pub struct AlertState {
    pub items: Vec<Alert>,
    next_id: u64,
}

impl AlertState {
    /// Add an alert and return its id.
    pub fn push(&mut self, message: impl Into<String>, level: AlertLevel) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Alert { id, message: message.into(), level });
        id
    }

    /// Remove the alert with `id`; returns whether it was still showing.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|a| a.id != id);
        self.items.len() != before
    }
}

/// Sink for user-facing notifications.
pub trait AlertPresenter {
    fn show(&self, message: &str, level: AlertLevel);
}

/// Future that resolves once an alert's TTL has elapsed.
pub type Expiry = Pin<Box<dyn Future<Output = ()>>>;

/// Timer used to expire alerts.
pub type Sleep = fn(Duration) -> Expiry;

#[cfg(feature = "csr")]
fn browser_sleep(ttl: Duration) -> Expiry {
    Box::pin(gloo_timers::future::sleep(ttl))
}

#[cfg(not(feature = "csr"))]
fn browser_sleep(_ttl: Duration) -> Expiry {
    Box::pin(std::future::pending())
}

/// Presenter backed by the page's alert signal.
#[derive(Clone, Copy)]
pub struct SignalAlerts {
    state: RwSignal<AlertState>,
    ttl: Duration,
    sleep: Sleep,
}

impl SignalAlerts {
    #[must_use]
    pub fn new(state: RwSignal<AlertState>, ttl: Duration) -> Self {
        Self { state, ttl, sleep: browser_sleep }
    }

    /// Replace the timer that drives expiry.
    #[cfg(test)]
    #[must_use]
    pub(crate) fn with_sleep(self, sleep: Sleep) -> Self {
        Self { sleep, ..self }
    }

    /// Push an alert and return the future that removes it after the TTL.
    fn push_expiring(&self, message: &str, level: AlertLevel) -> Expiry {
        let mut id = 0;
        self.state.update(|s| id = s.push(message, level));

        let state = self.state;
        let timer = (self.sleep)(self.ttl);
        Box::pin(async move {
            timer.await;
            state.update(|s| {
                s.dismiss(id);
            });
        })
    }
}

impl AlertPresenter for SignalAlerts {
    fn show(&self, message: &str, level: AlertLevel) {
        let expiry = self.push_expiring(message, level);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(expiry);
        #[cfg(not(feature = "csr"))]
        drop(expiry);
    }
}
