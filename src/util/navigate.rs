//! Full-page navigation between the static pages.

use std::time::Duration;

use crate::route::Page;

/// Load `page` in the current tab, optionally after `delay`.
///
/// Off the browser this only logs; there is no location to change.
pub fn navigate_to(page: Page, delay: Duration) {
    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            if !delay.is_zero() {
                gloo_timers::future::sleep(delay).await;
            }
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.location().set_href(page.file_name()) {
                    leptos::logging::warn!("navigation to {} failed: {e:?}", page.file_name());
                }
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        log::debug!("navigate to {} after {delay:?}", page.file_name());
    }
}

/// The current `location.pathname`, or empty when unavailable.
#[must_use]
pub fn current_path() -> String {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}
