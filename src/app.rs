//! Root component and browser bootstrap.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_meta::{Title, provide_meta_context};

use crate::components::alert_banner::AlertBanner;
use crate::config::ClientConfig;
use crate::pages::{home::HomePage, login::LoginPage, signup::SignupPage};
use crate::route::Page;
use crate::state::alert::AlertState;

/// Root application component for one static page.
///
/// Provides the alert queue and config to the page, then mounts exactly the
/// view for `page`.
#[component]
pub fn App(page: Page, config: ClientConfig) -> impl IntoView {
    provide_meta_context();

    let alerts = RwSignal::new(AlertState::default());
    provide_context(alerts);
    provide_context(config);

    let body = match page {
        Page::Login => view! { <LoginPage/> }.into_any(),
        Page::Signup => view! { <SignupPage/> }.into_any(),
        Page::Home => view! { <HomePage/> }.into_any(),
    };

    view! {
        <Title text=page.title()/>
        <AlertBanner/>
        {body}
    }
}

/// WASM entry point: resolve the page from the URL and mount it.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = ClientConfig::from_build_env().unwrap_or_else(|e| {
        log::error!("invalid build configuration ({e}); using defaults");
        ClientConfig::default()
    });
    let path = crate::util::navigate::current_path();
    let Some(page) = Page::from_path(&path) else {
        log::info!("no page handler for {path:?}; nothing mounted");
        return;
    };
    log::info!("mounting {page:?} page");

    leptos::mount::mount_to_body(move || view! { <App page=page config=config/> });
}
