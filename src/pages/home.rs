//! Home page: greeting, logout, and placeholder cards.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only gated page. The session is checked once during setup; a
//! visitor without one is sent to login and never sees a greeting.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use super::PageDeps;
use crate::flows::FlowOutcome;
use crate::flows::home::{self, HomeView, Placeholder};
use crate::state::alert::SignalAlerts;
use crate::state::session::UserSession;
use crate::util::navigate::navigate_to;

fn placeholder_click(alerts: SignalAlerts, which: Placeholder) -> impl Fn(leptos::ev::MouseEvent) + Copy + 'static {
    move |ev| {
        ev.prevent_default();
        home::show_placeholder(&alerts, which);
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let deps = PageDeps::from_context();
    let user = match home::enter(&deps.sessions()) {
        HomeView::Greeting(session) => Some(session),
        HomeView::Redirect(nav) => {
            navigate_to(nav.to, nav.after);
            None
        }
    };

    match user {
        Some(session) => view! { <Dashboard deps=deps session=session/> }.into_any(),
        None => view! {
            <main class="home-page">
                <p class="text-center mt-5">"Redirecting to login..."</p>
            </main>
        }
        .into_any(),
    }
}

#[component]
fn Dashboard(deps: PageDeps, session: UserSession) -> impl IntoView {
    let alerts = deps.presenter();
    let logging_out = RwSignal::new(false);

    let on_logout = move |_| {
        if logging_out.get_untracked() {
            return;
        }
        logging_out.set(true);
        let ctx = deps.flow_context();
        leptos::task::spawn_local(async move {
            if let FlowOutcome::Navigate(nav) = home::logout(&ctx).await {
                navigate_to(nav.to, nav.after);
            }
        });
    };

    view! {
        <nav class="navbar navbar-expand navbar-dark bg-primary">
            <div class="container">
                <span class="navbar-brand">"Demo App"</span>
                <ul class="navbar-nav ms-auto">
                    <li class="nav-item">
                        <a id="profileLink" class="nav-link" href="#" on:click=placeholder_click(alerts, Placeholder::Profile)>
                            "Profile"
                        </a>
                    </li>
                    <li class="nav-item">
                        <a id="settingsLink" class="nav-link" href="#" on:click=placeholder_click(alerts, Placeholder::Settings)>
                            "Settings"
                        </a>
                    </li>
                    <li class="nav-item">
                        <button
                            id="logoutBtn"
                            class="btn btn-outline-light ms-2"
                            type="button"
                            disabled=move || logging_out.get()
                            on:click=on_logout
                        >
                            "Logout"
                        </button>
                    </li>
                </ul>
            </div>
        </nav>
        <main class="home-page container py-5">
            <h1 class="mb-1">"Welcome, " <span id="userName">{session.name.clone()}</span> "!"</h1>
            <p class="text-muted mb-4">{session.email.clone()}</p>
            <div class="row g-4">
                <div class="col-md-4">
                    <div class="card h-100">
                        <div class="card-body">
                            <h2 class="h5 card-title">"Profile"</h2>
                            <p class="card-text">"View and edit your personal information."</p>
                            <button id="profileCardBtn" class="btn btn-primary" type="button" on:click=placeholder_click(alerts, Placeholder::Profile)>
                                "Open Profile"
                            </button>
                        </div>
                    </div>
                </div>
                <div class="col-md-4">
                    <div class="card h-100">
                        <div class="card-body">
                            <h2 class="h5 card-title">"Settings"</h2>
                            <p class="card-text">"Manage your account preferences."</p>
                            <button id="settingsCardBtn" class="btn btn-primary" type="button" on:click=placeholder_click(alerts, Placeholder::Settings)>
                                "Open Settings"
                            </button>
                        </div>
                    </div>
                </div>
                <div class="col-md-4">
                    <div class="card h-100">
                        <div class="card-body">
                            <h2 class="h5 card-title">"Dashboard"</h2>
                            <p class="card-text">"See an overview of your activity."</p>
                            <button id="dashboardCardBtn" class="btn btn-primary" type="button" on:click=placeholder_click(alerts, Placeholder::Dashboard)>
                                "Open Dashboard"
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </main>
    }
}
