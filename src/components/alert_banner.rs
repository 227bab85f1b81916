//! Fixed-position stack of dismissible alerts.

use leptos::prelude::*;

use crate::state::alert::{Alert, AlertState};

/// Renders every alert in the shared [`AlertState`] with a close button.
#[component]
pub fn AlertBanner() -> impl IntoView {
    let alerts = expect_context::<RwSignal<AlertState>>();

    view! {
        <div class="alert-stack position-fixed top-0 start-50 translate-middle-x mt-3">
            <For
                each=move || alerts.get().items
                key=|alert| alert.id
                children=move |alert: Alert| {
                    let id = alert.id;
                    let class = format!("alert {} alert-dismissible fade show", alert.level.css_class());
                    view! {
                        <div class=class role="alert">
                            {alert.message}
                            <button
                                type="button"
                                class="btn-close"
                                aria-label="Close"
                                on:click=move |_| {
                                    alerts.update(|s| {
                                        s.dismiss(id);
                                    });
                                }
                            ></button>
                        </div>
                    }
                }
            />
        </div>
    }
}
