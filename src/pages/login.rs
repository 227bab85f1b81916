//! Login page: email + password form.

use leptos::prelude::*;

use super::{PageDeps, settle};
use crate::flows::login::{self, BUSY_LABEL, IDLE_LABEL, LoginForm};
use crate::route::Page;
use crate::state::form::FormState;

#[component]
pub fn LoginPage() -> impl IntoView {
    let deps = PageDeps::from_context();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let status = RwSignal::new(FormState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        if status.get_untracked().busy {
            return;
        }
        let form = LoginForm { email: email.get_untracked(), password: password.get_untracked() };
        let ctx = deps.flow_context();
        leptos::task::spawn_local(async move {
            match login::run(&ctx, &form, || status.update(FormState::begin)).await {
                Ok(outcome) => settle(status, outcome),
                Err(e) => {
                    leptos::logging::log!("login form invalid: {e}");
                    status.update(FormState::reject);
                }
            }
        });
    };

    view! {
        <main class="auth-page">
            <div class="card auth-card shadow-sm">
                <div class="card-body p-4">
                    <h1 class="h3 mb-4 text-center">"Welcome Back"</h1>
                    <form
                        id="loginForm"
                        class=move || status.get().form_class()
                        novalidate=true
                        on:submit=on_submit
                    >
                        <div class="mb-3">
                            <label for="loginEmail" class="form-label">"Email address"</label>
                            <input
                                id="loginEmail"
                                class="form-control"
                                type="email"
                                placeholder="you@example.com"
                                required=true
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                            <div class="invalid-feedback">"Please enter a valid email address."</div>
                        </div>
                        <div class="mb-3">
                            <label for="loginPassword" class="form-label">"Password"</label>
                            <input
                                id="loginPassword"
                                class="form-control"
                                type="password"
                                required=true
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                            <div class="invalid-feedback">"Please enter your password."</div>
                        </div>
                        <button class="btn btn-primary w-100" type="submit" disabled=move || status.get().busy>
                            {move || if status.get().busy { BUSY_LABEL } else { IDLE_LABEL }}
                        </button>
                    </form>
                    <p class="text-center mt-3 mb-0">
                        "Don't have an account? "
                        <a href=Page::Signup.file_name()>"Sign up"</a>
                    </p>
                </div>
            </div>
        </main>
    }
}
