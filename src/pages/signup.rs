//! Signup page: name, email, password, and confirmation with live matching.

use leptos::prelude::*;

use super::{PageDeps, settle};
use crate::flows::signup::{self, BUSY_LABEL, IDLE_LABEL, SignupForm};
use crate::route::Page;
use crate::state::form::FormState;
use crate::util::validate::PasswordMatch;

#[component]
pub fn SignupPage() -> impl IntoView {
    let deps = PageDeps::from_context();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let status = RwSignal::new(FormState::default());

    let snapshot = move || SignupForm {
        name: name.get_untracked(),
        email: email.get_untracked(),
        password: password.get_untracked(),
        confirm: confirm.get_untracked(),
    };
    let matching = Memo::new(move |_| {
        SignupForm { password: password.get(), confirm: confirm.get(), ..SignupForm::default() }.password_match()
    });

    // Native validity of the confirmation input mirrors the match state.
    let confirm_ref = NodeRef::<leptos::html::Input>::new();
    Effect::new(move || {
        let message = matching.get().custom_validity();
        #[cfg(feature = "csr")]
        if let Some(input) = confirm_ref.get() {
            input.set_custom_validity(&message);
        }
        #[cfg(not(feature = "csr"))]
        let _ = (message, confirm_ref);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        if status.get_untracked().busy {
            return;
        }
        let form = snapshot();
        let ctx = deps.flow_context();
        leptos::task::spawn_local(async move {
            match signup::run(&ctx, &form, || status.update(FormState::begin)).await {
                Ok(outcome) => settle(status, outcome),
                Err(e) => {
                    leptos::logging::log!("signup form invalid: {e}");
                    status.update(FormState::reject);
                }
            }
        });
    };

    view! {
        <main class="auth-page">
            <div class="card auth-card shadow-sm">
                <div class="card-body p-4">
                    <h1 class="h3 mb-4 text-center">"Create Account"</h1>
                    <form
                        id="signupForm"
                        class=move || status.get().form_class()
                        novalidate=true
                        on:submit=on_submit
                    >
                        <div class="mb-3">
                            <label for="signupName" class="form-label">"Full name"</label>
                            <input
                                id="signupName"
                                class="form-control"
                                type="text"
                                required=true
                                prop:value=move || name.get()
                                on:input=move |ev| name.set(event_target_value(&ev))
                            />
                            <div class="invalid-feedback">"Please enter your name."</div>
                        </div>
                        <div class="mb-3">
                            <label for="signupEmail" class="form-label">"Email address"</label>
                            <input
                                id="signupEmail"
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
                            <label for="signupPassword" class="form-label">"Password"</label>
                            <input
                                id="signupPassword"
                                class="form-control"
                                type="password"
                                required=true
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                            <div class="invalid-feedback">"Please choose a password."</div>
                        </div>
                        <div class="mb-3">
                            <label for="signupConfirmPassword" class="form-label">"Confirm password"</label>
                            <input
                                id="signupConfirmPassword"
                                node_ref=confirm_ref
                                class=move || format!("form-control {}", matching.get().input_class())
                                type="password"
                                required=true
                                prop:value=move || confirm.get()
                                on:input=move |ev| confirm.set(event_target_value(&ev))
                            />
                            <div
                                id="passwordMatchFeedback"
                                class="invalid-feedback"
                                class:show=move || matching.get() == PasswordMatch::Mismatch
                            >
                                "Passwords do not match."
                            </div>
                            <div
                                id="passwordMatchSuccess"
                                class="valid-feedback"
                                class:show=move || matching.get() == PasswordMatch::Match
                            >
                                "Passwords match."
                            </div>
                        </div>
                        <button class="btn btn-primary w-100" type="submit" disabled=move || status.get().busy>
                            {move || if status.get().busy { BUSY_LABEL } else { IDLE_LABEL }}
                        </button>
                    </form>
                    <p class="text-center mt-3 mb-0">
                        "Already have an account? "
                        <a href=Page::Login.file_name()>"Log in"</a>
                    </p>
                </div>
            </div>
        </main>
    }
}
