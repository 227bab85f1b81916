//! Signup form submission and the live password-confirmation check.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use crate::net::types::{ApiError, SignupRequest};
use crate::state::alert::AlertLevel;
use crate::state::session::UserSession;
use crate::util::validate::{FieldError, PasswordMatch, password_match, validate_signup};

use super::{FlowContext, FlowOutcome, establish_session, unexpected};

pub const SIGNUP_FAILED: &str = "Signup failed";
pub const SIGNUP_REJECTED: &str = "Failed to create account. Please try again.";
pub const SIGNUP_CREATED: &str = "Account created successfully! Redirecting...";
pub const DEMO_SIGNUP: &str = "Demo mode: Account created (Backend not connected)";
pub const BUSY_LABEL: &str = "Creating account...";
pub const IDLE_LABEL: &str = "Sign Up";

/// Raw values of the signup form inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm: String,
}

impl SignupForm {
    /// Live state of the confirmation field, re-evaluated on every keystroke
    /// in either password input.
    #[must_use]
    pub fn password_match(&self) -> PasswordMatch {
        password_match(&self.password, &self.confirm)
    }
}

/// Validate `form`, call `on_send`, then submit.
///
/// # Errors
///
/// Returns the [`FieldError`] that stopped submission; no request is made.
/// A password mismatch is reported before any other constraint.
pub async fn run(ctx: &FlowContext, form: &SignupForm, on_send: impl FnOnce()) -> Result<FlowOutcome, FieldError> {
    let request = validate_signup(&form.name, &form.email, &form.password, &form.confirm)?;
    on_send();
    Ok(submit(ctx, &request).await)
}

/// Send a validated signup request and settle the outcome.
pub async fn submit(ctx: &FlowContext, request: &SignupRequest) -> FlowOutcome {
    let session = UserSession::new(request.name.clone(), request.email.clone());
    match ctx.api.signup(request).await {
        Ok(()) => establish_session(
            ctx,
            "signup",
            &session,
            Some((SIGNUP_CREATED, AlertLevel::Success)),
            ctx.config.delays.signup_success,
        ),
        Err(err @ ApiError::Status { .. }) => {
            let message = err
                .status_message(SIGNUP_FAILED, SIGNUP_REJECTED)
                .unwrap_or_else(|| SIGNUP_FAILED.to_owned());
            log::warn!("signup rejected: {err}");
            ctx.alerts.show(&message, AlertLevel::Danger);
            FlowOutcome::Restored
        }
        Err(ApiError::Transport(reason)) if ctx.config.demo_mode.is_enabled() => {
            log::info!("signup backend unreachable ({reason}); continuing in demo mode");
            establish_session(
                ctx,
                "signup",
                &session,
                Some((DEMO_SIGNUP, AlertLevel::Info)),
                ctx.config.delays.signup_demo,
            )
        }
        Err(err) => unexpected(ctx, "signup", &err),
    }
}
