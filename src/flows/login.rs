//! Login form submission.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::net::types::{ApiError, LoginRequest};
use crate::state::alert::AlertLevel;
use crate::state::session::{UserSession, fallback_name};
use crate::util::validate::{FieldError, validate_login};

use super::{FlowContext, FlowOutcome, establish_session, unexpected};

pub const LOGIN_FAILED: &str = "Login failed";
pub const LOGIN_REJECTED: &str = "Invalid email or password. Please try again.";
pub const DEMO_LOGIN: &str = "Demo mode: Login successful (Backend not connected)";
pub const BUSY_LABEL: &str = "Logging in...";
pub const IDLE_LABEL: &str = "Login";

/// Raw values of the login form inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Validate `form`, call `on_send`, then submit.
///
/// # Errors
///
/// Returns the [`FieldError`] that stopped submission; no request is made.
pub async fn run(ctx: &FlowContext, form: &LoginForm, on_send: impl FnOnce()) -> Result<FlowOutcome, FieldError> {
    let request = validate_login(&form.email, &form.password)?;
    on_send();
    Ok(submit(ctx, &request).await)
}

/// Send a validated login request and settle the outcome.
pub async fn submit(ctx: &FlowContext, request: &LoginRequest) -> FlowOutcome {
    match ctx.api.login(request).await {
        Ok(resp) => {
            let name = resp
                .name
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| fallback_name(&request.email));
            let session = UserSession::new(name, request.email.clone());
            establish_session(ctx, "login", &session, None, std::time::Duration::ZERO)
        }
        Err(err @ ApiError::Status { .. }) => {
            let message = err
                .status_message(LOGIN_FAILED, LOGIN_REJECTED)
                .unwrap_or_else(|| LOGIN_FAILED.to_owned());
            log::warn!("login rejected: {err}");
            ctx.alerts.show(&message, AlertLevel::Danger);
            FlowOutcome::Restored
        }
        Err(ApiError::Transport(reason)) if ctx.config.demo_mode.is_enabled() => {
            log::info!("login backend unreachable ({reason}); continuing in demo mode");
            let session = UserSession::new(fallback_name(&request.email), request.email.clone());
            establish_session(
                ctx,
                "login",
                &session,
                Some((DEMO_LOGIN, AlertLevel::Info)),
                ctx.config.delays.login_demo,
            )
        }
        Err(err) => unexpected(ctx, "login", &err),
    }
}
