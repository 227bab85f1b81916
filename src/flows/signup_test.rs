use std::time::Duration;

use super::*;
use crate::config::DemoMode;
use crate::flows::{GENERIC_ERROR, Navigation};
use crate::net::types::ErrorBody;
use crate::route::Page;
use crate::test_helpers::{Call, Harness, MockApi};

fn form(name: &str, email: &str, password: &str, confirm: &str) -> SignupForm {
    SignupForm {
        name: name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        confirm: confirm.to_owned(),
    }
}

#[tokio::test]
async fn mismatched_passwords_make_no_request() {
    let h = Harness::new(MockApi::signup_replies(vec![Ok(())]));
    let mut sent = false;
    let err = run(&h.ctx, &form("Ada", "ada@example.com", "secret1", "secret2"), || sent = true)
        .await
        .unwrap_err();

    assert_eq!(err, FieldError::PasswordMismatch);
    assert!(!sent);
    assert_eq!(h.api.call_count(), 0);
    assert_eq!(h.ctx.sessions.load(), None);
}

#[tokio::test]
async fn success_stores_submitted_identity() {
    let h = Harness::new(MockApi::signup_replies(vec![Ok(())]));
    let outcome = run(&h.ctx, &form(" Ada ", "ada@example.com", "pw", "pw"), || {}).await.unwrap();

    assert_eq!(
        outcome,
        FlowOutcome::Navigate(Navigation::after(Page::Home, Duration::from_millis(1500)))
    );
    assert_eq!(h.ctx.sessions.load(), Some(UserSession::new("Ada", "ada@example.com")));
    assert_eq!(h.alerts.last(), Some((SIGNUP_CREATED.to_owned(), AlertLevel::Success)));
    assert_eq!(
        h.api.calls.borrow().as_slice(),
        &[Call::Signup(SignupRequest {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            password: "pw".into(),
        })]
    );
}

#[tokio::test]
async fn rejection_shows_message_and_restores() {
    let replies = vec![
        Err(ApiError::Status { status: 409, body: Some(ErrorBody { message: Some("Email already registered".into()) }) }),
        Err(ApiError::Status { status: 400, body: Some(ErrorBody::default()) }),
        Err(ApiError::Status { status: 502, body: None }),
    ];
    let h = Harness::new(MockApi::signup_replies(replies));
    let input = form("Ada", "ada@example.com", "pw", "pw");

    assert_eq!(run(&h.ctx, &input, || {}).await.unwrap(), FlowOutcome::Restored);
    assert_eq!(h.alerts.last(), Some(("Email already registered".to_owned(), AlertLevel::Danger)));
    run(&h.ctx, &input, || {}).await.unwrap();
    assert_eq!(h.alerts.last().unwrap().0, SIGNUP_REJECTED);
    run(&h.ctx, &input, || {}).await.unwrap();
    assert_eq!(h.alerts.last().unwrap().0, SIGNUP_FAILED);
    assert_eq!(h.ctx.sessions.load(), None);
}

#[tokio::test]
async fn transport_failure_enters_demo_mode() {
    let h = Harness::new(MockApi::default());
    let outcome = run(&h.ctx, &form("Ada", "ada@example.com", "pw", "pw"), || {}).await.unwrap();

    assert_eq!(outcome, FlowOutcome::Navigate(Navigation::after(Page::Home, Duration::from_secs(1))));
    assert_eq!(h.alerts.last(), Some((DEMO_SIGNUP.to_owned(), AlertLevel::Info)));
    assert_eq!(h.ctx.sessions.load(), Some(UserSession::new("Ada", "ada@example.com")));
}

#[tokio::test]
async fn transport_failure_with_demo_disabled_restores() {
    let h = Harness::with_demo_mode(MockApi::default(), DemoMode::Disabled);
    let outcome = run(&h.ctx, &form("Ada", "ada@example.com", "pw", "pw"), || {}).await.unwrap();
    assert_eq!(outcome, FlowOutcome::Restored);
    assert_eq!(h.alerts.last().unwrap().0, GENERIC_ERROR);
    assert_eq!(h.ctx.sessions.load(), None);
}

#[test]
fn live_match_follows_both_fields() {
    let mut input = form("Ada", "ada@example.com", "secret", "");
    assert_eq!(input.password_match(), PasswordMatch::Empty);
    input.confirm = "sec".into();
    assert_eq!(input.password_match(), PasswordMatch::Mismatch);
    input.confirm = "secret".into();
    assert_eq!(input.password_match(), PasswordMatch::Match);
    input.password = "secret!".into();
    assert_eq!(input.password_match(), PasswordMatch::Mismatch);
}

#[tokio::test]
async fn undecodable_success_body_is_generic_error() {
    let h = Harness::new(MockApi::signup_replies(vec![Err(ApiError::Decode("EOF while parsing".into()))]));
    let outcome = run(&h.ctx, &form("Ada", "ada@example.com", "pw", "pw"), || {}).await.unwrap();

    assert_eq!(outcome, FlowOutcome::Restored);
    assert_eq!(h.alerts.last(), Some((GENERIC_ERROR.to_owned(), AlertLevel::Danger)));
    assert_eq!(h.ctx.sessions.load(), None);
}
