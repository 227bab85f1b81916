use super::*;
use crate::net::types::ErrorBody;

#[test]
fn status_error_keeps_json_error_body() {
    let err = status_error(401, Some(r#"{"message":"Invalid credentials"}"#));
    assert_eq!(
        err,
        ApiError::Status { status: 401, body: Some(ErrorBody { message: Some("Invalid credentials".into()) }) }
    );
}

#[test]
fn status_error_drops_non_json_body() {
    assert_eq!(status_error(502, Some("Bad Gateway")), ApiError::Status { status: 502, body: None });
    assert_eq!(status_error(500, None), ApiError::Status { status: 500, body: None });
}

#[test]
fn http_api_uses_configured_endpoints() {
    let api = HttpAuthApi::new(ApiEndpoints::with_base("https://auth.example"));
    assert_eq!(api.endpoints.signup, "https://auth.example/api/signup");
    assert_eq!(api.endpoints.login, "https://auth.example/api/login");
}

#[test]
fn success_body_must_be_json() {
    assert!(matches!(decode_body::<serde_json::Value>(""), Err(ApiError::Decode(_))));
    assert!(matches!(decode_body::<serde_json::Value>("Created"), Err(ApiError::Decode(_))));
    assert_eq!(decode_body::<serde_json::Value>("{}"), Ok(serde_json::json!({})));
}

#[test]
fn login_body_decodes_through_shared_helper() {
    let resp: LoginResponse = decode_body(r#"{"name":"Ada"}"#).unwrap();
    assert_eq!(resp.name.as_deref(), Some("Ada"));
    assert!(matches!(decode_body::<LoginResponse>("[]"), Err(ApiError::Decode(_))));
}

#[cfg(not(feature = "csr"))]
#[tokio::test]
async fn native_calls_fail_as_transport_errors() {
    let api = HttpAuthApi::default();
    let req = LoginRequest { email: "a@b.com".into(), password: "x".into() };
    assert!(matches!(api.login(&req).await, Err(ApiError::Transport(_))));
    assert!(matches!(api.logout().await, Err(ApiError::Transport(_))));
}
