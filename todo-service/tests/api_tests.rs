mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_signup_returns_token_that_resolves_to_the_user() {
    let app = TestApp::spawn().await;

    let token = app.signup("a@b.com", "pw123456").await;
    assert!(!token.is_empty());

    let response = app
        .get_authenticated("/api/users/me", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["email"], "a@b.com");
    assert_eq!(body["data"]["id"], "1");
}

#[tokio::test]
async fn test_signup_duplicate_email() {
    let app = TestApp::spawn().await;

    app.signup("a@b.com", "pw123456").await;

    let response = app
        .post("/api/auth/signup")
        .json(&json!({
            "email": "a@b.com",
            "password": "other_password",
            "passwordConfirmation": "other_password"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("already exists"));
}

#[tokio::test]
async fn test_signup_password_confirmation_mismatch() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/signup")
        .json(&json!({
            "email": "a@b.com",
            "password": "pw123456",
            "passwordConfirmation": "pw654321"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("do not match"));
}

#[tokio::test]
async fn test_signup_invalid_email() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/signup")
        .json(&json!({
            "email": "not-an-email",
            "password": "pw123456",
            "passwordConfirmation": "pw123456"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_signup_malformed_json() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/signup")
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_after_signup() {
    let app = TestApp::spawn().await;

    app.signup("a@b.com", "pw123456").await;

    let response = app
        .post("/api/auth/login")
        .json(&json!({
            "email": "a@b.com",
            "password": "pw123456"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let token = body["data"]["token"].as_str().expect("No token in body");

    let response = app
        .get_authenticated("/api/users/me", token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = TestApp::spawn().await;

    app.signup("a@b.com", "pw123456").await;

    let wrong_password = app
        .post("/api/auth/login")
        .json(&json!({
            "email": "a@b.com",
            "password": "wrong_password"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    let unknown_email = app
        .post("/api/auth/login")
        .json(&json!({
            "email": "ghost@b.com",
            "password": "pw123456"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);

    // Same body either way, so callers cannot probe which emails exist
    let wrong_password: serde_json::Value = wrong_password.json().await.unwrap();
    let unknown_email: serde_json::Value = unknown_email.json().await.unwrap();
    assert_eq!(wrong_password, unknown_email);
}

#[tokio::test]
async fn test_protected_route_without_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/users/me")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_protected_route_with_garbage_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get_authenticated("/api/users/me", "not.a.token")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_survives_only_its_own_store() {
    // Tokens are stateless; the subject must still resolve in the store
    // that serves the request.
    let app = TestApp::spawn().await;
    let other = TestApp::spawn().await;

    let token = app.signup("a@b.com", "pw123456").await;

    // Same secret, different (empty) store: the user id does not resolve
    let response = other
        .get_authenticated("/api/users/me", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
