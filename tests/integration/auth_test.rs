//! Integration tests for registration, login, and profile.

use http::StatusCode;

use crate::helpers::{TEST_PASSWORD, TestApp, unique_email};

#[tokio::test]
async fn test_register_login_and_me() {
    let app = TestApp::new().await;
    let email = unique_email("auth");

    let token = app.register(&email, TEST_PASSWORD).await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({ "email": email, "password": TEST_PASSWORD })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["token"].as_str().is_some());

    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["email"], email.as_str());
    // Password hash never leaves the server
    assert!(response.body.get("password_hash").is_none());
}

#[tokio::test]
async fn test_me_requires_token() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/auth/me", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app
        .request("GET", "/api/auth/me", None, Some("not-a-real-token"))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_register_duplicate_email_conflicts() {
    let app = TestApp::new().await;
    let email = unique_email("dup");

    app.register(&email, TEST_PASSWORD).await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({ "email": email, "password": TEST_PASSWORD })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_register_rejects_weak_password() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({ "email": unique_email("weak"), "password": "password" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_rejects_invalid_email() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({ "email": "not-an-email", "password": TEST_PASSWORD })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_wrong_password_unauthorized() {
    let app = TestApp::new().await;
    let email = unique_email("wrongpw");
    app.register(&email, TEST_PASSWORD).await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({ "email": email, "password": "incorrect-password" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    // Unknown email fails the same way
    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": unique_email("ghost"),
                "password": TEST_PASSWORD
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
