//! Integration tests for visibility, share codes, and public resolution.

use http::StatusCode;

use crate::helpers::{TEST_PASSWORD, TestApp, unique_email};

async fn set_visibility(app: &TestApp, token: &str, id: &str, is_public: bool) -> serde_json::Value {
    let response = app
        .request(
            "PUT",
            &format!("/api/wishlists/{id}/share-settings"),
            Some(serde_json::json!({ "is_public": is_public })),
            Some(token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "share-settings: {}", response.body);
    response.body
}

#[tokio::test]
async fn test_first_publish_mints_share_code() {
    let app = TestApp::new().await;
    let token = app.register(&unique_email("publish"), TEST_PASSWORD).await;
    let id = app.create_wishlist(&token, "Housewarming").await;

    let body = set_visibility(&app, &token, &id, true).await;
    assert_eq!(body["is_public"], true);
    let code = body["share_code"].as_str().expect("code minted on publish");
    assert_eq!(code.len(), 32);

    let response = app
        .request("GET", &format!("/api/shared-wishlists/{code}"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["name"], "Housewarming");
}

#[tokio::test]
async fn test_code_is_stable_across_visibility_toggles() {
    let app = TestApp::new().await;
    let token = app.register(&unique_email("toggle"), TEST_PASSWORD).await;
    let id = app.create_wishlist(&token, "Toggled").await;

    let body = set_visibility(&app, &token, &id, true).await;
    let code = body["share_code"].as_str().expect("code").to_string();

    let body = set_visibility(&app, &token, &id, false).await;
    assert_eq!(body["is_public"], false);
    assert_eq!(body["share_code"], code.as_str());

    let body = set_visibility(&app, &token, &id, true).await;
    assert_eq!(body["share_code"], code.as_str());
}

#[tokio::test]
async fn test_private_wishlist_not_resolvable() {
    let app = TestApp::new().await;
    let token = app.register(&unique_email("hidden"), TEST_PASSWORD).await;
    let id = app.create_wishlist(&token, "Hidden").await;

    let body = set_visibility(&app, &token, &id, true).await;
    let code = body["share_code"].as_str().expect("code").to_string();
    set_visibility(&app, &token, &id, false).await;

    let private = app
        .request("GET", &format!("/api/shared-wishlists/{code}"), None, None)
        .await;
    assert_eq!(private.status, StatusCode::NOT_FOUND);

    // Indistinguishable from a code that never existed
    let unknown = app
        .request(
            "GET",
            "/api/shared-wishlists/00000000000000000000000000000000",
            None,
            None,
        )
        .await;
    assert_eq!(unknown.status, StatusCode::NOT_FOUND);
    assert_eq!(private.body, unknown.body);
}

#[tokio::test]
async fn test_regeneration_revokes_old_code() {
    let app = TestApp::new().await;
    let token = app.register(&unique_email("revoke"), TEST_PASSWORD).await;
    let id = app.create_wishlist(&token, "Revocable").await;

    let body = set_visibility(&app, &token, &id, true).await;
    let old_code = body["share_code"].as_str().expect("code").to_string();

    let response = app
        .request(
            "POST",
            &format!("/api/wishlists/{id}/share-code"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let new_code = response.body["share_code"].as_str().expect("new code").to_string();
    assert_ne!(new_code, old_code);

    // Two regenerations yield two distinct codes
    let response = app
        .request(
            "POST",
            &format!("/api/wishlists/{id}/share-code"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let third_code = response.body["share_code"].as_str().expect("code").to_string();
    assert_ne!(third_code, new_code);

    let response = app
        .request("GET", &format!("/api/shared-wishlists/{old_code}"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request("GET", &format!("/api/shared-wishlists/{third_code}"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_share_operations_require_ownership() {
    let app = TestApp::new().await;
    let token_a = app.register(&unique_email("share-owner"), TEST_PASSWORD).await;
    let token_b = app.register(&unique_email("share-other"), TEST_PASSWORD).await;
    let id = app.create_wishlist(&token_a, "Guarded").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/wishlists/{id}/share-settings"),
            Some(serde_json::json!({ "is_public": true })),
            Some(&token_b),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request(
            "POST",
            &format!("/api/wishlists/{id}/share-code"),
            None,
            Some(&token_b),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request(
            "POST",
            &format!("/api/wishlists/{}/share-code", uuid::Uuid::new_v4()),
            None,
            Some(&token_b),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_shared_view_scenario() {
    // Create "Birthday" → add "Book" priority 2 → publish → resolve →
    // projection has the item and no owner → unpublish → resolve fails.
    let app = TestApp::new().await;
    let token = app.register(&unique_email("scenario"), TEST_PASSWORD).await;
    let id = app.create_wishlist(&token, "Birthday").await;

    let response = app
        .request(
            "POST",
            &format!("/api/wishlists/{id}/items"),
            Some(serde_json::json!({ "name": "Book", "priority": 2 })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);

    let body = set_visibility(&app, &token, &id, true).await;
    let code = body["share_code"].as_str().expect("code").to_string();

    let response = app
        .request("GET", &format!("/api/shared-wishlists/{code}"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["name"], "Birthday");
    let object = response.body.as_object().expect("object");
    assert!(!object.contains_key("owner_id"));
    assert!(!object.contains_key("share_code"));
    assert!(!object.contains_key("is_public"));

    let items = response.body["items"].as_array().expect("items");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Book");
    assert_eq!(items[0]["priority"], 2);

    set_visibility(&app, &token, &id, false).await;
    let response = app
        .request("GET", &format!("/api/shared-wishlists/{code}"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
