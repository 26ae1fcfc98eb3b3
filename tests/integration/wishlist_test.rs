//! Integration tests for wishlist CRUD.

use http::StatusCode;

use crate::helpers::{TEST_PASSWORD, TestApp, unique_email};

#[tokio::test]
async fn test_create_and_get_wishlist() {
    let app = TestApp::new().await;
    let token = app.register(&unique_email("wl"), TEST_PASSWORD).await;

    let response = app
        .request(
            "POST",
            "/api/wishlists",
            Some(serde_json::json!({ "name": "Birthday", "description": "30th birthday" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["name"], "Birthday");
    assert_eq!(response.body["status"], "active");
    assert_eq!(response.body["is_public"], false);
    assert!(response.body["share_code"].is_null());

    let id = response.body["id"].as_str().expect("id");
    let response = app
        .request("GET", &format!("/api/wishlists/{id}"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["description"], "30th birthday");
}

#[tokio::test]
async fn test_create_rejects_blank_name() {
    let app = TestApp::new().await;
    let token = app.register(&unique_email("blank"), TEST_PASSWORD).await;

    let response = app
        .request(
            "POST",
            "/api/wishlists",
            Some(serde_json::json!({ "name": "   " })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_partial_update_leaves_other_fields() {
    let app = TestApp::new().await;
    let token = app.register(&unique_email("patch"), TEST_PASSWORD).await;
    let id = app.create_wishlist(&token, "Original").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/wishlists/{id}"),
            Some(serde_json::json!({ "description": "x" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["name"], "Original");
    assert_eq!(response.body["description"], "x");
    assert_eq!(response.body["status"], "active");

    // An explicit null clears the description, nothing else changes
    let response = app
        .request(
            "PUT",
            &format!("/api/wishlists/{id}"),
            Some(serde_json::json!({ "description": null, "status": "archived" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["name"], "Original");
    assert!(response.body["description"].is_null());
    assert_eq!(response.body["status"], "archived");
}

#[tokio::test]
async fn test_list_is_owner_scoped() {
    let app = TestApp::new().await;
    let token_a = app.register(&unique_email("owner-a"), TEST_PASSWORD).await;
    let token_b = app.register(&unique_email("owner-b"), TEST_PASSWORD).await;

    app.create_wishlist(&token_a, "A one").await;
    app.create_wishlist(&token_a, "A two").await;
    app.create_wishlist(&token_b, "B one").await;

    let response = app.request("GET", "/api/wishlists", None, Some(&token_a)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.as_array().expect("array").len(), 2);
}

#[tokio::test]
async fn test_cross_owner_access_forbidden() {
    let app = TestApp::new().await;
    let token_a = app.register(&unique_email("victim"), TEST_PASSWORD).await;
    let token_b = app.register(&unique_email("intruder"), TEST_PASSWORD).await;
    let id = app.create_wishlist(&token_a, "Private list").await;

    let response = app
        .request("GET", &format!("/api/wishlists/{id}"), None, Some(&token_b))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request(
            "PUT",
            &format!("/api/wishlists/{id}"),
            Some(serde_json::json!({ "name": "Hijacked" })),
            Some(&token_b),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request("DELETE", &format!("/api/wishlists/{id}"), None, Some(&token_b))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_unknown_wishlist_not_found() {
    let app = TestApp::new().await;
    let token = app.register(&unique_email("missing"), TEST_PASSWORD).await;

    let response = app
        .request(
            "GET",
            &format!("/api/wishlists/{}", uuid::Uuid::new_v4()),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_cascades_to_items() {
    let app = TestApp::new().await;
    let token = app.register(&unique_email("cascade"), TEST_PASSWORD).await;
    let id = app.create_wishlist(&token, "Doomed").await;

    let response = app
        .request(
            "POST",
            &format!("/api/wishlists/{id}/items"),
            Some(serde_json::json!({ "name": "Book" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    let item_id = response.body["id"].as_str().expect("item id").to_string();

    let response = app
        .request("DELETE", &format!("/api/wishlists/{id}"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let response = app
        .request(
            "GET",
            &format!("/api/wishlists/{id}/items/{item_id}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    // No orphaned rows behind the API either
    let orphans: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM wishlist_items WHERE wishlist_id = $1")
            .bind(id.parse::<uuid::Uuid>().expect("uuid"))
            .fetch_one(&app.db_pool)
            .await
            .expect("count items");
    assert_eq!(orphans, 0);
}
