//! Integration tests for wishlist item CRUD.

use http::StatusCode;

use crate::helpers::{TEST_PASSWORD, TestApp, unique_email};

#[tokio::test]
async fn test_item_lifecycle() {
    let app = TestApp::new().await;
    let token = app.register(&unique_email("items"), TEST_PASSWORD).await;
    let wishlist_id = app.create_wishlist(&token, "Gadgets").await;

    // Priority defaults to medium
    let response = app
        .request(
            "POST",
            &format!("/api/wishlists/{wishlist_id}/items"),
            Some(serde_json::json!({ "name": "Headphones" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["priority"], 1);
    assert_eq!(response.body["status"], "pending");
    let item_id = response.body["id"].as_str().expect("item id").to_string();

    let response = app
        .request(
            "PUT",
            &format!("/api/wishlists/{wishlist_id}/items/{item_id}"),
            Some(serde_json::json!({ "priority": 2, "status": "reserved" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["priority"], 2);
    assert_eq!(response.body["status"], "reserved");
    // Merge-patch kept the name
    assert_eq!(response.body["name"], "Headphones");

    let response = app
        .request(
            "DELETE",
            &format!("/api/wishlists/{wishlist_id}/items/{item_id}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let response = app
        .request(
            "GET",
            &format!("/api/wishlists/{wishlist_id}/items/{item_id}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_items_appear_in_wishlist_detail() {
    let app = TestApp::new().await;
    let token = app.register(&unique_email("detail"), TEST_PASSWORD).await;
    let wishlist_id = app.create_wishlist(&token, "Books").await;

    for name in ["First", "Second"] {
        let response = app
            .request(
                "POST",
                &format!("/api/wishlists/{wishlist_id}/items"),
                Some(serde_json::json!({ "name": name })),
                Some(&token),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
    }

    let response = app
        .request(
            "GET",
            &format!("/api/wishlists/{wishlist_id}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let items = response.body["items"].as_array().expect("items");
    assert_eq!(items.len(), 2);
    // Creation order is preserved
    assert_eq!(items[0]["name"], "First");
    assert_eq!(items[1]["name"], "Second");
}

#[tokio::test]
async fn test_priority_out_of_range_rejected() {
    let app = TestApp::new().await;
    let token = app.register(&unique_email("prio"), TEST_PASSWORD).await;
    let wishlist_id = app.create_wishlist(&token, "Strict").await;

    for bad in [-1, 3, 7] {
        let response = app
            .request(
                "POST",
                &format!("/api/wishlists/{wishlist_id}/items"),
                Some(serde_json::json!({ "name": "Bad", "priority": bad })),
                Some(&token),
            )
            .await;
        assert!(
            response.status.is_client_error(),
            "priority {bad} must be rejected, got {}",
            response.status
        );
    }
}

#[tokio::test]
async fn test_item_blank_name_rejected() {
    let app = TestApp::new().await;
    let token = app.register(&unique_email("noname"), TEST_PASSWORD).await;
    let wishlist_id = app.create_wishlist(&token, "Named").await;

    let response = app
        .request(
            "POST",
            &format!("/api/wishlists/{wishlist_id}/items"),
            Some(serde_json::json!({ "name": "  " })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_items_require_wishlist_ownership() {
    let app = TestApp::new().await;
    let token_a = app.register(&unique_email("item-owner"), TEST_PASSWORD).await;
    let token_b = app.register(&unique_email("item-other"), TEST_PASSWORD).await;
    let wishlist_id = app.create_wishlist(&token_a, "Mine").await;

    let response = app
        .request(
            "POST",
            &format!("/api/wishlists/{wishlist_id}/items"),
            Some(serde_json::json!({ "name": "Sneaky" })),
            Some(&token_b),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}
