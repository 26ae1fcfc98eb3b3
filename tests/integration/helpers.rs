//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use wishhub_core::config::AppConfig;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db_pool: PgPool,
}

/// Decoded response from a test request.
pub struct TestResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Parsed JSON body (`Null` for empty bodies).
    pub body: Value,
}

impl TestApp {
    /// Create a new test application
    pub async fn new() -> Self {
        let config = AppConfig::load_from("tests/fixtures/test_config.toml")
            .expect("Failed to load test config");

        let db_pool = wishhub_database::DatabasePool::connect(&config.database)
            .await
            .expect("Failed to connect to test database")
            .into_pool();

        wishhub_database::migration::run_migrations(&db_pool)
            .await
            .expect("Failed to run migrations");

        let state = wishhub_api::build_state(config, db_pool.clone());
        let router = wishhub_api::router::build_router(state);

        Self { router, db_pool }
    }

    /// Send a request through the router and decode the response.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {token}"));
        }

        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .expect("Failed to build request"),
            None => builder.body(Body::empty()).expect("Failed to build request"),
        };

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let bytes = http_body_util::BodyExt::collect(response.into_body())
            .await
            .expect("Failed to read body")
            .to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }

    /// Register a new account and return its bearer token.
    pub async fn register(&self, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/register",
                Some(serde_json::json!({ "email": email, "password": password })),
                None,
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "register failed: {}",
            response.body
        );
        response.body["token"]
            .as_str()
            .expect("token in register response")
            .to_string()
    }

    /// Create a wishlist and return its id.
    pub async fn create_wishlist(&self, token: &str, name: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/wishlists",
                Some(serde_json::json!({ "name": name })),
                Some(token),
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "create wishlist failed: {}",
            response.body
        );
        response.body["id"]
            .as_str()
            .expect("id in wishlist response")
            .to_string()
    }
}

/// Password that satisfies the registration policy.
pub const TEST_PASSWORD: &str = "midnight-orchid-42";

/// Generates a unique email so parallel tests never collide.
pub fn unique_email(prefix: &str) -> String {
    format!("{prefix}-{}@example.com", uuid::Uuid::new_v4())
}
