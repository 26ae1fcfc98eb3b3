//! Token bucket rate limiter middleware.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use tokio::sync::Mutex;

use wishhub_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Simple in-memory token bucket rate limiter.
#[derive(Debug)]
pub struct RateLimiter {
    /// Client key → bucket state.
    buckets: Arc<Mutex<HashMap<String, TokenBucket>>>,
    /// Maximum tokens per bucket.
    max_tokens: u32,
    /// Token refill rate per second.
    refill_rate: f64,
}

#[derive(Debug, Clone)]
struct TokenBucket {
    tokens: f64,
    last_refill: Instant,
}

impl RateLimiter {
    /// Creates a new rate limiter.
    pub fn new(max_tokens: u32, refill_rate: f64) -> Self {
        Self {
            buckets: Arc::new(Mutex::new(HashMap::new())),
            max_tokens,
            refill_rate,
        }
    }

    /// Attempts to consume a token for the given key.
    pub async fn check(&self, key: &str) -> bool {
        let mut buckets = self.buckets.lock().await;
        let now = Instant::now();

        let bucket = buckets.entry(key.to_string()).or_insert(TokenBucket {
            tokens: self.max_tokens as f64,
            last_refill: now,
        });

        // Refill tokens
        let elapsed = now.duration_since(bucket.last_refill).as_secs_f64();
        bucket.tokens = (bucket.tokens + elapsed * self.refill_rate).min(self.max_tokens as f64);
        bucket.last_refill = now;

        // Try to consume
        if bucket.tokens >= 1.0 {
            bucket.tokens -= 1.0;
            true
        } else {
            false
        }
    }
}

/// Middleware rejecting requests whose client has exhausted its bucket.
///
/// Clients are keyed by the first `X-Forwarded-For` entry when present;
/// direct connections share one bucket.
pub async fn rate_limit(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if !state.config.server.rate_limit.enabled {
        return Ok(next.run(request).await);
    }

    let key = request
        .headers()
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .unwrap_or_else(|| "direct".to_string());

    if !state.rate_limiter.check(&key).await {
        return Err(AppError::rate_limited("Rate limit exceeded").into());
    }

    Ok(next.run(request).await)
}
