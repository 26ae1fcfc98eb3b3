//! Auth handlers — register, login, me.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{TokenResponse, UserResponse};
use crate::dto::validate_request;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<TokenResponse>), ApiError> {
    validate_request(&req)?;

    let result = state.user_service.register(&req.email, &req.password).await?;

    Ok((
        StatusCode::CREATED,
        Json(TokenResponse {
            token: result.token,
        }),
    ))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    validate_request(&req)?;

    let result = state.user_service.login(&req.email, &req.password).await?;

    Ok(Json(TokenResponse {
        token: result.token,
    }))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state.user_service.get_profile(&auth).await?;
    Ok(Json(UserResponse::from(user)))
}
