//! Wishlist item handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use crate::dto::request::{CreateItemRequest, UpdateItemRequest};
use crate::dto::response::ItemResponse;
use crate::dto::validate_request;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/wishlists/{id}/items
pub async fn add_item(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(wishlist_id): Path<Uuid>,
    Json(req): Json<CreateItemRequest>,
) -> Result<(StatusCode, Json<ItemResponse>), ApiError> {
    validate_request(&req)?;

    let item = state
        .item_service
        .add(&auth, wishlist_id, &req.name, req.description, req.priority)
        .await?;

    Ok((StatusCode::CREATED, Json(ItemResponse::from(item))))
}

/// GET /api/wishlists/{id}/items/{item_id}
pub async fn get_item(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((wishlist_id, item_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<ItemResponse>, ApiError> {
    let item = state.item_service.get(&auth, wishlist_id, item_id).await?;
    Ok(Json(ItemResponse::from(item)))
}

/// PUT /api/wishlists/{id}/items/{item_id}
pub async fn update_item(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((wishlist_id, item_id)): Path<(Uuid, Uuid)>,
    Json(req): Json<UpdateItemRequest>,
) -> Result<Json<ItemResponse>, ApiError> {
    let item = state
        .item_service
        .update(&auth, wishlist_id, item_id, req.into())
        .await?;
    Ok(Json(ItemResponse::from(item)))
}

/// DELETE /api/wishlists/{id}/items/{item_id}
pub async fn delete_item(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((wishlist_id, item_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, ApiError> {
    state
        .item_service
        .delete(&auth, wishlist_id, item_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
