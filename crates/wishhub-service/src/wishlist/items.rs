//! Wishlist item CRUD service.
//!
//! Every operation resolves ownership through the parent wishlist before
//! touching the item.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use wishhub_core::error::AppError;
use wishhub_database::repositories::item::ItemRepository;
use wishhub_database::repositories::wishlist::WishlistRepository;
use wishhub_entity::item::{CreateItem, ItemPriority, UpdateItem, WishlistItem};

use crate::context::RequestContext;
use crate::validate;

use super::load_owned;

/// Manages items nested under a wishlist.
#[derive(Debug, Clone)]
pub struct ItemService {
    /// Wishlist repository, for ownership checks.
    wishlist_repo: Arc<WishlistRepository>,
    /// Item repository.
    item_repo: Arc<ItemRepository>,
}

impl ItemService {
    /// Creates a new item service.
    pub fn new(wishlist_repo: Arc<WishlistRepository>, item_repo: Arc<ItemRepository>) -> Self {
        Self {
            wishlist_repo,
            item_repo,
        }
    }

    /// Adds an item to a wishlist owned by the caller.
    pub async fn add(
        &self,
        ctx: &RequestContext,
        wishlist_id: Uuid,
        name: &str,
        description: Option<String>,
        priority: Option<ItemPriority>,
    ) -> Result<WishlistItem, AppError> {
        load_owned(&self.wishlist_repo, ctx, wishlist_id).await?;

        let name = validate::required_name("Name", name, validate::ITEM_NAME_MAX)?;
        let description = validate::description(description)?;

        let item = self
            .item_repo
            .create(&CreateItem {
                wishlist_id,
                name,
                description,
                priority: priority.unwrap_or_default(),
            })
            .await?;

        info!(
            user_id = %ctx.user_id,
            wishlist_id = %wishlist_id,
            item_id = %item.id,
            "Item added"
        );

        Ok(item)
    }

    /// Returns a single item of a wishlist owned by the caller.
    pub async fn get(
        &self,
        ctx: &RequestContext,
        wishlist_id: Uuid,
        item_id: Uuid,
    ) -> Result<WishlistItem, AppError> {
        load_owned(&self.wishlist_repo, ctx, wishlist_id).await?;

        self.item_repo
            .find_by_id(wishlist_id, item_id)
            .await?
            .ok_or_else(|| AppError::not_found("Item not found"))
    }

    /// Applies a merge-patch update to an item.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        wishlist_id: Uuid,
        item_id: Uuid,
        mut patch: UpdateItem,
    ) -> Result<WishlistItem, AppError> {
        load_owned(&self.wishlist_repo, ctx, wishlist_id).await?;

        if let Some(ref name) = patch.name {
            patch.name = Some(validate::required_name(
                "Name",
                name,
                validate::ITEM_NAME_MAX,
            )?);
        }
        if let Some(description) = patch.description {
            patch.description = Some(validate::description(description)?);
        }

        let item = self
            .item_repo
            .update(wishlist_id, item_id, &patch)
            .await?
            .ok_or_else(|| AppError::not_found("Item not found"))?;

        info!(
            user_id = %ctx.user_id,
            wishlist_id = %wishlist_id,
            item_id = %item_id,
            "Item updated"
        );

        Ok(item)
    }

    /// Deletes an item from a wishlist owned by the caller.
    pub async fn delete(
        &self,
        ctx: &RequestContext,
        wishlist_id: Uuid,
        item_id: Uuid,
    ) -> Result<(), AppError> {
        load_owned(&self.wishlist_repo, ctx, wishlist_id).await?;

        let deleted = self.item_repo.delete(wishlist_id, item_id).await?;
        if !deleted {
            return Err(AppError::not_found("Item not found"));
        }

        info!(
            user_id = %ctx.user_id,
            wishlist_id = %wishlist_id,
            item_id = %item_id,
            "Item deleted"
        );

        Ok(())
    }
}
