//! Wishlist CRUD service.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use wishhub_core::error::AppError;
use wishhub_database::repositories::item::ItemRepository;
use wishhub_database::repositories::wishlist::WishlistRepository;
use wishhub_entity::item::WishlistItem;
use wishhub_entity::wishlist::{CreateWishlist, UpdateWishlist, Wishlist};

use crate::context::RequestContext;
use crate::validate;

use super::load_owned;

/// A wishlist together with its items in display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WishlistWithItems {
    /// The wishlist record.
    pub wishlist: Wishlist,
    /// Items in creation order.
    pub items: Vec<WishlistItem>,
}

/// Manages owner-scoped wishlist CRUD.
#[derive(Debug, Clone)]
pub struct WishlistService {
    /// Wishlist repository.
    wishlist_repo: Arc<WishlistRepository>,
    /// Item repository, for loading the detail view.
    item_repo: Arc<ItemRepository>,
}

impl WishlistService {
    /// Creates a new wishlist service.
    pub fn new(wishlist_repo: Arc<WishlistRepository>, item_repo: Arc<ItemRepository>) -> Self {
        Self {
            wishlist_repo,
            item_repo,
        }
    }

    /// Lists the caller's wishlists, newest first.
    pub async fn list(&self, ctx: &RequestContext) -> Result<Vec<Wishlist>, AppError> {
        self.wishlist_repo.find_by_owner(ctx.user_id).await
    }

    /// Creates a new wishlist for the caller.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        name: &str,
        description: Option<String>,
    ) -> Result<Wishlist, AppError> {
        let name = validate::required_name("Name", name, validate::WISHLIST_NAME_MAX)?;
        let description = validate::description(description)?;

        let wishlist = self
            .wishlist_repo
            .create(&CreateWishlist {
                owner_id: ctx.user_id,
                name,
                description,
            })
            .await?;

        info!(user_id = %ctx.user_id, wishlist_id = %wishlist.id, "Wishlist created");

        Ok(wishlist)
    }

    /// Returns a wishlist with its items. Owner only.
    pub async fn get(
        &self,
        ctx: &RequestContext,
        wishlist_id: Uuid,
    ) -> Result<WishlistWithItems, AppError> {
        let wishlist = load_owned(&self.wishlist_repo, ctx, wishlist_id).await?;
        let items = self.item_repo.find_by_wishlist(wishlist.id).await?;
        Ok(WishlistWithItems { wishlist, items })
    }

    /// Applies a merge-patch update to a wishlist. Only supplied fields
    /// change.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        wishlist_id: Uuid,
        mut patch: UpdateWishlist,
    ) -> Result<Wishlist, AppError> {
        load_owned(&self.wishlist_repo, ctx, wishlist_id).await?;

        if let Some(ref name) = patch.name {
            patch.name = Some(validate::required_name(
                "Name",
                name,
                validate::WISHLIST_NAME_MAX,
            )?);
        }
        if let Some(description) = patch.description {
            patch.description = Some(validate::description(description)?);
        }

        let updated = self
            .wishlist_repo
            .update(wishlist_id, &patch)
            .await?
            .ok_or_else(|| AppError::not_found("Wishlist not found"))?;

        info!(user_id = %ctx.user_id, wishlist_id = %wishlist_id, "Wishlist updated");

        Ok(updated)
    }

    /// Deletes a wishlist and, through the schema cascade, all of its items.
    pub async fn delete(&self, ctx: &RequestContext, wishlist_id: Uuid) -> Result<(), AppError> {
        load_owned(&self.wishlist_repo, ctx, wishlist_id).await?;

        self.wishlist_repo.delete(wishlist_id).await?;

        info!(user_id = %ctx.user_id, wishlist_id = %wishlist_id, "Wishlist deleted");

        Ok(())
    }
}
