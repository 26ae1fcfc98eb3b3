//! Wishlist item repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use wishhub_core::error::{AppError, ErrorKind};
use wishhub_core::result::AppResult;
use wishhub_entity::item::{CreateItem, UpdateItem, WishlistItem};

/// Repository for item CRUD operations, always scoped to a parent wishlist.
#[derive(Debug, Clone)]
pub struct ItemRepository {
    pool: PgPool,
}

impl ItemRepository {
    /// Create a new item repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List items of a wishlist in creation order.
    pub async fn find_by_wishlist(&self, wishlist_id: Uuid) -> AppResult<Vec<WishlistItem>> {
        sqlx::query_as::<_, WishlistItem>(
            "SELECT * FROM wishlist_items WHERE wishlist_id = $1 ORDER BY created_at ASC",
        )
        .bind(wishlist_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list items", e))
    }

    /// Find a single item within a wishlist.
    pub async fn find_by_id(
        &self,
        wishlist_id: Uuid,
        item_id: Uuid,
    ) -> AppResult<Option<WishlistItem>> {
        sqlx::query_as::<_, WishlistItem>(
            "SELECT * FROM wishlist_items WHERE wishlist_id = $1 AND id = $2",
        )
        .bind(wishlist_id)
        .bind(item_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find item", e))
    }

    /// Create a new item.
    pub async fn create(&self, data: &CreateItem) -> AppResult<WishlistItem> {
        sqlx::query_as::<_, WishlistItem>(
            "INSERT INTO wishlist_items (wishlist_id, name, description, priority) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(data.wishlist_id)
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.priority)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create item", e))
    }

    /// Apply a merge-patch update to an item.
    pub async fn update(
        &self,
        wishlist_id: Uuid,
        item_id: Uuid,
        data: &UpdateItem,
    ) -> AppResult<Option<WishlistItem>> {
        let (description_set, description) = match &data.description {
            Some(value) => (true, value.clone()),
            None => (false, None),
        };

        sqlx::query_as::<_, WishlistItem>(
            "UPDATE wishlist_items SET \
               name = COALESCE($3, name), \
               description = CASE WHEN $4 THEN $5 ELSE description END, \
               priority = COALESCE($6, priority), \
               status = COALESCE($7, status), \
               updated_at = NOW() \
             WHERE wishlist_id = $1 AND id = $2 RETURNING *",
        )
        .bind(wishlist_id)
        .bind(item_id)
        .bind(&data.name)
        .bind(description_set)
        .bind(description)
        .bind(data.priority)
        .bind(data.status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update item", e))
    }

    /// Delete an item from a wishlist.
    pub async fn delete(&self, wishlist_id: Uuid, item_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM wishlist_items WHERE wishlist_id = $1 AND id = $2")
            .bind(wishlist_id)
            .bind(item_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete item", e))?;
        Ok(result.rows_affected() > 0)
    }
}
