//! Wishlist repository implementation.
//!
//! Visibility and share-code mutations are single-statement updates so that
//! PostgreSQL row locking serializes concurrent toggles per wishlist.

use sqlx::PgPool;
use uuid::Uuid;

use wishhub_core::error::{AppError, ErrorKind};
use wishhub_core::result::AppResult;
use wishhub_entity::wishlist::{CreateWishlist, UpdateWishlist, Wishlist};

/// Repository for wishlist CRUD, visibility, and share-code operations.
#[derive(Debug, Clone)]
pub struct WishlistRepository {
    pool: PgPool,
}

impl WishlistRepository {
    /// Create a new wishlist repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a wishlist by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Wishlist>> {
        sqlx::query_as::<_, Wishlist>("SELECT * FROM wishlists WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find wishlist", e))
    }

    /// List wishlists owned by a user, newest first.
    pub async fn find_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<Wishlist>> {
        sqlx::query_as::<_, Wishlist>(
            "SELECT * FROM wishlists WHERE owner_id = $1 ORDER BY created_at DESC",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list wishlists", e))
    }

    /// Create a new wishlist.
    pub async fn create(&self, data: &CreateWishlist) -> AppResult<Wishlist> {
        sqlx::query_as::<_, Wishlist>(
            "INSERT INTO wishlists (owner_id, name, description) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(data.owner_id)
        .bind(&data.name)
        .bind(&data.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create wishlist", e))
    }

    /// Apply a merge-patch update. Fields left `None` keep their current
    /// value; `description: Some(None)` clears the column.
    pub async fn update(&self, id: Uuid, data: &UpdateWishlist) -> AppResult<Option<Wishlist>> {
        let (description_set, description) = match &data.description {
            Some(value) => (true, value.clone()),
            None => (false, None),
        };

        sqlx::query_as::<_, Wishlist>(
            "UPDATE wishlists SET \
               name = COALESCE($2, name), \
               description = CASE WHEN $3 THEN $4 ELSE description END, \
               status = COALESCE($5, status), \
               updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(description_set)
        .bind(description)
        .bind(data.status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update wishlist", e))
    }

    /// Delete a wishlist. Items cascade at the schema level.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM wishlists WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete wishlist", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    /// Set the visibility flag. When publishing a wishlist that has never
    /// had a share code, `candidate_code` is stored in the same statement,
    /// so first publication and code issuance are atomic. An existing code
    /// is never replaced here, which keeps previously distributed links
    /// working across visibility toggles.
    pub async fn set_visibility(
        &self,
        id: Uuid,
        is_public: bool,
        candidate_code: &str,
    ) -> AppResult<Option<Wishlist>> {
        sqlx::query_as::<_, Wishlist>(
            "UPDATE wishlists SET \
               is_public = $2, \
               share_code = CASE WHEN $2 AND share_code IS NULL THEN $3 ELSE share_code END, \
               updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(is_public)
        .bind(candidate_code)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to set visibility", e))
    }

    /// Unconditionally replace the share code, revoking the previous one.
    pub async fn set_share_code(&self, id: Uuid, code: &str) -> AppResult<Option<Wishlist>> {
        sqlx::query_as::<_, Wishlist>(
            "UPDATE wishlists SET share_code = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to set share code", e))
    }

    /// Resolve a share code to its wishlist, only while the list is public.
    /// A private list with a stored code is not returned.
    pub async fn find_public_by_share_code(&self, code: &str) -> AppResult<Option<Wishlist>> {
        sqlx::query_as::<_, Wishlist>(
            "SELECT * FROM wishlists WHERE share_code = $1 AND is_public = TRUE",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to resolve share code", e)
        })
    }
}
