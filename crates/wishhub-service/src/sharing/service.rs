//! Visibility flag and share-code lifecycle service.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use wishhub_core::error::AppError;
use wishhub_database::repositories::wishlist::WishlistRepository;
use wishhub_entity::wishlist::Wishlist;

use crate::context::RequestContext;
use crate::wishlist::load_owned;

use super::code::ShareCodeGenerator;

/// Owns the public/private flag and share-code issuance for wishlists.
#[derive(Debug, Clone)]
pub struct VisibilityService {
    /// Wishlist repository.
    wishlist_repo: Arc<WishlistRepository>,
    /// Share code generator.
    code_generator: Arc<ShareCodeGenerator>,
}

impl VisibilityService {
    /// Creates a new visibility service.
    pub fn new(
        wishlist_repo: Arc<WishlistRepository>,
        code_generator: Arc<ShareCodeGenerator>,
    ) -> Self {
        Self {
            wishlist_repo,
            code_generator,
        }
    }

    /// Sets the visibility flag of a wishlist owned by the caller.
    ///
    /// The first private→public transition mints a share code in the same
    /// row update, so a freshly published wishlist always has a code.
    /// Toggling back to private keeps the stored code; the resolver stops
    /// honoring it while the list is private.
    pub async fn set_visibility(
        &self,
        ctx: &RequestContext,
        wishlist_id: Uuid,
        is_public: bool,
    ) -> Result<Wishlist, AppError> {
        load_owned(&self.wishlist_repo, ctx, wishlist_id).await?;

        let candidate = self.code_generator.generate();
        let wishlist = self
            .wishlist_repo
            .set_visibility(wishlist_id, is_public, &candidate)
            .await?
            .ok_or_else(|| AppError::not_found("Wishlist not found"))?;

        info!(
            user_id = %ctx.user_id,
            wishlist_id = %wishlist_id,
            is_public,
            "Wishlist visibility changed"
        );

        Ok(wishlist)
    }

    /// Replaces the share code of a wishlist owned by the caller.
    ///
    /// Every call yields a fresh code, invalidating previously distributed
    /// links. This is the revocation mechanism.
    pub async fn generate_share_code(
        &self,
        ctx: &RequestContext,
        wishlist_id: Uuid,
    ) -> Result<String, AppError> {
        load_owned(&self.wishlist_repo, ctx, wishlist_id).await?;

        let code = self.code_generator.generate();
        self.wishlist_repo
            .set_share_code(wishlist_id, &code)
            .await?
            .ok_or_else(|| AppError::not_found("Wishlist not found"))?;

        info!(
            user_id = %ctx.user_id,
            wishlist_id = %wishlist_id,
            "Share code regenerated"
        );

        Ok(code)
    }
}
