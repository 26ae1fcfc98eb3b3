//! # wishhub-service
//!
//! Business logic services for WishHub. Each service owns one domain
//! concern and orchestrates repositories and auth primitives:
//!
//! - [`user::UserService`] — registration, login, profile.
//! - [`wishlist::WishlistService`] / [`wishlist::ItemService`] —
//!   owner-scoped CRUD with merge-patch updates.
//! - [`sharing::VisibilityService`] — public/private flag and share-code
//!   lifecycle.
//! - [`sharing::ShareResolver`] — unauthenticated share-code resolution.

pub mod context;
pub mod sharing;
pub mod user;
pub mod wishlist;

pub(crate) mod validate;

pub use context::RequestContext;
