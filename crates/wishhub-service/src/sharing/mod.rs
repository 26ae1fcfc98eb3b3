//! Visibility and share-code lifecycle.
//!
//! [`VisibilityService`] is the single writer of the `is_public` flag and
//! the share code; [`ShareResolver`] is the unauthenticated read path that
//! turns a code back into a wishlist projection.

pub mod code;
pub mod resolver;
pub mod service;

pub use code::ShareCodeGenerator;
pub use resolver::{ShareResolver, SharedItem, SharedWishlist};
pub use service::VisibilityService;
