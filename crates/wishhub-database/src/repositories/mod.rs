//! Concrete sqlx repository implementations.

pub mod item;
pub mod user;
pub mod wishlist;

pub use item::ItemRepository;
pub use user::UserRepository;
pub use wishlist::WishlistRepository;
