//! # wishhub-auth
//!
//! Authentication building blocks for WishHub: JWT bearer-token issuance
//! and validation, Argon2id password hashing, and password policy checks.

pub mod jwt;
pub mod password;

pub use jwt::claims::Claims;
pub use jwt::decoder::JwtDecoder;
pub use jwt::encoder::JwtEncoder;
pub use password::hasher::PasswordHasher;
pub use password::validator::PasswordValidator;
