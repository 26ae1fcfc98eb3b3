//! User account services.

pub mod service;

pub use service::{AuthenticatedUser, UserService};
