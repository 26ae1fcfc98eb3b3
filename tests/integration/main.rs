//! Integration test entry point.
//!
//! These tests exercise the full HTTP stack against a real PostgreSQL
//! database (see `tests/fixtures/test_config.toml`). Each test isolates
//! its data through unique email addresses.

mod helpers;

mod auth_test;
mod item_test;
mod share_test;
mod wishlist_test;
