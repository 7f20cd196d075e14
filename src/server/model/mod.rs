//! Server-side models.
//!
//! - `app` - Shared Axum application state
//! - `db` - Type aliases for SeaORM entity models
//! - `identity` - Identity snapshots consumed by set resolution

/// Shared application state
pub mod app;
/// Entity model aliases
pub mod db;
/// Credential status and affiliations of a user
pub mod identity;
